pub mod api;
pub mod config;
pub mod error;
pub mod market;

// Re-export common modules
pub use api::router;
pub use config::Config;
pub use error::AppError;
