use axum::Router;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  config::Config,
  error::AppError,
  market::{routes::market_routes, service::MarketService},
};

pub fn create_router(config: &Config) -> Result<Router, AppError> {
  // Setup CORS
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  // Setup services
  let market_service = MarketService::new(config)?;

  // Build the router
  let app = Router::new()
      .nest("/api", market_routes(market_service))
      .layer(TraceLayer::new_for_http())
      .layer(cors);

  Ok(app)
}
