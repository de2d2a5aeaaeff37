use std::{env, net::IpAddr, time::Duration as StdDuration};
use chrono::Duration;

use crate::error::AppError;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: IpAddr,
    pub upstream_base_url: String,
    /// `None` leaves outbound requests unbounded.
    pub upstream_timeout: Option<StdDuration>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".into())
            .parse::<IpAddr>()
            .map_err(|_| AppError::ConfigError("Invalid HOST".into()))?;

        // Upstream config
        let upstream_base_url = env::var("COINGECKO_API_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.into());

        let upstream_timeout = match env::var("UPSTREAM_TIMEOUT") {
            Ok(value) => {
                let timeout = parse_duration(&value)
                    .ok()
                    .and_then(|d| d.to_std().ok())
                    .ok_or_else(|| AppError::ConfigError("Invalid UPSTREAM_TIMEOUT format".into()))?;
                Some(timeout)
            }
            Err(_) => None,
        };

        Ok(Self {
            port,
            host,
            upstream_base_url,
            upstream_timeout,
        })
    }
}

fn parse_duration(duration_str: &str) -> Result<Duration, &'static str> {
    let duration_str = duration_str.trim();

    if duration_str.is_empty() {
        return Err("Duration string is empty");
    }

    // Extract the number and unit parts
    let len = duration_str.len();
    let (num_part, unit_part) = duration_str.split_at(
        duration_str
            .chars()
            .position(|c| !c.is_ascii_digit())
            .unwrap_or(len)
    );

    let num = num_part.parse::<i64>().map_err(|_| "Invalid number")?;

    let duration = match unit_part {
        "s" => Duration::try_seconds(num),
        "m" => Duration::try_minutes(num),
        "h" => Duration::try_hours(num),
        "d" => Duration::try_days(num),
        _ => return Err("Unknown time unit, use s, m, h, or d"),
    };

    duration.ok_or("Duration out of range")
}
