//! Configuration management

use anyhow::{Context, Result};

use crate::types::Coordinates;

/// Default depot: the Hassan distribution hub.
pub const DEFAULT_DEPOT_LAT: f64 = 13.0072;
pub const DEFAULT_DEPOT_LNG: f64 = 76.0962;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Depot all delivery routes originate from
    pub depot: Coordinates,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let lat = coordinate_var("DEPOT_LAT", DEFAULT_DEPOT_LAT)?;
        let lng = coordinate_var("DEPOT_LNG", DEFAULT_DEPOT_LNG)?;

        Ok(Self {
            depot: Coordinates { lat, lng },
        })
    }
}

fn coordinate_var(name: &str, default: f64) -> Result<f64> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("{name} must be a decimal-degree number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

/// Planner configuration, passed explicitly into `DispatchPlanner` so one
/// process can plan for multiple depots/regions without code change.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    pub depot: Coordinates,
}

impl PlannerConfig {
    pub fn new(depot: Coordinates) -> Self {
        Self { depot }
    }
}
