//! Kirana dispatch core - order batching and route sequencing.
//!
//! Groups unbatched delivery orders into per-driver batches by greedy
//! marginal route cost, then sequences each batch by nearest neighbor
//! from the depot. Persistence, driver binding, and the request surface
//! live in the surrounding platform; this crate is the pure computation
//! they invoke.

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use config::{Config, PlannerConfig};
pub use error::DispatchError;
pub use services::planner::DispatchPlanner;
pub use types::{Batch, DispatchPlan, OrderRecord, RankedOrder};
