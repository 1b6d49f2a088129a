//! Caller-visible dispatch errors.

use thiserror::Error;

use crate::types::ExcludedOrder;

/// Failure signals surfaced to the dispatch caller.
///
/// All variants are caller errors; the request boundary maps them to a
/// bad-request response. The algorithms themselves are total over
/// validated input, so there is no internal-fault variant.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No active drivers, so there are no groups to assign into.
    #[error("no active drivers available for batching")]
    NoActiveDrivers,

    /// The unbatched order set is empty.
    #[error("no unbatched orders to cluster")]
    NoUnbatchedOrders,

    /// Every submitted order was rejected at the ingestion boundary.
    #[error("all {} submitted orders are unroutable", excluded.len())]
    NoRoutableOrders { excluded: Vec<ExcludedOrder> },
}

impl DispatchError {
    /// Stable machine-readable code for the response envelope.
    pub const fn code(&self) -> &'static str {
        match self {
            DispatchError::NoActiveDrivers => "NO_ACTIVE_DRIVERS",
            DispatchError::NoUnbatchedOrders => "NO_UNBATCHED_ORDERS",
            DispatchError::NoRoutableOrders { .. } => "NO_ROUTABLE_ORDERS",
        }
    }
}
