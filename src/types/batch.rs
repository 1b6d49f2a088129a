//! Batch and dispatch plan types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Coordinates, ExcludedOrder};

/// An order placed in a batch's visiting sequence.
///
/// Always a new record, never a mutation of the input order: input
/// records may be shared across requests and must not carry stale ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOrder {
    pub order_id: Uuid,
    pub coordinates: Coordinates,
    pub eta: DateTime<Utc>,
    /// 1-based position in the batch's visiting sequence.
    pub rank: u32,
}

/// One driver's delivery run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// 0-based index in group-creation order. The caller binds batches to
    /// drivers round-robin by this index; the core never picks drivers.
    pub group_index: usize,
    pub orders: Vec<RankedOrder>,
}

/// Result of one clustering run, ready for external persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPlan {
    pub drivers_count: usize,
    /// Routable orders that entered clustering.
    pub orders_count: usize,
    /// Non-empty batches only.
    pub batches: Vec<Batch>,
    /// Orders rejected at the ingestion boundary.
    pub excluded: Vec<ExcludedOrder>,
}
