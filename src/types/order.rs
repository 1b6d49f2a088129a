//! Order types consumed by the dispatch core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// An unbatched order as handed over by the ingestion boundary.
///
/// Latitude, longitude, and ETA are optional because the upstream import
/// stores `null` whenever a field fails to parse, and such records still
/// reach the dispatch request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: Uuid,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub eta: Option<DateTime<Utc>>,
}

/// An order that passed ingestion validation and can be routed.
#[derive(Debug, Clone)]
pub struct RoutableOrder {
    pub id: Uuid,
    pub coordinates: Coordinates,
    pub eta: DateTime<Utc>,
}

impl OrderRecord {
    /// Validate into a routable order, or report why it cannot be routed.
    ///
    /// Distance comparisons against NaN silently lose, so non-finite
    /// coordinates must never reach the batching loop.
    pub fn into_routable(self) -> Result<RoutableOrder, ExcludedOrder> {
        let (lat, lng) = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(self.excluded(ExclusionReason::MissingCoordinates)),
        };
        if !lat.is_finite() || !lng.is_finite() {
            return Err(self.excluded(ExclusionReason::NonFiniteCoordinates));
        }
        let eta = match self.eta {
            Some(eta) => eta,
            None => return Err(self.excluded(ExclusionReason::MissingEta)),
        };

        Ok(RoutableOrder {
            id: self.id,
            coordinates: Coordinates { lat, lng },
            eta,
        })
    }

    fn excluded(&self, reason: ExclusionReason) -> ExcludedOrder {
        ExcludedOrder { id: self.id, reason }
    }
}

/// Why an order was rejected at the ingestion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    MissingCoordinates,
    NonFiniteCoordinates,
    MissingEta,
}

impl ExclusionReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExclusionReason::MissingCoordinates => "missing_coordinates",
            ExclusionReason::NonFiniteCoordinates => "non_finite_coordinates",
            ExclusionReason::MissingEta => "missing_eta",
        }
    }
}

/// An order rejected from clustering, with the defect that caused it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedOrder {
    pub id: Uuid,
    pub reason: ExclusionReason,
}
