//! Greedy batch assignment balancing route length across drivers.
//!
//! Orders arrive sorted by ETA and are assigned one at a time: each order
//! joins whichever group adds the least route length when appended after
//! the group's current last stop. The result depends on the ETA ordering
//! (route as orders become due), and ties go to the lowest group index.

use tracing::debug;

use crate::services::geo;
use crate::types::{Coordinates, RoutableOrder};

/// A group under construction. The accumulated path length and last
/// position are cached so each candidate cost is one haversine leg
/// instead of a full route re-walk. The cache accumulates legs left to
/// right, matching `geo::route_distance` bit for bit, so tie-break
/// behavior is identical to recomputing the whole path per candidate.
struct OpenGroup {
    orders: Vec<RoutableOrder>,
    path_km: f64,
    last_position: Coordinates,
}

impl OpenGroup {
    fn new(depot: Coordinates) -> Self {
        Self {
            orders: Vec::new(),
            path_km: 0.0,
            last_position: depot,
        }
    }

    /// Route length of {depot -> members in insertion order -> candidate}.
    fn cost_with(&self, candidate: &Coordinates) -> f64 {
        self.path_km + geo::haversine_distance(&self.last_position, candidate)
    }

    fn push(&mut self, order: RoutableOrder) {
        self.path_km = self.cost_with(&order.coordinates);
        self.last_position = order.coordinates;
        self.orders.push(order);
    }
}

/// Distribute orders across `drivers` groups by greedy marginal route cost.
///
/// `orders` must already be sorted ascending by ETA; the planner owns that
/// contract. Requires `drivers >= 1`. Returns exactly `drivers` groups,
/// some possibly empty, in creation order; the group index is the
/// caller's round-robin driver key.
///
/// The scan over groups is linear per order, which is fine for the tens
/// to low hundreds of orders a clustering run sees.
pub fn assign_batches(
    depot: Coordinates,
    orders: Vec<RoutableOrder>,
    drivers: usize,
) -> Vec<Vec<RoutableOrder>> {
    let mut groups: Vec<OpenGroup> = (0..drivers).map(|_| OpenGroup::new(depot)).collect();

    for order in orders {
        let mut best_idx = 0;
        let mut best_cost = f64::INFINITY;

        for (idx, group) in groups.iter().enumerate() {
            let cost = group.cost_with(&order.coordinates);
            if cost < best_cost {
                best_cost = cost;
                best_idx = idx;
            }
        }

        debug!(
            order_id = %order.id,
            group = best_idx,
            route_km = best_cost,
            "order assigned to group"
        );
        groups[best_idx].push(order);
    }

    groups.into_iter().map(|group| group.orders).collect()
}
