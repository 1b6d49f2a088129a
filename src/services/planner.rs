//! Dispatch planning orchestration.
//!
//! The planner is the crate's single entry point: it validates the
//! request, rejects malformed orders at the boundary, sorts by ETA, runs
//! greedy batch assignment, then sequences every non-empty batch.

use tracing::{info, warn};

use crate::config::PlannerConfig;
use crate::error::DispatchError;
use crate::services::{batching, sequencing};
use crate::types::{Batch, DispatchPlan, OrderRecord};

/// Batch planner for one dispatch region.
pub struct DispatchPlanner {
    config: PlannerConfig,
}

impl DispatchPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Cluster all unbatched orders into at most `drivers_count` batches
    /// and sequence each batch from the depot.
    ///
    /// The plan is a pure function of the input sequence: ETA ties keep
    /// input position, and both heuristics break ties by lowest index.
    /// Concurrent runs over the same order set must be serialized by the
    /// caller; this computation holds no state between invocations.
    pub fn plan(
        &self,
        drivers_count: usize,
        orders: Vec<OrderRecord>,
    ) -> Result<DispatchPlan, DispatchError> {
        if drivers_count == 0 {
            return Err(DispatchError::NoActiveDrivers);
        }
        if orders.is_empty() {
            return Err(DispatchError::NoUnbatchedOrders);
        }

        let mut routable = Vec::with_capacity(orders.len());
        let mut excluded = Vec::new();
        for record in orders {
            match record.into_routable() {
                Ok(order) => routable.push(order),
                Err(rejected) => {
                    warn!(
                        order_id = %rejected.id,
                        reason = rejected.reason.as_str(),
                        "order excluded from clustering"
                    );
                    excluded.push(rejected);
                }
            }
        }
        if routable.is_empty() {
            return Err(DispatchError::NoRoutableOrders { excluded });
        }

        // Stable sort: equal ETAs keep input position.
        routable.sort_by_key(|order| order.eta);
        let orders_count = routable.len();

        let groups = batching::assign_batches(self.config.depot, routable, drivers_count);

        let batches: Vec<Batch> = groups
            .into_iter()
            .enumerate()
            .filter(|(_, group)| !group.is_empty())
            .map(|(group_index, group)| Batch {
                group_index,
                orders: sequencing::sequence_route(&self.config.depot, group),
            })
            .collect();

        info!(
            drivers = drivers_count,
            orders = orders_count,
            batches = batches.len(),
            excluded = excluded.len(),
            "dispatch plan computed"
        );

        Ok(DispatchPlan {
            drivers_count,
            orders_count,
            batches,
            excluded,
        })
    }
}
