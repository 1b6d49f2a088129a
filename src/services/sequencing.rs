//! Nearest-neighbor route sequencing within a batch.

use crate::services::geo;
use crate::types::{Coordinates, RankedOrder, RoutableOrder};

/// Order a batch into a visiting sequence starting from the depot and
/// assign each order its 1-based delivery rank.
///
/// Greedy nearest neighbor: repeatedly visit the closest unvisited order.
/// Ties on distance go to the lowest input position, so the sequence is a
/// pure function of the input slice. Known weakness: tail legs can be
/// long, since the heuristic never backtracks.
pub fn sequence_route(depot: &Coordinates, group: Vec<RoutableOrder>) -> Vec<RankedOrder> {
    let n = group.len();
    let mut visited = vec![false; n];
    let mut visit_order = Vec::with_capacity(n);
    let mut current = *depot;

    for _ in 0..n {
        let mut best_next = None;
        let mut best_distance = f64::INFINITY;

        for (idx, order) in group.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let distance = geo::haversine_distance(&current, &order.coordinates);
            if distance < best_distance {
                best_distance = distance;
                best_next = Some(idx);
            }
        }

        if let Some(next) = best_next {
            visited[next] = true;
            current = group[next].coordinates;
            visit_order.push(next);
        }
    }

    visit_order
        .into_iter()
        .enumerate()
        .map(|(position, idx)| {
            let order = &group[idx];
            RankedOrder {
                order_id: order.id,
                coordinates: order.coordinates,
                eta: order.eta,
                rank: (position + 1) as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn hassan() -> Coordinates {
        Coordinates { lat: 13.0072, lng: 76.0962 }
    }

    fn eta_at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 6, minute, 0).unwrap()
    }

    fn order(lat: f64, lng: f64, minute: u32) -> RoutableOrder {
        RoutableOrder {
            id: Uuid::new_v4(),
            coordinates: Coordinates { lat, lng },
            eta: eta_at(minute),
        }
    }

    #[test]
    fn test_empty_group_is_noop() {
        let route = sequence_route(&hassan(), vec![]);
        assert!(route.is_empty());
    }

    #[test]
    fn test_single_order_gets_rank_one() {
        let only = order(13.05, 76.12, 0);
        let id = only.id;

        let route = sequence_route(&hassan(), vec![only]);

        assert_eq!(route.len(), 1);
        assert_eq!(route[0].order_id, id);
        assert_eq!(route[0].rank, 1);
    }

    #[test]
    fn test_nearest_order_visited_first() {
        let far = order(13.20, 76.30, 0);
        let near = order(13.01, 76.10, 1);
        let far_id = far.id;
        let near_id = near.id;

        let route = sequence_route(&hassan(), vec![far, near]);

        assert_eq!(route[0].order_id, near_id);
        assert_eq!(route[0].rank, 1);
        assert_eq!(route[1].order_id, far_id);
        assert_eq!(route[1].rank, 2);
    }

    #[test]
    fn test_equidistant_tie_goes_to_first_input_position() {
        // Identical coordinates make the distances exactly equal.
        let first = order(13.05, 76.12, 0);
        let second = order(13.05, 76.12, 1);
        let first_id = first.id;
        let second_id = second.id;

        let route = sequence_route(&hassan(), vec![first, second]);

        assert_eq!(route[0].order_id, first_id);
        assert_eq!(route[1].order_id, second_id);
    }

    #[test]
    fn test_ranks_are_contiguous_and_complete() {
        let orders = vec![
            order(13.05, 76.12, 0),
            order(12.95, 76.02, 1),
            order(13.11, 76.20, 2),
            order(12.99, 76.15, 3),
        ];
        let mut input_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();

        let route = sequence_route(&hassan(), orders);

        let ranks: Vec<u32> = route.iter().map(|o| o.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);

        let mut routed_ids: Vec<Uuid> = route.iter().map(|o| o.order_id).collect();
        input_ids.sort();
        routed_ids.sort();
        assert_eq!(routed_ids, input_ids);
    }

    #[test]
    fn test_walks_chain_hop_by_hop() {
        // Stops laid out eastward: the greedy walk should follow the
        // chain instead of the depot-distance order.
        let a = order(13.0072, 76.12, 0);
        let b = order(13.0072, 76.15, 1);
        let c = order(13.0072, 76.19, 2);
        let expected = vec![a.id, b.id, c.id];

        // Feed them in scrambled order.
        let route = sequence_route(&hassan(), vec![c.clone(), a.clone(), b.clone()]);

        let ids: Vec<Uuid> = route.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, expected);
    }
}
