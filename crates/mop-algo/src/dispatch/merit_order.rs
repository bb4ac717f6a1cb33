//! Merit-order greedy allocation
//!
//! Walks the fleet cheapest-first, assigning each plant as much of the
//! remaining load as it can carry. A plant whose pmin exceeds the remaining
//! need is still forced to pmin, leaving an overproduction residual for the
//! repair stage.

use std::cmp::Ordering;

use super::cost::RankedPlant;

/// Merit order: request indices sorted by cost ascending.
///
/// The sort is stable, so plants with equal cost keep their request order.
/// That is the documented tie-break and the only source of determinism
/// needed.
pub(crate) fn order(ranked: &[RankedPlant]) -> Vec<usize> {
    let mut order: Vec<usize> = ranked.iter().map(|p| p.index).collect();
    order.sort_by(|&a, &b| {
        ranked[a]
            .cost
            .partial_cmp(&ranked[b].cost)
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Greedy walk over the merit order.
///
/// Returns the tentative per-plant assignment (indexed by request position)
/// and the remaining load after the walk. A negative remainder is the
/// overproduction caused by forced-pmin activation; a positive remainder
/// means the fleet cannot meet the load.
pub(crate) fn allocate(ranked: &[RankedPlant], order: &[usize], load_mw: f64) -> (Vec<f64>, f64) {
    let mut assigned = vec![0.0; ranked.len()];
    let mut remaining = load_mw;

    for &idx in order {
        if remaining <= 0.0 {
            // load already covered, the rest of the fleet stays off
            continue;
        }
        let plant = &ranked[idx];
        if plant.effective_pmax <= 0.0 {
            continue;
        }

        // Forced to at least pmin once activated, capped at what the plant
        // can physically deliver this period. When effective_pmax < pmin the
        // plant emits its effective_pmax as a best effort.
        let tentative = plant.effective_pmax.min(remaining.max(plant.pmin));
        assigned[idx] = tentative;
        remaining -= tentative;
    }

    (assigned, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(specs: &[(f64, f64, f64)]) -> Vec<RankedPlant> {
        specs
            .iter()
            .enumerate()
            .map(|(index, &(cost, effective_pmax, pmin))| RankedPlant {
                index,
                cost,
                effective_pmax,
                pmin,
            })
            .collect()
    }

    #[test]
    fn test_order_is_cost_ascending() {
        let plants = ranked(&[(38.0, 200.0, 0.0), (0.0, 90.0, 0.0), (169.3, 16.0, 0.0)]);
        assert_eq!(order(&plants), vec![1, 0, 2]);
    }

    #[test]
    fn test_equal_cost_keeps_request_order() {
        let plants = ranked(&[(38.0, 100.0, 0.0), (0.0, 50.0, 0.0), (38.0, 100.0, 0.0)]);
        assert_eq!(order(&plants), vec![1, 0, 2]);
    }

    #[test]
    fn test_allocate_fills_cheapest_first() {
        let plants = ranked(&[(38.0, 200.0, 0.0), (0.0, 90.0, 0.0)]);
        let ord = order(&plants);
        let (assigned, remaining) = allocate(&plants, &ord, 150.0);

        assert_eq!(assigned, vec![60.0, 90.0]);
        assert_eq!(remaining, 0.0);
    }

    #[test]
    fn test_allocate_forces_pmin() {
        // remaining need (30) below the gas plant's pmin (100)
        let plants = ranked(&[(0.0, 70.0, 0.0), (38.0, 200.0, 100.0)]);
        let ord = order(&plants);
        let (assigned, remaining) = allocate(&plants, &ord, 100.0);

        assert_eq!(assigned, vec![70.0, 100.0]);
        assert_eq!(remaining, -70.0);
    }

    #[test]
    fn test_allocate_best_effort_below_pmin() {
        // effective capacity below pmin: emit the capacity, not pmin
        let plants = ranked(&[(0.0, 15.0, 20.0), (38.0, 200.0, 0.0)]);
        let ord = order(&plants);
        let (assigned, remaining) = allocate(&plants, &ord, 100.0);

        assert_eq!(assigned, vec![15.0, 85.0]);
        assert_eq!(remaining, 0.0);
    }

    #[test]
    fn test_allocate_reports_unserved_load() {
        let plants = ranked(&[(38.0, 50.0, 0.0), (0.0, 30.0, 0.0)]);
        let ord = order(&plants);
        let (_, remaining) = allocate(&plants, &ord, 100.0);

        assert!((remaining - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocate_zero_load_activates_nothing() {
        let plants = ranked(&[(0.0, 90.0, 0.0), (38.0, 200.0, 100.0)]);
        let ord = order(&plants);
        let (assigned, remaining) = allocate(&plants, &ord, 0.0);

        assert_eq!(assigned, vec![0.0, 0.0]);
        assert_eq!(remaining, 0.0);
    }
}
