//! Feasibility repair
//!
//! Removes the overproduction left by forced-pmin activation. Active plants
//! are wound down most-expensive-first, so cheap production is kept at full
//! output. A plant pinned at its pmin cannot give anything up; a plant with
//! pmin = 0 may be switched off entirely.

use super::cost::RankedPlant;

/// Reduce active plants until `excess` reaches zero.
///
/// `order` is the merit order from the allocation stage; the walk here is
/// its reverse (cost descending). Plants running below their pmin
/// (best-effort curtailed units) are skipped. Returns the excess that could
/// not be removed.
pub(crate) fn reduce(
    ranked: &[RankedPlant],
    order: &[usize],
    assigned: &mut [f64],
    mut excess: f64,
) -> f64 {
    for &idx in order.iter().rev() {
        if excess <= 0.0 {
            break;
        }
        let plant = &ranked[idx];
        let power = assigned[idx];
        if power <= 0.0 {
            // never activated, nothing to give up
            continue;
        }
        if power < plant.pmin {
            // best-effort unit already below pmin, exempt from repair
            continue;
        }

        let reducible = if plant.pmin == 0.0 {
            power
        } else {
            power - plant.pmin
        };
        let reduction = reducible.min(excess);
        assigned[idx] -= reduction;
        excess -= reduction;
    }

    excess
}
