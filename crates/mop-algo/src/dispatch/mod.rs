//! Merit-order production dispatch
//!
//! Assigns output power to each plant in a fleet so the target load is met
//! at minimum total cost, respecting pmin/pmax envelopes and wind-dependent
//! availability. Single time slice, no network constraints, no startup
//! costs.

mod cost;
mod merit_order;
mod repair;
mod types;

pub use types::{DispatchError, DispatchSolution, PlantAssignment};

use std::time::Instant;

use mop_core::{Fuels, Megawatts, Plant};

/// Granularity of the produced plan: assignments are rounded to 0.1 MW and
/// the plan total must match the load within the same step.
pub const ROUND_STEP_MW: f64 = 0.1;

/// Merit-order dispatch solver
///
/// Stateless between calls; each [`solve`](DispatchSolver::solve) computes a
/// fresh plan from its inputs.
pub struct DispatchSolver {
    tolerance_mw: f64,
}

impl DispatchSolver {
    /// Create a new solver with the default load-match tolerance (0.1 MW)
    pub fn new() -> Self {
        Self {
            tolerance_mw: ROUND_STEP_MW,
        }
    }

    /// Set the load-match tolerance in MW
    pub fn with_tolerance(mut self, tolerance_mw: f64) -> Self {
        self.tolerance_mw = tolerance_mw;
        self
    }

    /// Compute a production plan for the fleet.
    ///
    /// Stages: cost ranking, merit-order greedy allocation, feasibility
    /// repair of pmin-forced overproduction, then rounding and assembly in
    /// request order. Returns a typed error instead of a partial plan when
    /// the request is invalid or the load cannot be met exactly.
    pub fn solve(
        &self,
        plants: &[Plant],
        fuels: &Fuels,
        load: Megawatts,
    ) -> Result<DispatchSolution, DispatchError> {
        let start = Instant::now();

        validate(plants, fuels, load)?;

        let ranked = cost::rank(plants, fuels);
        let order = merit_order::order(&ranked);
        let (mut assigned, remaining) = merit_order::allocate(&ranked, &order, load.value());

        if remaining > self.tolerance_mw {
            let available_mw = ranked.iter().map(|p| p.effective_pmax.max(0.0)).sum();
            return Err(DispatchError::Undersupply {
                need_mw: load.value(),
                available_mw,
            });
        }

        let excess = (-remaining).max(0.0);
        if excess > 0.0 {
            let leftover = repair::reduce(&ranked, &order, &mut assigned, excess);
            if leftover > self.tolerance_mw {
                return Err(DispatchError::PminLocked {
                    excess_mw: leftover,
                });
            }
        }

        let assignments: Vec<PlantAssignment> = plants
            .iter()
            .zip(assigned.iter())
            .map(|(plant, &p)| PlantAssignment {
                name: plant.name.clone(),
                p_mw: round_step(p),
            })
            .collect();
        let total_mw = assignments.iter().map(|a| a.p_mw).sum();
        let objective_value = assignments
            .iter()
            .zip(ranked.iter())
            .map(|(a, r)| a.p_mw * r.cost)
            .sum();

        Ok(DispatchSolution {
            assignments,
            total_mw,
            objective_value,
            solve_time_ms: start.elapsed().as_millis(),
        })
    }
}

impl Default for DispatchSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to the nearest 0.1 MW.
///
/// Halves round away from zero (`f64::round` semantics), so 0.05 MW becomes
/// 0.1 MW. Idempotent on already-rounded values.
fn round_step(p_mw: f64) -> f64 {
    (p_mw * 10.0).round() / 10.0
}

/// Reject fleets and loads that violate the model invariants.
///
/// Range checks on caller-supplied numbers (efficiency in (0,1], wind in
/// [0,100], name uniqueness) belong to the payload boundary; this guards the
/// invariants the algorithm itself relies on.
fn validate(plants: &[Plant], fuels: &Fuels, load: Megawatts) -> Result<(), DispatchError> {
    if plants.is_empty() {
        return Err(DispatchError::DataValidation(
            "no plants in request".to_string(),
        ));
    }
    if !load.is_finite() || load.value() < 0.0 {
        return Err(DispatchError::DataValidation(format!(
            "load must be finite and non-negative, got {load}"
        )));
    }
    if !fuels.wind_percent.is_finite() || !(0.0..=100.0).contains(&fuels.wind_percent) {
        return Err(DispatchError::DataValidation(format!(
            "wind percent must be within [0, 100], got {}",
            fuels.wind_percent
        )));
    }

    for plant in plants {
        let pmin = plant.pmin.value();
        let pmax = plant.pmax.value();
        if !pmin.is_finite() || !pmax.is_finite() || pmin < 0.0 || pmax < pmin {
            return Err(DispatchError::DataValidation(format!(
                "plant '{}' has invalid limits: pmin {}, pmax {}",
                plant.name, plant.pmin, plant.pmax
            )));
        }
        if plant.kind.is_fueled() && (!plant.efficiency.is_finite() || plant.efficiency <= 0.0) {
            return Err(DispatchError::DataValidation(format!(
                "{} plant '{}' has non-positive efficiency {}",
                plant.kind, plant.name, plant.efficiency
            )));
        }
    }

    Ok(())
}
