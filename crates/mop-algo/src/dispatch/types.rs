use serde::Serialize;
use thiserror::Error;

/// Dispatch solver errors
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// Input data validation error
    #[error("dispatch data validation: {0}")]
    DataValidation(String),

    /// Fleet cannot meet the load even at full effective capacity
    #[error("dispatch infeasible: need {need_mw:.1} MW, only {available_mw:.1} MW available")]
    Undersupply { need_mw: f64, available_mw: f64 },

    /// Minimum-output constraints pin production above the load
    #[error(
        "dispatch infeasible: minimum-output constraints leave {excess_mw:.1} MW of \
         unavoidable overproduction"
    )]
    PminLocked { excess_mw: f64 },
}

/// Power assigned to one plant, in request order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantAssignment {
    /// Plant name from the request
    pub name: String,
    /// Assigned output, rounded to 0.1 MW
    pub p_mw: f64,
}

/// Dispatch solution output
#[derive(Debug, Clone, Serialize)]
pub struct DispatchSolution {
    /// Per-plant assignments, in the same order as the request
    pub assignments: Vec<PlantAssignment>,
    /// Total assigned output (MW, after rounding)
    pub total_mw: f64,
    /// Total production cost at the assigned outputs (€/h)
    pub objective_value: f64,
    /// Solve time in milliseconds
    pub solve_time_ms: u128,
}

impl DispatchSolution {
    /// Look up the assignment for a plant by name
    pub fn assigned(&self, name: &str) -> Option<f64> {
        self.assignments
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.p_mw)
    }
}
