//! # mop-io: Payload Import/Export
//!
//! Translates between the external JSON payload format and the core fleet
//! model. The payload format is the wire schema of the surrounding
//! production-plan service: a load, a fuel/market context with
//! unit-annotated keys, and a list of power plants.
//!
//! All range validation of caller-supplied numbers happens here, at the
//! boundary; the solver downstream assumes validated input.

pub mod payload;

pub use payload::{
    load_plan_request, FuelPrices, PlanRequest, PlantProduction, PlantSpec, PlantTypeTag,
};
