//! # mop-algo: Merit-Order Dispatch Algorithms
//!
//! This crate computes a production plan for a fleet of generation plants:
//! which plants run, and at what output, to meet a target load at minimum
//! total cost.
//!
//! ## Solution method
//!
//! The [`DispatchSolver`] runs three ordered stages:
//!
//! | Stage | Role |
//! |-------|------|
//! | Cost ranking | €/MWh and effective capacity per plant |
//! | Merit-order walk | greedy allocation, cheapest first |
//! | Feasibility repair | undo pmin-forced overproduction |
//!
//! The result preserves request order and is rounded to 0.1 MW.
//!
//! ## Example
//!
//! ```ignore
//! use mop_algo::DispatchSolver;
//!
//! let solution = DispatchSolver::new().solve(&fleet, &fuels, load)?;
//! println!("Cost: {:.2} €/h", solution.objective_value);
//! for a in &solution.assignments {
//!     println!("{}: {:.1} MW", a.name, a.p_mw);
//! }
//! ```

pub mod dispatch;

pub use dispatch::{DispatchError, DispatchSolution, DispatchSolver, PlantAssignment};
