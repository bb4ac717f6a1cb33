//! # mop-cli: Production Planner Command Line
//!
//! Thin wrapper around the mop-io payload boundary and the mop-algo
//! dispatch solver. Exposed as a library so integration tests can reuse the
//! argument definitions.

pub mod cli;
