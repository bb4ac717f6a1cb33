//! # mop-core: Production Fleet Modeling Core
//!
//! Provides the fundamental data structures for merit-order production
//! planning: the generation fleet, fuel/market context, and typed physical
//! units.
//!
//! ## Design Philosophy
//!
//! A planning request is a flat fleet of generation plants plus one set of
//! market inputs. There is no topology: the planner decides *how much* each
//! plant produces, not *where* the power flows. The model is therefore a
//! plain list of [`Plant`] values and a [`Fuels`] context, constructed fresh
//! per request and discarded afterwards.
//!
//! ## Quick Start
//!
//! ```rust
//! use mop_core::{Fuels, Plant, PlantId, PlantKind};
//!
//! let fleet = vec![
//!     Plant::new(PlantId::new(0), "windpark1".to_string(), PlantKind::Wind)
//!         .with_p_limits(0.0, 150.0),
//!     Plant::new(PlantId::new(1), "gasfiredbig1".to_string(), PlantKind::Gas)
//!         .with_p_limits(100.0, 460.0)
//!         .with_efficiency(0.53),
//! ];
//!
//! let fuels = Fuels {
//!     gas_price: mop_core::EurosPerMegawattHour(13.4),
//!     kerosine_price: mop_core::EurosPerMegawattHour(50.8),
//!     co2_price_euro_ton: 20.0,
//!     wind_percent: 60.0,
//! };
//!
//! assert!(fleet[1].kind.is_fueled());
//! assert!(!fuels.wind_percent.is_nan());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Unified error type for the MOP ecosystem
//! - [`units`] - Typed physical quantities (MW, €/MWh)
//!
//! ## Integration
//!
//! The mop-io crate constructs fleets from the external JSON payload format;
//! the mop-algo crate consumes them to compute a production plan.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod units;

pub use error::{MopError, MopResult};
pub use units::{EurosPerMegawattHour, Megawatts};

/// Newtype wrapper for plant IDs for type safety
///
/// IDs are the plant's position in the request, so results can be assembled
/// back into request order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(usize);

impl PlantId {
    #[inline]
    pub fn new(value: usize) -> Self {
        PlantId(value)
    }
    #[inline]
    pub fn value(&self) -> usize {
        self.0
    }
}

/// Generation technology of a plant
///
/// Determines both the marginal cost formula and the availability model:
/// wind production is free but scaled by the forecast wind percentage, while
/// fueled plants pay for fuel (and CO2 for gas) but keep their full capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantKind {
    /// Wind turbine: zero marginal cost, output scaled by wind availability
    Wind,
    /// Gas-fired plant: gas price plus CO2 emission cost, full capacity
    Gas,
    /// Kerosine turbojet: expensive peaker, full capacity
    Turbojet,
}

impl PlantKind {
    /// Whether this technology burns fuel (and therefore needs an efficiency)
    #[inline]
    pub fn is_fueled(&self) -> bool {
        matches!(self, PlantKind::Gas | PlantKind::Turbojet)
    }
}

impl std::fmt::Display for PlantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantKind::Wind => write!(f, "wind"),
            PlantKind::Gas => write!(f, "gas"),
            PlantKind::Turbojet => write!(f, "turbojet"),
        }
    }
}

/// A single generation plant in the fleet
///
/// Invariant: `0 <= pmin <= pmax`. The efficiency is a fraction in (0, 1]
/// for fueled plants and is ignored for wind.
#[derive(Debug, Clone)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub kind: PlantKind,
    /// Minimum sustained output once activated
    pub pmin: Megawatts,
    /// Maximum sustained output
    pub pmax: Megawatts,
    /// Thermal-to-electric conversion fraction (fueled plants only)
    pub efficiency: f64,
}

impl Plant {
    /// Create a new plant with default limits (no constraints)
    pub fn new(id: PlantId, name: String, kind: PlantKind) -> Self {
        Self {
            id,
            name,
            kind,
            pmin: Megawatts(0.0),
            pmax: Megawatts(f64::INFINITY),
            efficiency: 1.0,
        }
    }

    /// Set output limits (in MW)
    pub fn with_p_limits(mut self, pmin: f64, pmax: f64) -> Self {
        self.pmin = Megawatts(pmin);
        self.pmax = Megawatts(pmax);
        self
    }

    /// Set conversion efficiency
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }
}

/// Market and environmental inputs for one planning request
#[derive(Debug, Clone)]
pub struct Fuels {
    /// Gas price per MWh of thermal input
    pub gas_price: EurosPerMegawattHour,
    /// Kerosine price per MWh of thermal input
    pub kerosine_price: EurosPerMegawattHour,
    /// CO2 emission allowance price (€/ton)
    pub co2_price_euro_ton: f64,
    /// Forecast wind availability in percent of installed capacity (0-100)
    pub wind_percent: f64,
}
