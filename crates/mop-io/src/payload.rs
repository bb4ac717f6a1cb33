//! Production-plan payload format
//!
//! The request schema uses unit-annotated fuel keys (`gas(euro/MWh)`,
//! `wind(%)`, ...) and lowercase plant type tags (`gasfired`, `turbojet`,
//! `windturbine`). The response is an array of `{name, p}` objects in
//! request order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mop_core::{
    EurosPerMegawattHour, Fuels, Megawatts, MopError, MopResult, Plant, PlantId, PlantKind,
};

/// Top-level production-plan request
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    /// Target total output (MW)
    pub load: f64,
    /// Fuel and market context
    pub fuels: FuelPrices,
    /// The fleet, in caller order
    pub powerplants: Vec<PlantSpec>,
}

/// Fuel prices and wind forecast, with the wire format's annotated keys
#[derive(Debug, Clone, Deserialize)]
pub struct FuelPrices {
    #[serde(rename = "gas(euro/MWh)")]
    pub gas_euro_mwh: f64,
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine_euro_mwh: f64,
    #[serde(rename = "co2(euro/ton)")]
    pub co2_euro_ton: f64,
    #[serde(rename = "wind(%)")]
    pub wind_percent: f64,
}

/// One plant entry of the request
#[derive(Debug, Clone, Deserialize)]
pub struct PlantSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlantTypeTag,
    pub efficiency: f64,
    pub pmin: f64,
    pub pmax: f64,
}

/// Wire tag for the plant technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantTypeTag {
    Gasfired,
    Turbojet,
    Windturbine,
}

impl From<PlantTypeTag> for PlantKind {
    fn from(tag: PlantTypeTag) -> Self {
        match tag {
            PlantTypeTag::Gasfired => PlantKind::Gas,
            PlantTypeTag::Turbojet => PlantKind::Turbojet,
            PlantTypeTag::Windturbine => PlantKind::Wind,
        }
    }
}

/// One entry of the response: power produced by a plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantProduction {
    pub name: String,
    pub p: f64,
}

/// Read and deserialize a plan request from a JSON file
pub fn load_plan_request(path: &Path) -> MopResult<PlanRequest> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|e| MopError::Parse(format!("{}: {e}", path.display())))
}

impl PlanRequest {
    /// Validate the payload and convert it into the core fleet model.
    ///
    /// Enforces the boundary contract the solver relies on: a non-empty
    /// fleet with unique names, finite numbers, `0 <= pmin <= pmax`,
    /// efficiency in (0, 1] for fueled plants, wind percent in [0, 100],
    /// non-negative load.
    pub fn into_model(self) -> MopResult<(Vec<Plant>, Fuels, Megawatts)> {
        if self.powerplants.is_empty() {
            return Err(MopError::Validation(
                "payload contains no power plants".to_string(),
            ));
        }
        if !self.load.is_finite() || self.load < 0.0 {
            return Err(MopError::Validation(format!(
                "load must be finite and non-negative, got {}",
                self.load
            )));
        }
        for (key, value) in [
            ("gas(euro/MWh)", self.fuels.gas_euro_mwh),
            ("kerosine(euro/MWh)", self.fuels.kerosine_euro_mwh),
            ("co2(euro/ton)", self.fuels.co2_euro_ton),
        ] {
            if !value.is_finite() {
                return Err(MopError::Validation(format!(
                    "fuel price '{key}' must be finite, got {value}"
                )));
            }
        }
        if !self.fuels.wind_percent.is_finite()
            || !(0.0..=100.0).contains(&self.fuels.wind_percent)
        {
            return Err(MopError::Validation(format!(
                "wind(%) must be within [0, 100], got {}",
                self.fuels.wind_percent
            )));
        }

        let mut seen = HashSet::new();
        let mut fleet = Vec::with_capacity(self.powerplants.len());
        for (index, spec) in self.powerplants.into_iter().enumerate() {
            if !seen.insert(spec.name.clone()) {
                return Err(MopError::Validation(format!(
                    "duplicate plant name '{}'",
                    spec.name
                )));
            }
            if !spec.pmin.is_finite() || !spec.pmax.is_finite() || spec.pmin < 0.0 {
                return Err(MopError::Validation(format!(
                    "plant '{}': pmin/pmax must be finite and non-negative",
                    spec.name
                )));
            }
            if spec.pmax < spec.pmin {
                return Err(MopError::Validation(format!(
                    "plant '{}': pmax {} below pmin {}",
                    spec.name, spec.pmax, spec.pmin
                )));
            }
            let kind = PlantKind::from(spec.kind);
            if kind.is_fueled()
                && (!spec.efficiency.is_finite()
                    || spec.efficiency <= 0.0
                    || spec.efficiency > 1.0)
            {
                return Err(MopError::Validation(format!(
                    "plant '{}': efficiency must be within (0, 1], got {}",
                    spec.name, spec.efficiency
                )));
            }

            fleet.push(
                Plant::new(PlantId::new(index), spec.name, kind)
                    .with_p_limits(spec.pmin, spec.pmax)
                    .with_efficiency(spec.efficiency),
            );
        }

        let fuels = Fuels {
            gas_price: EurosPerMegawattHour(self.fuels.gas_euro_mwh),
            kerosine_price: EurosPerMegawattHour(self.fuels.kerosine_euro_mwh),
            co2_price_euro_ton: self.fuels.co2_euro_ton,
            wind_percent: self.fuels.wind_percent,
        };

        Ok((fleet, fuels, Megawatts(self.load)))
    }
}
