//! Cost ranking stage
//!
//! Derives, for every plant in the request, the scalar €/MWh marginal cost
//! and the effective maximum output available this period. Pure functions of
//! the plant and the fuel context.

use mop_core::{Fuels, Plant, PlantKind};

/// Tons of CO2 emitted per MWh of gas-fired electrical output.
///
/// Fixed emission factor, not configurable per plant.
pub(crate) const CO2_TONS_PER_MWH: f64 = 0.3;

/// A plant annotated with its ranking inputs, indexed by request position
#[derive(Debug, Clone)]
pub(crate) struct RankedPlant {
    /// Position in the request
    pub index: usize,
    /// Marginal production cost (€/MWh)
    pub cost: f64,
    /// Maximum output available this period (MW)
    pub effective_pmax: f64,
    /// Minimum sustained output once activated (MW)
    pub pmin: f64,
}

/// Marginal cost of one MWh of output (€/MWh)
///
/// Wind is free; gas pays fuel plus CO2 allowances; turbojets pay kerosine.
/// All fuel prices are per MWh of thermal input, so fueled plants divide by
/// their conversion efficiency. Assumes `plant.efficiency > 0` for fueled
/// plants (validated before ranking).
pub(crate) fn marginal_cost(plant: &Plant, fuels: &Fuels) -> f64 {
    match plant.kind {
        PlantKind::Wind => 0.0,
        PlantKind::Gas => {
            (fuels.gas_price.value() + CO2_TONS_PER_MWH * fuels.co2_price_euro_ton)
                / plant.efficiency
        }
        PlantKind::Turbojet => fuels.kerosine_price.value() / plant.efficiency,
    }
}

/// Maximum output actually available this period (MW)
///
/// Wind capacity is scaled by the forecast wind percentage; fueled plants
/// keep their full pmax. Not rounded at this stage.
pub(crate) fn effective_pmax(plant: &Plant, fuels: &Fuels) -> f64 {
    match plant.kind {
        PlantKind::Wind => plant.pmax.value() * (fuels.wind_percent / 100.0),
        PlantKind::Gas | PlantKind::Turbojet => plant.pmax.value(),
    }
}

/// Annotate every plant with its cost and effective capacity, request order
pub(crate) fn rank(plants: &[Plant], fuels: &Fuels) -> Vec<RankedPlant> {
    plants
        .iter()
        .enumerate()
        .map(|(index, plant)| RankedPlant {
            index,
            cost: marginal_cost(plant, fuels),
            effective_pmax: effective_pmax(plant, fuels),
            pmin: plant.pmin.value(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mop_core::{EurosPerMegawattHour, PlantId};

    fn fuels(gas: f64, kerosine: f64, co2: f64, wind: f64) -> Fuels {
        Fuels {
            gas_price: EurosPerMegawattHour(gas),
            kerosine_price: EurosPerMegawattHour(kerosine),
            co2_price_euro_ton: co2,
            wind_percent: wind,
        }
    }

    fn plant(kind: PlantKind, pmax: f64, efficiency: f64) -> Plant {
        Plant::new(PlantId::new(0), "p".to_string(), kind)
            .with_p_limits(0.0, pmax)
            .with_efficiency(efficiency)
    }

    #[test]
    fn test_wind_is_free_and_curtailed() {
        let f = fuels(13.4, 50.8, 20.0, 60.0);
        let wind = plant(PlantKind::Wind, 150.0, 1.0);

        assert_eq!(marginal_cost(&wind, &f), 0.0);
        assert!((effective_pmax(&wind, &f) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_gas_cost_includes_co2() {
        let f = fuels(13.0, 50.8, 20.0, 60.0);
        let gas = plant(PlantKind::Gas, 200.0, 0.5);

        // (13 + 0.3 * 20) / 0.5 = 38 €/MWh
        assert!((marginal_cost(&gas, &f) - 38.0).abs() < 1e-9);
        assert_eq!(effective_pmax(&gas, &f), 200.0);
    }

    #[test]
    fn test_turbojet_cost() {
        let f = fuels(13.4, 50.8, 20.0, 60.0);
        let tj = plant(PlantKind::Turbojet, 16.0, 0.3);

        assert!((marginal_cost(&tj, &f) - 50.8 / 0.3).abs() < 1e-9);
        assert_eq!(effective_pmax(&tj, &f), 16.0);
    }

    #[test]
    fn test_zero_wind_means_zero_capacity() {
        let f = fuels(13.4, 50.8, 20.0, 0.0);
        let wind = plant(PlantKind::Wind, 150.0, 1.0);

        assert_eq!(effective_pmax(&wind, &f), 0.0);
    }
}
