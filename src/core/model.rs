use crate::domain::model::{Composition, HorizonValues, PlantRecord, SavingsResult};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_float, Validate};
use serde::{Deserialize, Serialize};

/// Run-level constants shared by every composition in a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Baseline transmittance of bare concrete, W/m²·K.
    pub u_concrete: f64,
    /// Indoor/outdoor temperature differential, K.
    pub delta_t: f64,
    /// Electricity price, CHF/kWh.
    pub price_per_kwh: f64,
    /// Grid emission factor, g CO2/kWh.
    pub emission_factor_g_per_kwh: f64,
    pub hours_per_day: f64,
    pub hours_per_month: f64,
    pub hours_per_year: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            u_concrete: 2.0,
            delta_t: 10.0,
            price_per_kwh: 0.29,
            emission_factor_g_per_kwh: 25.0,
            hours_per_day: 24.0,
            hours_per_month: 732.0,
            hours_per_year: 8766.0,
        }
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        validate_positive_float("scenario.u_concrete", self.u_concrete)?;
        validate_positive_float("scenario.delta_t", self.delta_t)?;
        validate_positive_float("scenario.price_per_kwh", self.price_per_kwh)?;
        validate_positive_float(
            "scenario.emission_factor_g_per_kwh",
            self.emission_factor_g_per_kwh,
        )?;
        validate_positive_float("scenario.hours_per_day", self.hours_per_day)?;
        validate_positive_float("scenario.hours_per_month", self.hours_per_month)?;
        validate_positive_float("scenario.hours_per_year", self.hours_per_year)?;
        Ok(())
    }
}

/// Total CO2 absorbed by a composition: dot product of catalogue
/// absorption coefficients and the composition's surface vector.
pub fn co2_absorbed(catalog: &[PlantRecord], composition: &Composition) -> f64 {
    catalog
        .iter()
        .zip(composition.surface_by_plant.iter())
        .map(|(plant, surface)| plant.absorption_coeff * surface)
        .sum()
}

/// Thermal power saved versus bare concrete for one plant surface, in
/// watts. A plant whose transmittance ties or beats concrete yields no
/// claimed benefit: the violation is reported and the flux is zero.
pub fn thermal_flux_saved(surface: f64, delta_t: f64, u_concrete: f64, u_plant: f64) -> f64 {
    if u_concrete <= u_plant {
        tracing::warn!(
            "uConcrete ({}) must be greater than uPlant ({}) for thermal gain",
            u_concrete,
            u_plant
        );
        return 0.0;
    }

    (u_concrete - u_plant) * surface * delta_t
}

/// Sums the per-plant flux over the whole catalogue for one composition.
pub fn total_thermal_flux(
    catalog: &[PlantRecord],
    composition: &Composition,
    scenario: &Scenario,
) -> f64 {
    catalog
        .iter()
        .zip(composition.surface_by_plant.iter())
        .map(|(plant, surface)| {
            thermal_flux_saved(
                *surface,
                scenario.delta_t,
                scenario.u_concrete,
                plant.thermal_transmittance,
            )
        })
        .sum()
}

/// Energy saved over a duration, in kWh. The W → kW conversion is exact.
pub fn energy_saved(flux_watts: f64, duration_hours: f64) -> f64 {
    flux_watts / 1000.0 * duration_hours
}

pub fn cost_saved(energy_kwh: f64, price_per_kwh: f64) -> f64 {
    energy_kwh * price_per_kwh
}

/// CO2 avoided in kg for saved energy, from a g/kWh emission factor.
pub fn co2_saved(energy_kwh: f64, emission_factor_g_per_kwh: f64) -> f64 {
    energy_kwh * (emission_factor_g_per_kwh / 1000.0)
}

/// Derives the full metric set for one composition. The total flux is
/// computed once and every horizon derives from that single value.
pub fn evaluate(
    catalog: &[PlantRecord],
    composition: &Composition,
    scenario: &Scenario,
) -> SavingsResult {
    let flux = total_thermal_flux(catalog, composition, scenario);

    let energy = HorizonValues {
        daily: energy_saved(flux, scenario.hours_per_day),
        monthly: energy_saved(flux, scenario.hours_per_month),
        yearly: energy_saved(flux, scenario.hours_per_year),
    };

    let cost = HorizonValues {
        daily: cost_saved(energy.daily, scenario.price_per_kwh),
        monthly: cost_saved(energy.monthly, scenario.price_per_kwh),
        yearly: cost_saved(energy.yearly, scenario.price_per_kwh),
    };

    let co2_avoided = HorizonValues {
        daily: co2_saved(energy.daily, scenario.emission_factor_g_per_kwh),
        monthly: co2_saved(energy.monthly, scenario.emission_factor_g_per_kwh),
        yearly: co2_saved(energy.yearly, scenario.emission_factor_g_per_kwh),
    };

    SavingsResult {
        co2_absorbed: co2_absorbed(catalog, composition),
        thermal_flux_w: flux,
        energy_kwh: energy,
        cost_chf: cost,
        co2_avoided_kg: co2_avoided,
    }
}
