/// One plant species from the catalogue. Identity downstream is the
/// position in the catalogue ordering, not the name.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantRecord {
    pub name: String,
    /// kg CO2 absorbed per m² per catalogue period.
    pub absorption_coeff: f64,
    /// U-value in W/m²·K. Lower insulates better.
    pub thermal_transmittance: f64,
}

/// Aggregated surface vector for one input grid file. Entry `i` is the
/// number of grid cells assigned to catalogue plant `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub label: String,
    pub surface_by_plant: Vec<f64>,
}

impl Composition {
    pub fn total_cells(&self) -> f64 {
        self.surface_by_plant.iter().sum()
    }
}

/// A quantity evaluated at the three savings horizons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonValues {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// Derived metrics for one composition. Recomputed every run, never
/// persisted outside the output table.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsResult {
    pub co2_absorbed: f64,
    pub thermal_flux_w: f64,
    pub energy_kwh: HorizonValues,
    pub cost_chf: HorizonValues,
    pub co2_avoided_kg: HorizonValues,
}

/// Output of the extract phase: the catalogue plus one composition per
/// input file, in file-processing order.
#[derive(Debug, Clone)]
pub struct SurveyData {
    pub catalog: Vec<PlantRecord>,
    pub compositions: Vec<Composition>,
}

/// Output of the transform phase: per-composition results in input
/// order, together with the rendered report table.
#[derive(Debug, Clone)]
pub struct ReportResult {
    pub results: Vec<SavingsResult>,
    pub csv_output: String,
}
