#[cfg(feature = "cli")]
pub mod cli;
pub mod scenario;

use crate::core::model::Scenario;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    self, validate_file_extensions, validate_non_empty_list, validate_path,
    validate_positive_number,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(
    feature = "cli",
    command(
        name = "green-savings",
        about = "Estimates CO2 and heating-cost savings of green facade compositions"
    )
)]
pub struct CliConfig {
    /// Plant catalogue CSV (header + name, absorption, growth, isolation, thermal).
    #[cfg_attr(feature = "cli", arg(long, default_value = "plants_data.csv"))]
    pub catalogue: String,

    /// Grid files to aggregate, one composition each, in order.
    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ','))]
    pub compositions: Vec<String>,

    /// Base directory for all input and output paths.
    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub data_path: String,

    /// Output table for the computed savings.
    #[cfg_attr(feature = "cli", arg(long, default_value = "Savings.csv"))]
    pub output: String,

    /// Optional TOML file overriding the scenario constants.
    #[cfg_attr(feature = "cli", arg(long))]
    pub scenario_file: Option<String>,

    /// Upper bound on catalogue entries; extra rows are dropped with a warning.
    #[cfg_attr(feature = "cli", arg(long, default_value = "50"))]
    pub max_plants: usize,

    /// Override the concrete baseline transmittance (W/m²·K).
    #[cfg_attr(feature = "cli", arg(long))]
    pub u_concrete: Option<f64>,

    /// Override the indoor/outdoor temperature differential (K).
    #[cfg_attr(feature = "cli", arg(long))]
    pub delta_t: Option<f64>,

    /// Override the electricity price (CHF/kWh).
    #[cfg_attr(feature = "cli", arg(long))]
    pub price_per_kwh: Option<f64>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable system monitoring"))]
    pub monitor: bool,

    /// Resolved scenario constants; populated after parsing.
    #[cfg_attr(feature = "cli", arg(skip))]
    #[serde(default)]
    pub resolved_scenario: Scenario,
}

impl CliConfig {
    /// Resolves the effective scenario: defaults, then the TOML file,
    /// then individual CLI overrides.
    pub fn resolve_scenario(&mut self) -> Result<()> {
        let mut scenario = match &self.scenario_file {
            Some(path) => scenario::ScenarioFile::from_file(path)?.into_scenario(),
            None => Scenario::default(),
        };

        if let Some(u_concrete) = self.u_concrete {
            scenario.u_concrete = u_concrete;
        }
        if let Some(delta_t) = self.delta_t {
            scenario.delta_t = delta_t;
        }
        if let Some(price) = self.price_per_kwh {
            scenario.price_per_kwh = price;
        }

        validation::Validate::validate(&scenario)?;
        self.resolved_scenario = scenario;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn catalogue_path(&self) -> &str {
        &self.catalogue
    }

    fn composition_files(&self) -> &[String] {
        &self.compositions
    }

    fn report_path(&self) -> &str {
        &self.output
    }

    fn max_catalog_size(&self) -> usize {
        self.max_plants
    }

    fn scenario(&self) -> &Scenario {
        &self.resolved_scenario
    }
}

impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalogue", &self.catalogue)?;
        validate_path("data_path", &self.data_path)?;
        validate_path("output", &self.output)?;
        validate_non_empty_list("compositions", &self.compositions)?;
        validate_file_extensions("compositions", &self.compositions, &["csv", "tsv"])?;
        validate_positive_number("max_plants", self.max_plants, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    fn base_config() -> CliConfig {
        CliConfig {
            catalogue: "plants_data.csv".to_string(),
            compositions: vec!["matrice_1.csv".to_string()],
            data_path: ".".to_string(),
            output: "Savings.csv".to_string(),
            scenario_file: None,
            max_plants: 50,
            u_concrete: None,
            delta_t: None,
            price_per_kwh: None,
            verbose: false,
            monitor: false,
            resolved_scenario: Scenario::default(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn empty_composition_list_is_rejected() {
        let mut config = base_config();
        config.compositions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_csv_composition_is_rejected() {
        let mut config = base_config();
        config.compositions = vec!["matrice_1.xlsx".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_max_plants_is_rejected() {
        let mut config = base_config();
        config.max_plants = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn cli_overrides_take_precedence_over_defaults() {
        let mut config = base_config();
        config.u_concrete = Some(2.5);
        config.price_per_kwh = Some(0.31);
        config.resolve_scenario().unwrap();

        assert_eq!(config.resolved_scenario.u_concrete, 2.5);
        assert_eq!(config.resolved_scenario.price_per_kwh, 0.31);
        // Untouched constants keep their defaults.
        assert_eq!(config.resolved_scenario.delta_t, 10.0);
    }

    #[test]
    fn invalid_override_fails_resolution() {
        let mut config = base_config();
        config.delta_t = Some(-4.0);
        assert!(config.resolve_scenario().is_err());
    }
}
