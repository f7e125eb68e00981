use crate::core::model::Scenario;
use crate::utils::error::{Result, SavingsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scenario constants file. Every table and field is optional; anything
/// absent falls back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScenarioFile {
    pub thermal: Option<ThermalConfig>,
    pub economics: Option<EconomicsConfig>,
    pub horizons: Option<HorizonConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThermalConfig {
    pub u_concrete: Option<f64>,
    pub delta_t: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EconomicsConfig {
    pub price_per_kwh: Option<f64>,
    pub emission_factor_g_per_kwh: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HorizonConfig {
    pub day_hours: Option<f64>,
    pub month_hours: Option<f64>,
    pub year_hours: Option<f64>,
}

impl ScenarioFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SavingsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SavingsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn into_scenario(self) -> Scenario {
        let defaults = Scenario::default();
        let thermal = self.thermal.unwrap_or_default();
        let economics = self.economics.unwrap_or_default();
        let horizons = self.horizons.unwrap_or_default();

        Scenario {
            u_concrete: thermal.u_concrete.unwrap_or(defaults.u_concrete),
            delta_t: thermal.delta_t.unwrap_or(defaults.delta_t),
            price_per_kwh: economics.price_per_kwh.unwrap_or(defaults.price_per_kwh),
            emission_factor_g_per_kwh: economics
                .emission_factor_g_per_kwh
                .unwrap_or(defaults.emission_factor_g_per_kwh),
            hours_per_day: horizons.day_hours.unwrap_or(defaults.hours_per_day),
            hours_per_month: horizons.month_hours.unwrap_or(defaults.hours_per_month),
            hours_per_year: horizons.year_hours.unwrap_or(defaults.hours_per_year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_a_full_scenario_file() {
        let toml_content = r#"
[thermal]
u_concrete = 1.8
delta_t = 12.0

[economics]
price_per_kwh = 0.32
emission_factor_g_per_kwh = 40.0

[horizons]
day_hours = 24.0
month_hours = 730.0
year_hours = 8760.0
"#;

        let scenario = ScenarioFile::from_toml_str(toml_content)
            .unwrap()
            .into_scenario();

        assert_eq!(scenario.u_concrete, 1.8);
        assert_eq!(scenario.delta_t, 12.0);
        assert_eq!(scenario.price_per_kwh, 0.32);
        assert_eq!(scenario.emission_factor_g_per_kwh, 40.0);
        assert_eq!(scenario.hours_per_month, 730.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let toml_content = r#"
[thermal]
delta_t = 15.0
"#;

        let scenario = ScenarioFile::from_toml_str(toml_content)
            .unwrap()
            .into_scenario();

        assert_eq!(scenario.delta_t, 15.0);
        assert_eq!(scenario.u_concrete, 2.0);
        assert_eq!(scenario.price_per_kwh, 0.29);
        assert_eq!(scenario.hours_per_year, 8766.0);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let scenario = ScenarioFile::from_toml_str("").unwrap().into_scenario();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn env_var_substitution() {
        std::env::set_var("TEST_PRICE_PER_KWH", "0.35");

        let toml_content = r#"
[economics]
price_per_kwh = ${TEST_PRICE_PER_KWH}
"#;

        let scenario = ScenarioFile::from_toml_str(toml_content)
            .unwrap()
            .into_scenario();
        assert_eq!(scenario.price_per_kwh, 0.35);

        std::env::remove_var("TEST_PRICE_PER_KWH");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let result = ScenarioFile::from_toml_str("[thermal\nu_concrete = 2");
        assert!(matches!(result, Err(SavingsError::ConfigError { .. })));
    }

    #[test]
    fn loads_from_a_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[thermal]\nu_concrete = 2.2\n")
            .unwrap();

        let scenario = ScenarioFile::from_file(temp_file.path())
            .unwrap()
            .into_scenario();
        assert_eq!(scenario.u_concrete, 2.2);
    }
}
