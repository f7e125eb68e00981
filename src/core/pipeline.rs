use crate::core::{catalog, composition, model, report};
use crate::domain::model::{ReportResult, SurveyData};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, SavingsError};

pub struct SavingsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SavingsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_source(&self, path: &str) -> Result<Vec<u8>> {
        self.storage.read_file(path).await.map_err(|e| match e {
            SavingsError::IoError(source) => SavingsError::SourceOpenError {
                path: path.to_string(),
                source,
            },
            other => other,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SavingsPipeline<S, C> {
    async fn extract(&self) -> Result<SurveyData> {
        let catalogue_path = self.config.catalogue_path();
        tracing::debug!("Reading plant catalogue from {}", catalogue_path);

        let raw = self.read_source(catalogue_path).await?;
        let catalog = catalog::parse_catalog(&raw, self.config.max_catalog_size())?;

        tracing::info!("Loaded catalogue with {} plants", catalog.len());
        for plant in &catalog {
            tracing::debug!(
                "Plant: {}, Absorption: {:.2}, U: {:.2}",
                plant.name,
                plant.absorption_coeff,
                plant.thermal_transmittance
            );
        }

        // One composition per file, appended in the caller-specified
        // order. A file that cannot be opened aborts the whole run.
        let mut compositions = Vec::new();
        for path in self.config.composition_files() {
            let raw = self.read_source(path).await?;
            let comp = composition::aggregate(path, &raw, catalog.len())?;
            compositions.push(comp);
        }

        tracing::info!("Aggregated {} compositions", compositions.len());

        Ok(SurveyData {
            catalog,
            compositions,
        })
    }

    async fn transform(&self, data: SurveyData) -> Result<ReportResult> {
        let scenario = self.config.scenario();
        let mut results = Vec::with_capacity(data.compositions.len());

        for (index, comp) in data.compositions.iter().enumerate() {
            let result = model::evaluate(&data.catalog, comp, scenario);
            tracing::info!(
                "Composition {} ({}): CO2 absorbed = {:.2} kg, flux = {:.2} W, \
                 yearly savings = {:.2} CHF",
                index + 1,
                comp.label,
                result.co2_absorbed,
                result.thermal_flux_w,
                result.cost_chf.yearly
            );
            results.push(result);
        }

        let csv_output = report::render_report(&results)?;

        Ok(ReportResult {
            results,
            csv_output,
        })
    }

    async fn load(&self, result: ReportResult) -> Result<String> {
        let report_path = self.config.report_path();
        self.storage
            .write_file(report_path, result.csv_output.as_bytes())
            .await?;

        tracing::info!("Results saved to '{}'", report_path);
        Ok(report_path.to_string())
    }
}
