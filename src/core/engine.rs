use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs the three pipeline phases strictly in sequence. Any phase error
/// aborts the remaining steps and propagates to the caller.
pub struct SavingsEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SavingsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting savings estimation");

        tracing::info!("Extracting catalogue and compositions...");
        let survey = self.pipeline.extract().await?;
        self.monitor.log_stats("Extract");

        tracing::info!("Computing savings for {} compositions...", survey.compositions.len());
        let report = self.pipeline.transform(survey).await?;
        self.monitor.log_stats("Transform");

        tracing::info!("Writing results table...");
        let output_path = self.pipeline.load(report).await?;
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
