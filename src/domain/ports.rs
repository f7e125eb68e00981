use crate::core::model::Scenario;
use crate::domain::model::{ReportResult, SurveyData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalogue_path(&self) -> &str;
    /// Composition files in the order they become compositions 1..N.
    fn composition_files(&self) -> &[String];
    fn report_path(&self) -> &str;
    fn max_catalog_size(&self) -> usize;
    fn scenario(&self) -> &Scenario;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SurveyData>;
    async fn transform(&self, data: SurveyData) -> Result<ReportResult>;
    async fn load(&self, result: ReportResult) -> Result<String>;
}
