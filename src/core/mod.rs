pub mod catalog;
pub mod composition;
pub mod engine;
pub mod model;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{
    Composition, HorizonValues, PlantRecord, ReportResult, SavingsResult, SurveyData,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
