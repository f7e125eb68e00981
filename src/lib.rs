pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::LocalStorage;
pub use config::CliConfig;

pub use core::engine::SavingsEngine;
pub use core::model::Scenario;
pub use core::pipeline::SavingsPipeline;
pub use utils::error::{Result, SavingsError};
