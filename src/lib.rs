pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{
    engine::ReportEngine, pipeline::ClinicPipeline, remote::RemoteInsights, resolver::Resolver,
};
pub use domain::model::{
    ClinicParameters, ClinicReport, ClinicianHours, EstimateResult, EstimateSource, Resolution,
};
pub use utils::error::{Result, TimesaverError};
