pub mod actions;
pub mod engine;
pub mod pipeline;
pub mod remote;
pub mod render;
pub mod report;
pub mod resolver;
pub mod sample;

pub use crate::domain::model::{
    ClinicParameters, ClinicReport, ClinicianHours, EstimateResult, EstimateSource, Resolution,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
