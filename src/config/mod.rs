pub mod cli;
pub mod file;

use crate::core::actions::Action;
use crate::core::remote::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use file::FileConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "clinic-timesaver")]
#[command(about = "Estimate how much time AI could save your clinic in administrative tasks")]
pub struct CliConfig {
    /// Number of clinicians
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub clinicians: u32,

    /// Average patients per week
    #[arg(long, default_value = "200", value_parser = clap::value_parser!(u32).range(10..=1000))]
    pub patients: u32,

    /// Admin hours per clinician per week
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=50))]
    pub admin_hours: u32,

    /// Base URL of the chat-completion API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Chat-completion model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    /// Optional TOML file with api/output defaults
    #[arg(long)]
    pub config: Option<String>,

    /// Simulated call-to-action to run after the report
    #[arg(long, value_enum)]
    pub action: Option<Action>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Folds file-config values underneath the CLI: a file value only applies
    /// where the CLI was left at its built-in default.
    pub fn merged_with(mut self, file: FileConfig) -> Self {
        if self.api_base == DEFAULT_API_BASE {
            if let Some(api_base) = file.api_base {
                self.api_base = api_base;
            }
        }
        if self.model == DEFAULT_MODEL {
            if let Some(model) = file.model {
                self.model = model;
            }
        }
        if self.output_path == DEFAULT_OUTPUT_PATH {
            if let Some(output_path) = file.output_path {
                self.output_path = output_path;
            }
        }
        self
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("model", &self.model)?;
        validate_path("output_path", &self.output_path)?;
        validate_range("clinicians", self.clinicians, 1, 100)?;
        validate_range("patients", self.patients, 10, 1000)?;
        validate_range("admin_hours", self.admin_hours, 1, 50)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn clinician_count(&self) -> u32 {
        self.clinicians
    }

    fn patients_per_week(&self) -> u32 {
        self.patients
    }

    fn admin_hours_per_week(&self) -> u32 {
        self.admin_hours
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}
