use crate::domain::model::{ClinicReport, Resolution};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn clinician_count(&self) -> u32;
    fn patients_per_week(&self) -> u32;
    fn admin_hours_per_week(&self) -> u32;
    fn output_path(&self) -> &str;
}

/// The three stages of a run. `resolve` is total: a remote failure downgrades
/// to the fallback estimate instead of surfacing an error.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn resolve(&self) -> Resolution;
    async fn render(&self, resolution: &Resolution) -> Result<ClinicReport>;
    async fn export(&self, report: &ClinicReport) -> Result<String>;
}
