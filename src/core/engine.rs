use crate::core::{ClinicReport, Pipeline};
use crate::utils::error::Result;

/// Drives the three pipeline stages for one run and returns the rendered
/// report together with the export path.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<(ClinicReport, String)> {
        tracing::info!("Resolving estimate...");
        let resolution = self.pipeline.resolve().await;
        if let Some(notice) = &resolution.notice {
            tracing::warn!("{}", notice);
        }

        tracing::info!("Rendering insights...");
        let report = self.pipeline.render(&resolution).await?;

        tracing::info!("Exporting PDF report...");
        let output_path = self.pipeline.export(&report).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok((report, output_path))
    }
}
