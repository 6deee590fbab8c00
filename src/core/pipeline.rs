use crate::core::render;
use crate::core::report::{self, REPORT_FILENAME};
use crate::core::resolver::Resolver;
use crate::core::sample::per_clinician_sample;
use crate::core::{ClinicParameters, ClinicReport, ConfigProvider, Pipeline, Resolution, Storage};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The concrete resolve -> render -> export pipeline. Storage, config, and
/// the resolver (with its optional remote client) are injected, so tests can
/// run the whole flow against a mock server and an in-memory store.
pub struct ClinicPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    resolver: Resolver,
}

impl<S: Storage, C: ConfigProvider> ClinicPipeline<S, C> {
    pub fn new(storage: S, config: C, resolver: Resolver) -> Self {
        Self {
            storage,
            config,
            resolver,
        }
    }

    fn parameters(&self) -> ClinicParameters {
        ClinicParameters::new(
            self.config.clinician_count(),
            self.config.patients_per_week(),
            self.config.admin_hours_per_week(),
        )
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ClinicPipeline<S, C> {
    async fn resolve(&self) -> Resolution {
        let params = self.parameters();
        tracing::debug!("Resolving estimate for {:?}", params);
        let mut rng = StdRng::from_entropy();
        self.resolver.resolve(&params, &mut rng).await
    }

    async fn render(&self, resolution: &Resolution) -> Result<ClinicReport> {
        let params = self.parameters();
        let mut rng = StdRng::from_entropy();
        let sample = per_clinician_sample(&params, &resolution.estimate, &mut rng);
        tracing::debug!("Generated sample for {} clinicians", sample.len());

        Ok(ClinicReport {
            parameters: params,
            estimate: resolution.estimate.clone(),
            summary: render::summary_lines(&resolution.estimate),
            chart: render::bar_chart(&sample),
            sample,
            notice: resolution.notice.clone(),
        })
    }

    async fn export(&self, report: &ClinicReport) -> Result<String> {
        let pdf = report::render_pdf(&report.parameters, &report.estimate, &report.sample)?;
        tracing::debug!("Writing PDF report ({} bytes) to storage", pdf.len());
        self.storage.write_file(REPORT_FILENAME, &pdf).await?;

        Ok(format!(
            "{}/{}",
            self.config.output_path().trim_end_matches('/'),
            REPORT_FILENAME
        ))
    }
}
