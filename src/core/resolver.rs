use crate::core::remote::RemoteInsights;
use crate::domain::model::{ClinicParameters, EstimateResult, EstimateSource, Resolution};
use rand::Rng;

pub const FALLBACK_TIP: &str = "Consider delegating repetitive admin tasks to save time.";

const FALLBACK_SAVINGS_RATE: (f64, f64) = (0.25, 0.45);

/// Decides between the remote estimate and the local fallback formula. The
/// remote client is an optional constructor dependency; when absent the
/// resolver is fully offline.
pub struct Resolver {
    remote: Option<RemoteInsights>,
}

impl Resolver {
    pub fn new(remote: Option<RemoteInsights>) -> Self {
        Self { remote }
    }

    /// Total: always yields an estimate. A single remote failure immediately
    /// downgrades to the fallback formula, carrying the error text as a
    /// non-fatal notice for inline display. No remote client means a silent
    /// fallback with no notice.
    pub async fn resolve(
        &self,
        params: &ClinicParameters,
        rng: &mut (impl Rng + Send),
    ) -> Resolution {
        if let Some(remote) = &self.remote {
            match remote.fetch_estimate(params).await {
                Ok(estimate) => {
                    tracing::debug!("Using remote estimate: {:?}", estimate);
                    return Resolution {
                        estimate,
                        source: EstimateSource::Remote,
                        notice: None,
                    };
                }
                Err(e) => {
                    tracing::warn!("Remote insights unavailable, using fallback values: {}", e);
                    return Resolution {
                        estimate: fallback_estimate(params, rng),
                        source: EstimateSource::Fallback,
                        notice: Some(format!(
                            "Remote insights unavailable, using fallback values. ({})",
                            e
                        )),
                    };
                }
            }
        }

        Resolution {
            estimate: fallback_estimate(params, rng),
            source: EstimateSource::Fallback,
            notice: None,
        }
    }
}

/// Local fallback formula: a uniform draw of 25-45% of the weekly admin hours
/// per clinician, scaled by headcount for the clinic total.
pub fn fallback_estimate(params: &ClinicParameters, rng: &mut impl Rng) -> EstimateResult {
    let (low, high) = FALLBACK_SAVINGS_RATE;
    let time_saved_per_week = params.admin_hours_per_week as f64 * rng.gen_range(low..=high);
    EstimateResult {
        time_saved_per_week,
        total_time_saved: time_saved_per_week * params.clinician_count as f64,
        tip: FALLBACK_TIP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::remote::DEFAULT_MODEL;
    use httpmock::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params() -> ClinicParameters {
        ClinicParameters::new(5, 200, 10)
    }

    #[test]
    fn test_fallback_bounds_and_invariant() {
        let params = params();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate = fallback_estimate(&params, &mut rng);

            assert!(estimate.time_saved_per_week >= 0.25 * 10.0);
            assert!(estimate.time_saved_per_week <= 0.45 * 10.0);
            assert_eq!(
                estimate.total_time_saved,
                estimate.time_saved_per_week * 5.0
            );
            assert_eq!(estimate.tip, FALLBACK_TIP);
        }
    }

    #[test]
    fn test_fallback_scenario_bounds() {
        // clinicians=5, patients=200, admin_hours=10
        let mut rng = StdRng::seed_from_u64(7);
        let estimate = fallback_estimate(&params(), &mut rng);

        assert!(estimate.time_saved_per_week >= 2.5 && estimate.time_saved_per_week <= 4.5);
        assert!(estimate.total_time_saved >= 12.5 && estimate.total_time_saved <= 22.5);
        assert_eq!(
            estimate.tip,
            "Consider delegating repetitive admin tasks to save time."
        );
    }

    #[tokio::test]
    async fn test_resolve_without_client_is_silent_fallback() {
        let resolver = Resolver::new(None);
        let mut rng = StdRng::seed_from_u64(1);

        let resolution = resolver.resolve(&params(), &mut rng).await;

        assert_eq!(resolution.source, EstimateSource::Fallback);
        assert!(resolution.notice.is_none());
        assert_eq!(resolution.estimate.tip, FALLBACK_TIP);
    }

    #[tokio::test]
    async fn test_resolve_malformed_completion_falls_back_with_notice() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "choices": [{"message": {"role": "assistant", "content": "not json"}}]
                }));
        });

        let resolver = Resolver::new(Some(RemoteInsights::new(
            server.base_url(),
            "test-key",
            DEFAULT_MODEL,
        )));
        let mut rng = StdRng::seed_from_u64(2);

        let resolution = resolver.resolve(&params(), &mut rng).await;

        api_mock.assert();
        assert_eq!(resolution.source, EstimateSource::Fallback);
        assert!(resolution.notice.is_some());
        assert!(resolution.estimate.time_saved_per_week >= 2.5);
        assert!(resolution.estimate.time_saved_per_week <= 4.5);
        assert_eq!(
            resolution.estimate.total_time_saved,
            resolution.estimate.time_saved_per_week * 5.0
        );
        assert_eq!(resolution.estimate.tip, FALLBACK_TIP);
    }

    #[tokio::test]
    async fn test_resolve_remote_estimate_taken_verbatim() {
        let server = MockServer::start();
        // total_time_saved deliberately disagrees with per-week * clinicians;
        // the remote result is trusted as-is.
        let content = serde_json::json!({
            "time_saved_per_week": 3.2,
            "total_time_saved": 16.0,
            "tip": "Automate intake forms."
        })
        .to_string();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "choices": [{"message": {"role": "assistant", "content": content}}]
                }));
        });

        let resolver = Resolver::new(Some(RemoteInsights::new(
            server.base_url(),
            "test-key",
            DEFAULT_MODEL,
        )));
        let mut rng = StdRng::seed_from_u64(3);

        let resolution = resolver.resolve(&params(), &mut rng).await;

        api_mock.assert();
        assert_eq!(resolution.source, EstimateSource::Remote);
        assert!(resolution.notice.is_none());
        assert_eq!(resolution.estimate.time_saved_per_week, 3.2);
        assert_eq!(resolution.estimate.total_time_saved, 16.0);
        assert_eq!(resolution.estimate.tip, "Automate intake forms.");
    }

    #[tokio::test]
    async fn test_resolve_server_error_falls_back_with_notice() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(503);
        });

        let resolver = Resolver::new(Some(RemoteInsights::new(
            server.base_url(),
            "test-key",
            DEFAULT_MODEL,
        )));
        let mut rng = StdRng::seed_from_u64(4);

        let resolution = resolver.resolve(&params(), &mut rng).await;

        // one attempt only, no retry
        api_mock.assert_hits(1);
        assert_eq!(resolution.source, EstimateSource::Fallback);
        assert!(resolution.notice.is_some());
    }
}
