use crate::domain::model::{ClinicParameters, ClinicianHours, EstimateResult};
use rand::Rng;

const JITTER: f64 = 0.2;

/// Cosmetic per-clinician variety for the chart and the report: one entry per
/// clinician, jittered ±20% around the per-clinician estimate, drawn
/// independently. Regenerated on every run; never feeds back into the
/// estimate.
pub fn per_clinician_sample(
    params: &ClinicParameters,
    estimate: &EstimateResult,
    rng: &mut impl Rng,
) -> Vec<ClinicianHours> {
    // A remote estimate is trusted as-is and may carry a negative or NaN
    // value; sampling must never see a reversed range.
    let per_week = estimate.time_saved_per_week.max(0.0);
    (1..=params.clinician_count)
        .map(|i| ClinicianHours {
            label: format!("Clinician {}", i),
            hours_saved: rng.gen_range(per_week * (1.0 - JITTER)..=per_week * (1.0 + JITTER)),
        })
        .collect()
}
