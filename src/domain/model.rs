use serde::{Deserialize, Serialize};

/// Bounded clinic inputs. Values outside the documented ranges are clamped at
/// construction, matching the bounds the input widgets enforce. Parameters are
/// immutable for the duration of a run; nothing persists between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicParameters {
    pub clinician_count: u32,
    pub patients_per_week: u32,
    pub admin_hours_per_week: u32,
}

impl ClinicParameters {
    pub const CLINICIAN_BOUNDS: (u32, u32) = (1, 100);
    pub const PATIENT_BOUNDS: (u32, u32) = (10, 1000);
    pub const ADMIN_HOUR_BOUNDS: (u32, u32) = (1, 50);

    pub fn new(clinician_count: u32, patients_per_week: u32, admin_hours_per_week: u32) -> Self {
        Self {
            clinician_count: clinician_count
                .clamp(Self::CLINICIAN_BOUNDS.0, Self::CLINICIAN_BOUNDS.1),
            patients_per_week: patients_per_week
                .clamp(Self::PATIENT_BOUNDS.0, Self::PATIENT_BOUNDS.1),
            admin_hours_per_week: admin_hours_per_week
                .clamp(Self::ADMIN_HOUR_BOUNDS.0, Self::ADMIN_HOUR_BOUNDS.1),
        }
    }
}

impl Default for ClinicParameters {
    fn default() -> Self {
        Self {
            clinician_count: 5,
            patients_per_week: 200,
            admin_hours_per_week: 10,
        }
    }
}

/// The resolved estimate, either decoded from the remote service or computed
/// by the local fallback formula. The fallback path guarantees
/// `total_time_saved == time_saved_per_week * clinician_count`; a remote
/// result is trusted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub time_saved_per_week: f64,
    pub total_time_saved: f64,
    pub tip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateSource {
    Remote,
    Fallback,
}

/// Outcome of estimate resolution. `notice` carries the non-fatal error text
/// shown inline when the remote path failed and the fallback took over.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub estimate: EstimateResult,
    pub source: EstimateSource,
    pub notice: Option<String>,
}

/// One bar of the per-clinician chart. Cosmetic jitter around the estimate,
/// regenerated on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicianHours {
    pub label: String,
    pub hours_saved: f64,
}

/// Everything the render stage produced. The exporter consumes the same
/// sample that was shown on screen; it is never regenerated.
#[derive(Debug, Clone)]
pub struct ClinicReport {
    pub parameters: ClinicParameters,
    pub estimate: EstimateResult,
    pub sample: Vec<ClinicianHours>,
    pub summary: Vec<String>,
    pub chart: String,
    pub notice: Option<String>,
}
