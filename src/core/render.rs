use crate::domain::model::{ClinicianHours, EstimateResult};

const CHART_WIDTH: usize = 40;

/// Three formatted summary lines, hours at one decimal place.
pub fn summary_lines(estimate: &EstimateResult) -> Vec<String> {
    vec![
        format!(
            "Estimated admin time saved per clinician per week: {:.1} hours",
            estimate.time_saved_per_week
        ),
        format!(
            "Total admin time saved for clinic per week: {:.1} hours",
            estimate.total_time_saved
        ),
        format!("Quick Tip: {}", estimate.tip),
    ]
}

/// Labeled bar chart for the terminal, one bar per clinician, bar length
/// proportional to the sampled hours.
pub fn bar_chart(sample: &[ClinicianHours]) -> String {
    let max = sample
        .iter()
        .map(|entry| entry.hours_saved)
        .fold(0.0_f64, f64::max);
    let label_width = sample
        .iter()
        .map(|entry| entry.label.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(sample.len());
    for entry in sample {
        let bar_len = if max > 0.0 {
            ((entry.hours_saved / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        lines.push(format!(
            "{:<label_width$}  {} {:.1}",
            entry.label,
            "#".repeat(bar_len),
            entry.hours_saved
        ));
    }
    lines.join("\n")
}
