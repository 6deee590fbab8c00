use crate::domain::model::{ClinicParameters, ClinicianHours, EstimateResult};
use crate::utils::error::{Result, TimesaverError};
use printpdf::{BuiltinFont, Mm, PdfDocument};

pub const REPORT_FILENAME: &str = "ai_clinic_timesaver_report.pdf";
pub const REPORT_MIME: &str = "application/pdf";

const REPORT_TITLE: &str = "AI Clinic Time-Saver Report";

/// The builtin Helvetica fonts cover Latin-1 only. Text outside that range is
/// rejected with a typed error instead of being silently mangled in the
/// output.
fn ensure_latin1(text: &str) -> Result<()> {
    if text.chars().all(|c| (c as u32) <= 0xFF) {
        Ok(())
    } else {
        Err(TimesaverError::UnencodableText {
            text: text.to_string(),
        })
    }
}

fn fact_lines(params: &ClinicParameters, estimate: &EstimateResult) -> Vec<String> {
    vec![
        format!("Number of clinicians: {}", params.clinician_count),
        format!("Average patients per week: {}", params.patients_per_week),
        format!(
            "Admin hours per clinician per week: {}",
            params.admin_hours_per_week
        ),
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

/// Serializes the run into single-page PDF bytes: title, six fact lines, and
/// one line per clinician with its sampled hours. No wrapping and no
/// multi-page handling; long tips run off the page edge.
pub fn render_pdf(
    params: &ClinicParameters,
    estimate: &EstimateResult,
    sample: &[ClinicianHours],
) -> Result<Vec<u8>> {
    let facts = fact_lines(params, estimate);
    for line in &facts {
        ensure_latin1(line)?;
    }
    for entry in sample {
        ensure_latin1(&entry.label)?;
    }

    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page).get_layer(layer);
    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| TimesaverError::PdfError {
            message: e.to_string(),
        })?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| TimesaverError::PdfError {
            message: e.to_string(),
        })?;

    layer.use_text(REPORT_TITLE, 16.0, Mm(62.0), Mm(275.0), &title_font);

    let mut y = 260.0;
    for line in &facts {
        layer.use_text(line.clone(), 12.0, Mm(15.0), Mm(y), &body_font);
        y -= 8.0;
    }

    y -= 4.0;
    layer.use_text("Visualized Savings:", 12.0, Mm(15.0), Mm(y), &body_font);
    y -= 8.0;
    for entry in sample {
        layer.use_text(
            format!("{}: {:.1} hours saved", entry.label, entry.hours_saved),
            11.0,
            Mm(15.0),
            Mm(y),
            &body_font,
        );
        y -= 6.0;
    }

    doc.save_to_bytes().map_err(|e| TimesaverError::PdfError {
        message: e.to_string(),
    })
}
