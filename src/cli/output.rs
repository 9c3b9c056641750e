//! Output formatting for CLI

use crate::models::{AnalysisOutcome, AnalysisReport, StructuralSummary, StructureDetails};
use std::fmt::Write;

/// Format an outcome as JSON, indented unless `compact` is set
pub fn format_json(outcome: &AnalysisOutcome, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(outcome)
    } else {
        serde_json::to_string_pretty(outcome)
    }
}

/// Format an outcome as a short human-readable summary
pub fn format_text(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Report(report) => format_report_text(report),
        AnalysisOutcome::Failed(failure) => format!("{} ({})\n", failure.error, failure.status),
    }
}

fn format_report_text(report: &AnalysisReport) -> String {
    let meta = &report.metadata;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", meta.name, meta.size_human);
    let _ = writeln!(out, "{}", "-".repeat(60));
    let _ = writeln!(
        out,
        "{:<12} {}",
        "Type",
        meta.mime_type.as_deref().unwrap_or("unknown")
    );
    if let Some(encoding) = &meta.encoding {
        let _ = writeln!(out, "{:<12} {encoding}", "Encoding");
    }
    if !meta.categories.is_empty() {
        let _ = writeln!(out, "{:<12} {}", "Categories", meta.categories.join(", "));
    }
    let _ = writeln!(out, "{:<12} {}", "Created", meta.created);
    let _ = writeln!(out, "{:<12} {}", "Modified", meta.modified);
    let _ = writeln!(out, "{:<12} {}", "SHA-256", meta.content_hash);
    let _ = writeln!(out, "{:<12} {}", "Signature", meta.signature);
    let _ = writeln!(
        out,
        "{:<12} {}",
        "Structure",
        describe_structure(&report.positions.insight.base)
    );
    let _ = writeln!(out, "{:<12} {:.4}", "Resonance", report.equinox_resonance);
    let _ = writeln!(out, "{:<12} {}", "Level", report.quality_level);

    out
}

fn describe_structure(summary: &StructuralSummary) -> String {
    if let Some(error) = &summary.error {
        return format!("unreadable ({error})");
    }

    match &summary.details {
        StructureDetails::Json(json) => format!("{} top-level keys", json.key_count),
        StructureDetails::Csv(csv) => {
            format!("{} rows x {} columns", csv.row_count, csv.column_count)
        }
        StructureDetails::Code(code) => format!(
            "{} lines ({} non-blank, {} comments)",
            code.total_lines, code.non_blank_lines, code.comment_lines
        ),
        StructureDetails::Empty {} => "not inspected".to_string(),
    }
}
