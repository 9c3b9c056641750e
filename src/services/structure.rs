//! Structural summaries dispatched on file extension
//!
//! Parse failures never escape this module: they mark the summary as
//! incoherent and carry the error message instead.

use crate::models::{
    CodeDetails, CsvDetails, FileRecord, JsonDetails, StructuralSummary, StructureDetails,
};
use csv::{ReaderBuilder, StringRecord};
use serde_json::Value;
use std::collections::BTreeSet;

/// Extensions summarized as line-oriented source text
pub const CODE_EXTENSIONS: &[&str] = &[".py", ".js", ".sol"];

/// Build the structural summary for a file from its already-read content
#[must_use]
pub fn summarize(record: &FileRecord, content: &[u8]) -> StructuralSummary {
    let extension = record.extension.as_str();

    let parsed = match extension {
        ".json" => summarize_json(content),
        ".csv" => summarize_csv(content),
        ext if CODE_EXTENSIONS.contains(&ext) => summarize_code(content),
        _ => {
            log::trace!("No structural parser for '{extension}' ({})", record.name);
            return StructuralSummary::default();
        }
    };

    match parsed {
        Ok(summary) => summary,
        Err(message) => {
            log::warn!("Failed to parse {} as '{extension}': {message}", record.path);
            StructuralSummary {
                coherent: false,
                error: Some(message),
                ..StructuralSummary::default()
            }
        }
    }
}

/// Top-level key count of a JSON document.
///
/// `integrity`, `depth` and `nesting_depth` are fixed at 1 and do not reflect
/// the actual nesting of the document.
fn summarize_json(content: &[u8]) -> Result<StructuralSummary, String> {
    let value: Value = serde_json::from_slice(content).map_err(|e| e.to_string())?;

    let (key_count, value_types) = match &value {
        Value::Object(map) => {
            let types: BTreeSet<&str> = map.values().map(json_type_name).collect();
            (
                map.len() as u64,
                types.into_iter().map(str::to_string).collect(),
            )
        }
        _ => (0, Vec::new()),
    };

    Ok(StructuralSummary {
        coherent: true,
        integrity: 1,
        depth: 1,
        details: StructureDetails::Json(JsonDetails {
            key_count,
            nesting_depth: 1,
            value_types,
        }),
        error: None,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Column count of the first row and total row count of comma-delimited data.
///
/// Blank lines count as rows with no fields; a blank first line yields an
/// empty header.
fn summarize_csv(content: &[u8]) -> Result<StructuralSummary, String> {
    let text = std::str::from_utf8(content).map_err(|e| e.to_string())?;

    let mut header: Option<Vec<String>> = None;
    let mut row_count: u64 = 0;

    for line in csv_lines(text) {
        let row = if line.is_empty() {
            Vec::new()
        } else {
            parse_csv_row(line)?
        };
        if header.is_none() {
            header = Some(row);
        }
        row_count += 1;
    }

    let header = header.unwrap_or_default();
    let column_count = header.len() as u64;

    Ok(StructuralSummary {
        coherent: true,
        integrity: column_count,
        depth: row_count,
        details: StructureDetails::Csv(CsvDetails {
            column_count,
            row_count,
            header,
        }),
        error: None,
    })
}

/// Split text into CSV records, one per line unless a quoted field spans
/// newlines. Trailing `\r` is dropped; blank lines are kept as empty records.
fn csv_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut quotes = 0usize;

    for (idx, byte) in text.bytes().enumerate() {
        match byte {
            b'"' => quotes += 1,
            b'\n' if quotes % 2 == 0 => {
                lines.push(text[start..idx].trim_end_matches('\r'));
                start = idx + 1;
                quotes = 0;
            }
            _ => {}
        }
    }

    if start < text.len() {
        lines.push(text[start..].trim_end_matches('\r'));
    }

    lines
}

fn parse_csv_row(line: &str) -> Result<Vec<String>, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    reader.read_record(&mut record).map_err(|e| e.to_string())?;

    Ok(record.iter().map(str::to_string).collect())
}

/// Line, non-blank line and `#` comment line counts of UTF-8 text
fn summarize_code(content: &[u8]) -> Result<StructuralSummary, String> {
    let text = std::str::from_utf8(content).map_err(|e| e.to_string())?;

    let mut total_lines: u64 = 0;
    let mut non_blank_lines: u64 = 0;
    let mut comment_lines: u64 = 0;

    for line in text.lines() {
        total_lines += 1;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            non_blank_lines += 1;
        }
        if trimmed.starts_with('#') {
            comment_lines += 1;
        }
    }

    Ok(StructuralSummary {
        coherent: true,
        integrity: total_lines,
        depth: total_lines,
        details: StructureDetails::Code(CodeDetails {
            total_lines,
            non_blank_lines,
            comment_lines,
        }),
        error: None,
    })
}
