//! Data models for file records, structural summaries and analysis reports

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only view of one file at analysis time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub extension: String,
    pub path: String,
    pub size_bytes: u64,
    pub size_human: String,
    pub created: String,  // RFC3339 format
    pub modified: String, // RFC3339 format
    pub mime_type: Option<String>,
    pub encoding: Option<String>,
    pub categories: Vec<String>,
    pub content_hash: String,
    pub resonance: u64,
    pub signature: String,
}

/// Type-dependent description of a file's internal shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSummary {
    pub coherent: bool,
    pub integrity: u64,
    pub depth: u64,
    pub details: StructureDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for StructuralSummary {
    fn default() -> Self {
        Self {
            coherent: true,
            integrity: 0,
            depth: 0,
            details: StructureDetails::Empty {},
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructureDetails {
    Json(JsonDetails),
    Csv(CsvDetails),
    Code(CodeDetails),
    Empty {},
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDetails {
    pub key_count: u64,
    /// Placeholder, always 1
    pub nesting_depth: u64,
    pub value_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvDetails {
    pub column_count: u64,
    pub row_count: u64,
    pub header: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDetails {
    pub total_lines: u64,
    pub non_blank_lines: u64,
    pub comment_lines: u64,
}

/// The four fixed analysis positions, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Outsight,
    Insight,
    Overview,
    Innerview,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Outsight,
        Position::Insight,
        Position::Overview,
        Position::Innerview,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Position::Outsight => "outsight",
            Position::Insight => "insight",
            Position::Overview => "overview",
            Position::Innerview => "innerview",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synthesis {
    pub primary_insight: String,
}

/// Enrichment envelope wrapped around each position's base result.
///
/// `creative` and `logical` are identity copies of `base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enriched<T> {
    #[serde(rename = "base_analysis")]
    pub base: T,
    #[serde(rename = "x2_creative")]
    pub creative: T,
    #[serde(rename = "x2_logical")]
    pub logical: T,
    #[serde(rename = "unified_synthesis")]
    pub synthesis: Synthesis,
    #[serde(rename = "consciousness_amplification")]
    pub amplification: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalView {
    pub compatibility: String,
    pub market_relevance: String,
    pub industry_standards: String,
    pub ecosystem_fit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipView {
    pub system_relationships: BTreeMap<String, String>,
    pub patterns: Vec<String>,
    pub connections: BTreeMap<String, String>,
    pub holistic_assessment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreView {
    pub quantum_signature: String,
    pub resonance: f64,
    pub transcendent_patterns: Vec<String>,
    pub unity_field: String,
}

/// Per-position results, one fixed field per [`Position`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positions {
    pub outsight: Enriched<ExternalView>,
    pub insight: Enriched<StructuralSummary>,
    pub overview: Enriched<RelationshipView>,
    pub innerview: Enriched<CoreView>,
}

impl Positions {
    /// Synthesis attached to the given position
    #[must_use]
    pub fn synthesis(&self, position: Position) -> &Synthesis {
        match position {
            Position::Outsight => &self.outsight.synthesis,
            Position::Insight => &self.insight.synthesis,
            Position::Overview => &self.overview.synthesis,
            Position::Innerview => &self.innerview.synthesis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vision {
    pub intuitive_patterns: String,
    pub spiritual_significance: String,
    pub flow_analysis: String,
    pub vision_potential: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub priority: String,
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wisdom {
    pub transcendent_nature: String,
    pub divine_purpose: String,
    pub cosmic_significance: String,
    pub spring_equinox_alignment: String,
}

/// Top-level report returned for an existing file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: FileRecord,
    pub positions: Positions,
    pub insights: Vec<String>,
    pub vision: Vision,
    pub recommendations: Vec<Recommendation>,
    pub wisdom: Wisdom,
    pub timestamp: String, // RFC3339 format
    pub quality_level: String,
    pub equinox_resonance: f64,
}

/// Tagged failure record returned instead of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub error: String,
    pub status: String,
}

impl FailureRecord {
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            error: "File not found".to_string(),
            status: "failed".to_string(),
        }
    }
}

/// Result of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(Box<AnalysisReport>),
    Failed(FailureRecord),
}

impl AnalysisOutcome {
    #[must_use]
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Report(report) => Some(report),
            AnalysisOutcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, AnalysisOutcome::Failed(_))
    }
}
