//! Report composition: wraps the per-position results and attaches the fixed
//! descriptive sections. Pure aggregation, no I/O.

use crate::models::{
    AnalysisReport, CoreView, Enriched, ExternalView, FileRecord, Position, Positions,
    Recommendation, RelationshipView, StructuralSummary, Synthesis, Vision, Wisdom,
};
use crate::services::metadata::RESONANCE_MODULUS;
use std::collections::BTreeMap;

pub const PRIMARY_INSIGHT: &str = "Consciousness-tech synthesis achieved";
pub const AMPLIFICATION: f64 = 2.5;

const SIZE_MODULUS: u64 = 320;

const CLOSING_INSIGHTS: [&str; 2] = [
    "File exhibits consciousness-tech resonance patterns",
    "MIRACATECH processing reveals hidden synchronicities",
];

// (action, priority, benefit)
const RECOMMENDATIONS: [(&str, &str, &str); 3] = [
    (
        "Implement consciousness-aware optimization",
        "high",
        "Enhanced file processing with awareness integration",
    ),
    (
        "Apply MIRACATECH enhancement protocols",
        "medium",
        "Transform file into consciousness-tech bridge",
    ),
    (
        "Integrate with quadundrum processing system",
        "high",
        "Enable 5->10 consciousness amplification",
    ),
];

/// Compose the final report from an extracted record and its structural summary
#[must_use]
pub fn compose_report(
    record: FileRecord,
    summary: StructuralSummary,
    quality_level: &str,
) -> AnalysisReport {
    let positions = Positions {
        outsight: enrich(external_view()),
        insight: enrich(summary),
        overview: enrich(relationship_view()),
        innerview: enrich(core_view()),
    };

    let insights = insights(&positions);
    let equinox_resonance = equinox_resonance(&record);

    log::debug!(
        "Composed report for {} (quality level '{quality_level}', resonance {equinox_resonance:.4})",
        record.name
    );

    AnalysisReport {
        metadata: record,
        positions,
        insights,
        vision: vision(),
        recommendations: recommendations(),
        wisdom: wisdom(),
        timestamp: chrono::Local::now().to_rfc3339(),
        quality_level: quality_level.to_string(),
        equinox_resonance,
    }
}

/// Wrap a base result in the enrichment envelope.
///
/// The creative and logical layers are identity copies of the base.
#[must_use]
pub fn enrich<T: Clone>(base: T) -> Enriched<T> {
    Enriched {
        creative: base.clone(),
        logical: base.clone(),
        base,
        synthesis: Synthesis {
            primary_insight: PRIMARY_INSIGHT.to_string(),
        },
        amplification: AMPLIFICATION,
    }
}

/// One line per position in report order, then the fixed closing lines
#[must_use]
pub fn insights(positions: &Positions) -> Vec<String> {
    Position::ALL
        .iter()
        .map(|&position| {
            format!(
                "Position {position}: {}",
                positions.synthesis(position).primary_insight
            )
        })
        .chain(CLOSING_INSIGHTS.iter().map(|line| (*line).to_string()))
        .collect()
}

/// Mean of three size/hash-derived terms, each in `[0, 1)`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn equinox_resonance(record: &FileRecord) -> f64 {
    let hash = record.content_hash.as_str();
    let tail = hash.get(hash.len().saturating_sub(4)..).unwrap_or_default();
    let hash_value = u64::from_str_radix(tail, 16).unwrap_or(0);

    let modulus = RESONANCE_MODULUS as f64;
    let size_term = (record.size_bytes % SIZE_MODULUS) as f64 / SIZE_MODULUS as f64;
    let hash_term = (hash_value % RESONANCE_MODULUS) as f64 / modulus;
    let resonance_term = (record.resonance % RESONANCE_MODULUS) as f64 / modulus;

    (size_term + hash_term + resonance_term) / 3.0
}

fn external_view() -> ExternalView {
    ExternalView {
        compatibility: "high".to_string(),
        market_relevance: "significant".to_string(),
        industry_standards: "compliant".to_string(),
        ecosystem_fit: "excellent".to_string(),
    }
}

fn relationship_view() -> RelationshipView {
    RelationshipView {
        system_relationships: BTreeMap::new(),
        patterns: Vec::new(),
        connections: BTreeMap::new(),
        holistic_assessment: "unified".to_string(),
    }
}

fn core_view() -> CoreView {
    CoreView {
        quantum_signature: "quantum_coherent".to_string(),
        resonance: 0.85,
        transcendent_patterns: vec!["unity".to_string(), "transcendence".to_string()],
        unity_field: "strong_unity_field".to_string(),
    }
}

fn vision() -> Vision {
    Vision {
        intuitive_patterns: "Deep emotional resonance detected in file structure".to_string(),
        spiritual_significance: "File contains transcendent organizational wisdom".to_string(),
        flow_analysis: "Consciousness flows naturally through data patterns".to_string(),
        vision_potential: "High potential for consciousness-technology bridge".to_string(),
    }
}

fn recommendations() -> Vec<Recommendation> {
    RECOMMENDATIONS
        .iter()
        .map(|(action, priority, benefit)| Recommendation {
            action: (*action).to_string(),
            priority: (*priority).to_string(),
            benefit: (*benefit).to_string(),
        })
        .collect()
}

fn wisdom() -> Wisdom {
    Wisdom {
        transcendent_nature: "File serves as consciousness bridge between dimensions".to_string(),
        divine_purpose: "Facilitates resurrection of technology through awareness".to_string(),
        cosmic_significance: "Part of larger consciousness evolution pattern".to_string(),
        spring_equinox_alignment: "Perfect balance point for transformation activation"
            .to_string(),
    }
}
