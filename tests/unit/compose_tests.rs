//! Unit tests for report composition

#[cfg(test)]
mod tests {
    use filescope::models::{FileRecord, StructuralSummary};
    use filescope::services::compose::{
        AMPLIFICATION, PRIMARY_INSIGHT, compose_report, enrich, equinox_resonance,
    };
    use filescope::services::metadata::{composite_signature, content_hash, resonance};

    fn record_from(content: &[u8]) -> FileRecord {
        FileRecord {
            name: "sample.bin".to_string(),
            extension: ".bin".to_string(),
            path: "sample.bin".to_string(),
            size_bytes: content.len() as u64,
            size_human: String::new(),
            created: String::new(),
            modified: String::new(),
            mime_type: None,
            encoding: None,
            categories: Vec::new(),
            content_hash: content_hash(content),
            resonance: resonance(content.len() as u64),
            signature: composite_signature(content),
        }
    }

    #[test]
    fn test_equinox_resonance_for_empty_content() {
        // sha256("") ends in b855; 0xb855 % 432 == 101
        let value = equinox_resonance(&record_from(b""));
        let expected = (101.0 / 432.0) / 3.0;
        assert!((value - expected).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn test_equinox_resonance_range_and_determinism() {
        for len in [0usize, 1, 319, 320, 431, 432, 1000, 65_537] {
            let content = vec![b'z'; len];
            let record = record_from(&content);
            let first = equinox_resonance(&record);
            let second = equinox_resonance(&record);
            assert!((0.0..1.0).contains(&first), "len {len}: {first}");
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn test_enrich_is_identity_with_constants() {
        let summary = StructuralSummary::default();
        let enriched = enrich(summary.clone());

        assert_eq!(enriched.base, summary);
        assert_eq!(enriched.creative, summary);
        assert_eq!(enriched.logical, summary);
        assert_eq!(enriched.synthesis.primary_insight, PRIMARY_INSIGHT);
        assert!((enriched.amplification - AMPLIFICATION).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compose_report_sections() {
        let summary = StructuralSummary {
            integrity: 7,
            ..StructuralSummary::default()
        };
        let report = compose_report(record_from(b"payload"), summary.clone(), "transcendent");

        assert_eq!(report.quality_level, "transcendent");
        assert_eq!(report.metadata.size_bytes, 7);
        assert_eq!(report.positions.insight.base, summary);
        assert_eq!(report.positions.outsight.base.market_relevance, "significant");
        assert_eq!(report.positions.overview.base.holistic_assessment, "unified");
        assert!(report.positions.overview.base.patterns.is_empty());
        assert_eq!(
            report.positions.innerview.base.transcendent_patterns,
            vec!["unity", "transcendence"]
        );

        assert_eq!(report.insights.len(), 6);
        assert_eq!(
            report.insights[0],
            format!("Position outsight: {PRIMARY_INSIGHT}")
        );
        assert_eq!(
            report.insights[3],
            format!("Position innerview: {PRIMARY_INSIGHT}")
        );

        assert_eq!(report.recommendations.len(), 3);
        let priorities: Vec<&str> = report
            .recommendations
            .iter()
            .map(|r| r.priority.as_str())
            .collect();
        assert_eq!(priorities, vec!["high", "medium", "high"]);
        assert!(!report.timestamp.is_empty());
    }
}
