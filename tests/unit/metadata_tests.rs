//! Unit tests for metadata extraction and content digests

#[cfg(test)]
mod tests {
    use crate::fixtures::write_file_sync;
    use filescope::Error;
    use filescope::services::metadata::{
        composite_signature, content_hash, extract_metadata, resonance,
    };
    use tempfile::TempDir;

    const EMPTY_MD5_PREFIX: &str = "d41d8cd9";

    fn assert_signature_shape(signature: &str) {
        let parts: Vec<&str> = signature.split('-').collect();
        assert_eq!(parts.len(), 4, "signature: {signature}");
        for part in parts {
            assert_eq!(part.len(), 8);
            assert!(part.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_content_hash_is_sha256_hex() {
        assert_eq!(
            content_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            content_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_resonance_wraps_at_432() {
        assert_eq!(resonance(0), 0);
        assert_eq!(resonance(431), 431);
        assert_eq!(resonance(432), 0);
        assert_eq!(resonance(433), 1);
    }

    #[test]
    fn test_signature_hashes_each_quarter() {
        assert_eq!(
            composite_signature(b"abcd"),
            "0cc175b9-92eb5ffe-4a8a08f0-8277e091"
        );
    }

    #[test]
    fn test_signature_excludes_remainder_bytes() {
        assert_eq!(composite_signature(b"abcde"), composite_signature(b"abcd"));
        assert_eq!(composite_signature(b"abcdefg"), composite_signature(b"abcd"));
    }

    #[test]
    fn test_signature_of_short_input_uses_empty_digests() {
        let expected = [EMPTY_MD5_PREFIX; 4].join("-");
        assert_eq!(composite_signature(b""), expected);
        assert_eq!(composite_signature(b"x"), expected);
        assert_eq!(composite_signature(b"xyz"), expected);
    }

    #[test]
    fn test_signature_shape_for_larger_input() {
        let content: Vec<u8> = (0..=255u8).cycle().take(10_001).collect();
        assert_signature_shape(&composite_signature(&content));
    }

    #[test]
    fn test_extract_metadata_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file_sync(temp_dir.path().join("Data.CSV"), b"a,b\n1,2\n").unwrap();

        let (record, content) = extract_metadata(&path).unwrap();

        assert_eq!(content, b"a,b\n1,2\n");
        assert_eq!(record.size_bytes, 8);
        assert_eq!(record.size_human, "8.0 bytes");
        assert_eq!(record.name, "Data.CSV");
        assert_eq!(record.extension, ".csv");
        assert_eq!(record.mime_type.as_deref(), Some("text/csv"));
        assert_eq!(record.encoding, None);
        assert_eq!(record.categories, vec!["data_analysis".to_string()]);
        assert_eq!(record.content_hash, content_hash(&content));
        assert_eq!(record.resonance, 8);
        assert_signature_shape(&record.signature);
        assert!(!record.created.is_empty());
        assert!(record.modified.contains('T'));
    }

    #[test]
    fn test_size_follows_content_read() {
        let temp_dir = TempDir::new().unwrap();
        let content: Vec<u8> = (0..=255u8).cycle().take(1536).collect();
        let path = write_file_sync(temp_dir.path().join("blob.bin"), &content).unwrap();

        let (record, read) = extract_metadata(&path).unwrap();

        assert_eq!(record.size_bytes, read.len() as u64);
        assert_eq!(record.size_human, "1.5 KB");
        assert_eq!(record.resonance, resonance(record.size_bytes));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_pseudo_file_size_is_not_the_stat_length() {
        let path = std::path::Path::new("/proc/self/status");
        let (record, content) = extract_metadata(path).unwrap();

        assert!(!content.is_empty());
        assert_eq!(record.size_bytes, content.len() as u64);
        assert_eq!(record.resonance, resonance(content.len() as u64));
    }

    #[test]
    fn test_extract_metadata_missing_path() {
        let result = extract_metadata(std::path::Path::new("/definitely/does/not/exist/xyz123"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
