//! Metadata extraction: file attributes, content digests and derived values

use crate::models::FileRecord;
use crate::services::catalog::{categories_for, extension_of, guess_mime};
use crate::services::format::format_size;
use crate::{Error, Result};
use chrono::{DateTime, Local};
use md5::Md5;
use sha2::{Digest, Sha256};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Modulus applied to the byte length to derive the resonance value
pub const RESONANCE_MODULUS: u64 = 432;

const SIGNATURE_PARTS: usize = 4;
const SIGNATURE_PART_LEN: usize = 8;

/// Stat and read a file, returning its record and the raw content.
///
/// The content buffer is handed back so later stages can reuse the single
/// read instead of opening the file again.
///
/// # Errors
/// [`Error::NotFound`] if the path does not exist, [`Error::Io`] if it cannot
/// be stat'ed or read.
pub fn extract_metadata(path: &Path) -> Result<(FileRecord, Vec<u8>)> {
    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }

    let metadata = std::fs::metadata(path)?;
    let content = std::fs::read(path)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = extension_of(&name);
    let (mime_type, encoding) = guess_mime(&name);

    let modified = metadata.modified()?;
    let created = change_time(&metadata).unwrap_or(modified);

    // Bytes read, not the stat length (pseudo-files under /proc stat as 0)
    let size_bytes = content.len() as u64;
    log::debug!(
        "Extracted metadata for {}: {} bytes read ({} reported by stat)",
        path.display(),
        size_bytes,
        metadata.len()
    );

    let record = FileRecord {
        categories: categories_for(&extension),
        name,
        extension,
        path: path.to_string_lossy().into_owned(),
        size_bytes,
        size_human: format_size(size_bytes),
        created: format_timestamp(created),
        modified: format_timestamp(modified),
        mime_type: mime_type.map(str::to_string),
        encoding: encoding.map(str::to_string),
        content_hash: content_hash(&content),
        resonance: resonance(size_bytes),
        signature: composite_signature(&content),
    };

    Ok((record, content))
}

/// SHA-256 of the full content, hex-encoded
#[must_use]
pub fn content_hash(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

/// Byte length folded into `[0, 432)`
#[must_use]
pub fn resonance(len: u64) -> u64 {
    len % RESONANCE_MODULUS
}

/// Four-part identifier built from equal quarter slices of the content.
///
/// Each quarter is `len / 4` bytes; trailing remainder bytes belong to no
/// quarter. Each slice is MD5-hashed independently and the first 8 hex
/// characters of each digest are joined with `-`.
#[must_use]
pub fn composite_signature(content: &[u8]) -> String {
    let quarter = content.len() / SIGNATURE_PARTS;

    let parts: Vec<String> = (0..SIGNATURE_PARTS)
        .map(|i| {
            let chunk = &content[i * quarter..(i + 1) * quarter];
            let mut digest = hex::encode(Md5::digest(chunk));
            digest.truncate(SIGNATURE_PART_LEN);
            digest
        })
        .collect();

    log::trace!("Composite signature over {} byte quarters", quarter);
    parts.join("-")
}

/// Render a timestamp as RFC 3339 in local time
#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).to_rfc3339()
}

/// Inode change time on Unix
#[cfg(unix)]
fn change_time(metadata: &Metadata) -> Option<SystemTime> {
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    DateTime::from_timestamp(metadata.ctime(), nanos).map(SystemTime::from)
}

/// Birth time where the platform reports one
#[cfg(not(unix))]
fn change_time(metadata: &Metadata) -> Option<SystemTime> {
    metadata.created().ok()
}
