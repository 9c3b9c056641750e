//! Constant lookup tables keyed by file extension
//!
//! Extensions include the leading dot. MIME types and categories match
//! regardless of case; compression suffixes match case-sensitively
//! (`.Z` is `compress`, `.z` and `.GZ` carry no encoding).

/// Compression suffixes and the content encoding they imply
const ENCODINGS: &[(&str, &str)] = &[
    (".gz", "gzip"),
    (".bz2", "bzip2"),
    (".xz", "xz"),
    (".br", "br"),
    (".Z", "compress"),
];

const MIME_TYPES: &[(&str, &str)] = &[
    (".csv", "text/csv"),
    (".json", "application/json"),
    (".xml", "text/xml"),
    (".xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    (".py", "text/x-python"),
    (".js", "text/javascript"),
    (".c", "text/x-csrc"),
    (".h", "text/x-chdr"),
    (".cpp", "text/x-c++src"),
    (".java", "text/x-java"),
    (".txt", "text/plain"),
    (".md", "text/markdown"),
    (".html", "text/html"),
    (".htm", "text/html"),
    (".css", "text/css"),
    (".pdf", "application/pdf"),
    (".doc", "application/msword"),
    (
        ".docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (".yaml", "application/yaml"),
    (".yml", "application/yaml"),
    (".toml", "application/toml"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".mp4", "video/mp4"),
    (".mp3", "audio/mpeg"),
    (".zip", "application/zip"),
    (".tar", "application/x-tar"),
    (".wasm", "application/wasm"),
];

/// Analysis categories and the extensions that belong to them.
///
/// An extension may appear in more than one category (`.json`).
const CATEGORIES: &[(&str, &[&str])] = &[
    ("data_analysis", &[".csv", ".json", ".xml", ".xlsx", ".parquet"]),
    (
        "code_analysis",
        &[".py", ".js", ".sol", ".go", ".java", ".cpp", ".c"],
    ),
    ("document_analysis", &[".txt", ".md", ".pdf", ".doc", ".docx"]),
    ("config_analysis", &[".json", ".yaml", ".yml", ".toml", ".ini"]),
    ("media_analysis", &[".jpg", ".png", ".gif", ".mp4", ".mp3"]),
    ("security_analysis", &[".log", ".cert", ".key", ".pem"]),
];

fn lookup(table: &[(&str, &'static str)], extension: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, value)| *value)
}

/// Byte offset of the final `.` and the suffix it starts, as written
fn raw_suffix(name: &str) -> Option<(usize, &str)> {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => Some((idx, &name[idx..])),
        _ => None,
    }
}

/// Lower-cased final suffix of a file name, including the dot.
///
/// Dotfiles such as `.bashrc` have no extension.
#[must_use]
pub fn extension_of(name: &str) -> String {
    raw_suffix(name)
        .map(|(_, suffix)| suffix.to_lowercase())
        .unwrap_or_default()
}

/// Guess `(mime_type, encoding)` from a file name.
///
/// A recognised compression suffix is peeled off first so that
/// `table.csv.gz` reports `text/csv` with a `gzip` encoding.
#[must_use]
pub fn guess_mime(name: &str) -> (Option<&'static str>, Option<&'static str>) {
    if let Some((idx, suffix)) = raw_suffix(name)
        && let Some(encoding) = encoding_for(suffix)
    {
        let inner = extension_of(&name[..idx]);
        return (lookup(MIME_TYPES, &inner), Some(encoding));
    }

    (lookup(MIME_TYPES, &extension_of(name)), None)
}

fn encoding_for(suffix: &str) -> Option<&'static str> {
    ENCODINGS
        .iter()
        .find(|(ext, _)| *ext == suffix)
        .map(|(_, encoding)| *encoding)
}

/// Category labels the extension belongs to, in table order
#[must_use]
pub fn categories_for(extension: &str) -> Vec<String> {
    CATEGORIES
        .iter()
        .filter(|(_, extensions)| extensions.iter().any(|ext| ext.eq_ignore_ascii_case(extension)))
        .map(|(category, _)| (*category).to_string())
        .collect()
}
