//! Statement upload metadata and client-side file acceptance rules.
//!
//! Parsing happens server-side; the client only rejects files the backend
//! would refuse anyway (wrong type, over the size cap) before spending
//! bandwidth on them.

#[cfg(test)]
#[path = "statements_test.rs"]
mod statements_test;

pub const MAX_STATEMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Why a selected file was refused locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileRejection {
    UnsupportedType,
    TooLarge,
}

impl FileRejection {
    pub fn message(self) -> &'static str {
        match self {
            FileRejection::UnsupportedType => "Only PDF and CSV statements are supported.",
            FileRejection::TooLarge => "Statements are limited to 10 MB.",
        }
    }
}

/// Accepts `.pdf` and `.csv` files up to [`MAX_STATEMENT_BYTES`].
pub fn accept_file(name: &str, size: u64) -> Result<(), FileRejection> {
    let lower = name.to_lowercase();
    if !(lower.ends_with(".pdf") || lower.ends_with(".csv")) {
        return Err(FileRejection::UnsupportedType);
    }
    if size > MAX_STATEMENT_BYTES {
        return Err(FileRejection::TooLarge);
    }
    Ok(())
}

/// Metadata fields accompanying an upload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadMeta {
    pub month: u32,
    pub year: i32,
    pub bank_name: String,
    pub account_type: String,
}

impl UploadMeta {
    pub fn new(month: u32, year: i32) -> Self {
        UploadMeta { month, year, bank_name: String::new(), account_type: "checking".to_owned() }
    }
}

/// Human-readable file size for the statements table.
pub fn format_file_size(bytes: Option<u64>) -> String {
    match bytes {
        None | Some(0) => "—".to_owned(),
        Some(b) if b < 1024 => format!("{b} B"),
        Some(b) if b < 1024 * 1024 => format!("{:.1} KB", b as f64 / 1024.0),
        Some(b) => format!("{:.1} MB", b as f64 / (1024.0 * 1024.0)),
    }
}
