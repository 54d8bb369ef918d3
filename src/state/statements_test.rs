use super::*;

// =============================================================
// File acceptance
// =============================================================

#[test]
fn accepts_pdf_and_csv() {
    assert_eq!(accept_file("statement.pdf", 1024), Ok(()));
    assert_eq!(accept_file("export.csv", 1024), Ok(()));
}

#[test]
fn extension_check_is_case_insensitive() {
    assert_eq!(accept_file("STATEMENT.PDF", 1024), Ok(()));
    assert_eq!(accept_file("Export.Csv", 1024), Ok(()));
}

#[test]
fn rejects_other_types() {
    assert_eq!(accept_file("statement.xlsx", 1024), Err(FileRejection::UnsupportedType));
    assert_eq!(accept_file("statement", 1024), Err(FileRejection::UnsupportedType));
}

#[test]
fn rejects_oversized_files() {
    assert_eq!(
        accept_file("big.pdf", MAX_STATEMENT_BYTES + 1),
        Err(FileRejection::TooLarge)
    );
}

#[test]
fn size_cap_is_inclusive() {
    assert_eq!(accept_file("exact.pdf", MAX_STATEMENT_BYTES), Ok(()));
}

// =============================================================
// Upload metadata defaults
// =============================================================

#[test]
fn upload_meta_defaults_to_checking() {
    let meta = UploadMeta::new(8, 2026);
    assert_eq!(meta.account_type, "checking");
    assert!(meta.bank_name.is_empty());
}

// =============================================================
// Size formatting
// =============================================================

#[test]
fn formats_missing_and_zero_sizes_as_dash() {
    assert_eq!(format_file_size(None), "—");
    assert_eq!(format_file_size(Some(0)), "—");
}

#[test]
fn formats_bytes_kilobytes_megabytes() {
    assert_eq!(format_file_size(Some(512)), "512 B");
    assert_eq!(format_file_size(Some(2048)), "2.0 KB");
    assert_eq!(format_file_size(Some(3 * 1024 * 1024)), "3.0 MB");
}
