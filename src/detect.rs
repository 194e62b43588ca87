//! PDF header validation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Length of the version suffix, e.g. "1.7".
const VERSION_LEN: usize = 3;

/// Read the `%PDF-x.y` header from a byte slice and return the version.
///
/// # Returns
/// * `Ok(version)` if the data starts with a valid PDF header
/// * `Err(Error::UnknownFormat)` if the magic bytes are missing
/// * `Err(Error::UnsupportedVersion)` if the version suffix is malformed
pub fn sniff_version(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let raw = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(raw).to_string();

    let bytes = version.as_bytes();
    if !(bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(version)
}

/// Validate that a file on disk starts with a PDF header.
///
/// Only the first few bytes are read; the full document is loaded later by
/// the decoder.
pub fn require_pdf<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 16];
    let n = file.read(&mut header)?;
    sniff_version(&header[..n])
}

/// Check if bytes represent a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    sniff_version(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_valid_versions() {
        assert_eq!(sniff_version(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap(), "1.7");
        assert_eq!(sniff_version(b"%PDF-2.0\n").unwrap(), "2.0");
    }

    #[test]
    fn test_sniff_not_a_pdf() {
        assert!(matches!(
            sniff_version(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(sniff_version(b"%PDF"), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_sniff_bad_version() {
        assert!(matches!(
            sniff_version(b"%PDF-abc\n"),
            Err(Error::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\ntest"));
        assert!(!is_pdf_bytes(b"Not a PDF file"));
        assert!(!is_pdf_bytes(b""));
    }
}
