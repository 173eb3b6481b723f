//! Document reading
//!
//! PDFs are read page by page with `pdf-extract`; every other file is
//! treated as text, decoded as UTF-8 with a Latin-1 fallback.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ExtractionError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads a document from disk
pub async fn read_document(path: impl AsRef<Path>) -> Result<String, ExtractionError> {
    let path = path.as_ref();

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ExtractionError::FileNotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    read_document_bytes(&file_name, &bytes)
}

/// Reads an in-memory document; the file name decides the format
pub fn read_document_bytes(file_name: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    if is_pdf(file_name) {
        read_pdf(bytes)
    } else {
        Ok(decode_text(bytes))
    }
}

/// Returns true if the file name has a `.pdf` extension
pub fn is_pdf(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
}

fn read_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed files
    let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractionError::PdfParsing("malformed PDF".to_string()))?
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    debug!(pages = pages.len(), "PDF text extracted");

    Ok(join_pages(&pages))
}

/// Concatenates page texts, each preceded by a page marker
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .enumerate()
        .map(|(i, text)| format!("--- Page {} ---\n{}\n", i + 1, text.as_ref()))
        .collect()
}

/// Decodes text bytes, dropping a leading byte order mark
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            warn!(valid_up_to = e.valid_up_to(), "Document is not UTF-8, decoding as Latin-1");
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_detection() {
        assert!(is_pdf("claim.pdf"));
        assert!(is_pdf("CLAIM.PDF"));
        assert!(!is_pdf("claim.txt"));
        assert!(!is_pdf("pdf"));
    }

    #[test]
    fn test_page_markers() {
        let text = join_pages(&["first", ""]);
        assert_eq!(text, "--- Page 1 ---\nfirst\n--- Page 2 ---\n\n");
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFPolicy"), "Policy");
        assert_eq!(decode_text("Zürich".as_bytes()), "Zürich");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        assert_eq!(decode_text(b"Z\xFCrich"), "Zürich");
    }

    #[test]
    fn test_invalid_pdf() {
        let result = read_document_bytes("claim.pdf", b"not a pdf");
        assert!(matches!(result, Err(ExtractionError::PdfParsing(_))));
    }
}
