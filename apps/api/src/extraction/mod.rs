//! Document text extraction.
//!
//! One extractor per supported upload format, behind a common trait so the
//! ranking pipeline never branches on file types itself. Dispatch happens on
//! the declared MIME type with a filename-extension fallback.

mod docx;
mod pdf;
mod plain;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The document bytes cannot be decoded as text. The document is
    /// skipped; the batch continues.
    #[error("input is not decodable text: {0}")]
    InputDecoding(String),

    /// The container format itself is unreadable (truncated PDF, broken
    /// DOCX archive, ...).
    #[error("malformed {format} document: {reason}")]
    Malformed {
        format: &'static str,
        reason: String,
    },
}

/// Turns raw upload bytes into plain text. Implementations are pure with
/// respect to their input and hold no state.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Holds one extractor per format and picks the right one per document.
pub struct ExtractorRegistry {
    pdf: PdfExtractor,
    docx: DocxExtractor,
    plain: PlainTextExtractor,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            pdf: PdfExtractor,
            docx: DocxExtractor,
            plain: PlainTextExtractor,
        }
    }

    /// Selects an extractor from the declared content type, falling back to
    /// the filename extension. Anything unrecognized is treated as plain
    /// text, matching the original upload handling.
    pub fn for_document(&self, content_type: Option<&str>, filename: &str) -> &dyn TextExtractor {
        match content_type {
            Some(PDF_MIME) => return &self.pdf,
            Some(DOCX_MIME) => return &self.docx,
            Some(_) | None => {}
        }
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            &self.pdf
        } else if lower.ends_with(".docx") {
            &self.docx
        } else {
            &self.plain
        }
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_prefers_declared_mime() {
        let registry = ExtractorRegistry::new();
        // Declared PDF wins even with a misleading extension.
        let extractor = registry.for_document(Some(PDF_MIME), "resume.txt");
        assert!(extractor.extract(b"not a pdf").is_err());
    }

    #[test]
    fn test_dispatch_falls_back_to_extension() {
        let registry = ExtractorRegistry::new();
        let extractor = registry.for_document(Some("application/octet-stream"), "resume.DOCX");
        assert!(extractor.extract(b"not a zip").is_err());
    }

    #[test]
    fn test_unknown_types_are_plain_text() {
        let registry = ExtractorRegistry::new();
        let extractor = registry.for_document(None, "resume.md");
        assert_eq!(extractor.extract(b"hello").unwrap(), "hello");
    }
}
