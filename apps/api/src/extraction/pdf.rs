use super::{ExtractionError, TextExtractor};

/// PDF uploads, extracted page by page via `pdf-extract`.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Malformed {
            format: "pdf",
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let err = PdfExtractor.extract(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Malformed { format: "pdf", .. }));
    }
}
