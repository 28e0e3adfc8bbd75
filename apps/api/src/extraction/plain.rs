use super::{ExtractionError, TextExtractor};

/// Plain-text uploads: strict UTF-8 decode, nothing else.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| ExtractionError::InputDecoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        let text = PlainTextExtractor.extract("résumé text".as_bytes()).unwrap();
        assert_eq!(text, "résumé text");
    }

    #[test]
    fn test_invalid_utf8_is_a_decoding_error() {
        let err = PlainTextExtractor.extract(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractionError::InputDecoding(_)));
    }

    #[test]
    fn test_empty_input_is_valid_empty_text() {
        assert_eq!(PlainTextExtractor.extract(b"").unwrap(), "");
    }
}
