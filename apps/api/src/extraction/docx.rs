use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{ExtractionError, TextExtractor};

/// DOCX uploads. A .docx file is a zip container; the body text lives in
/// `word/document.xml` as `<w:t>` runs grouped into `<w:p>` paragraphs.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::Malformed {
                format: "docx",
                reason: e.to_string(),
            })?;
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| ExtractionError::Malformed {
                format: "docx",
                reason: format!("missing word/document.xml: {e}"),
            })?
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::InputDecoding(e.to_string()))?;

        collect_text(&xml)
    }
}

/// Walks the document XML, concatenating text runs. Paragraph ends become
/// newlines and explicit tabs/breaks become whitespace so downstream
/// normalization sees word boundaries.
fn collect_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| ExtractionError::Malformed {
                    format: "docx",
                    reason: e.to_string(),
                })?;
                out.push_str(&text);
            }
            Ok(Event::Empty(e)) if matches!(e.name().as_ref(), b"w:tab" | b"w:br") => {
                out.push(' ');
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => out.push('\n'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractionError::Malformed {
                    format: "docx",
                    reason: e.to_string(),
                })
            }
        }
    }
    Ok(out)
}
