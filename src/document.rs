//! Input acquisition: turn user input or an uploaded document into plain text.
//!
//! The document format is resolved once from the file extension into a
//! [`DocumentKind`] variant, and extraction dispatches exhaustively over it.
//! Unsupported formats are an explicit error, never a silent empty string.

use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, info};

use crate::error::{Result, TinytalkError};

/// Document format, resolved once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Docx,
    Unsupported(String),
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "txt" => Self::PlainText,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            other => Self::Unsupported(other.to_string()),
        }
    }
}

/// A request-scoped blob of text; no identity beyond its content.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub kind: DocumentKind,
}

impl Document {
    /// Manual mode: the text is exactly what the user typed, unprocessed.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            kind: DocumentKind::PlainText,
        }
    }

    /// File mode: extract plain text according to the resolved format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TinytalkError::FileNotFound(path.display().to_string()));
        }

        let kind = DocumentKind::from_path(path);
        debug!("Resolved {} as {:?}", path.display(), kind);

        let text = match &kind {
            DocumentKind::PlainText => std::fs::read_to_string(path)?,
            DocumentKind::Pdf => extract_pdf_text(path)?,
            DocumentKind::Docx => extract_docx_text(path)?,
            DocumentKind::Unsupported(ext) => {
                return Err(TinytalkError::UnsupportedFormat(format!(
                    "'{}' files are not supported (expected .txt, .pdf, or .docx)",
                    ext
                )));
            }
        };

        info!("Loaded {} ({} bytes of text)", path.display(), text.len());

        Ok(Self { text, kind })
    }
}

/// Text-layer extraction only, pages in order; no OCR.
fn extract_pdf_text(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .map_err(|e| TinytalkError::Document(format!("Failed to extract PDF text: {}", e)))
}

/// Paragraph texts from `word/document.xml`, joined with newlines in
/// document order. Tables, images, and headers are ignored.
fn extract_docx_text(path: &Path) -> Result<String> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| TinytalkError::Document(format!("Failed to open DOCX archive: {}", e)))?;

    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| TinytalkError::Document(format!("Missing word/document.xml: {}", e)))?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text_node = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" => in_text_node = true,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_node {
                    let value = e
                        .unescape()
                        .map_err(|err| TinytalkError::Document(format!("Invalid DOCX XML: {}", err)))?;
                    current.push_str(&value);
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_node = false,
                b"w:p" => {
                    if in_paragraph {
                        paragraphs.push(std::mem::take(&mut current));
                        in_paragraph = false;
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(TinytalkError::Document(format!(
                    "Failed to parse DOCX XML: {}",
                    err
                )));
            }
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_docx(path: &Path, paragraphs: &[&str]) {
        let file = std::fs::File::create(path).expect("create docx");
        let mut archive = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}</w:body></w:document>",
            body
        );

        archive
            .start_file("word/document.xml", options)
            .expect("start entry");
        archive.write_all(xml.as_bytes()).expect("write entry");
        archive.finish().expect("finish docx");
    }

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("a.txt")), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_path(Path::new("a.PDF")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("a.docx")), DocumentKind::Docx);
        assert_eq!(
            DocumentKind::from_path(Path::new("a.csv")),
            DocumentKind::Unsupported("csv".to_string())
        );
    }

    #[test]
    fn test_manual_text_is_unprocessed() {
        let doc = Document::from_text("  hello\nworld  ");
        assert_eq!(doc.text, "  hello\nworld  ");
        assert_eq!(doc.kind, DocumentKind::PlainText);
    }

    #[test]
    fn test_plain_text_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "plain contents").expect("write txt");

        let doc = Document::from_file(&path).expect("load txt");
        assert_eq!(doc.text, "plain contents");
    }

    #[test]
    fn test_docx_paragraphs_joined_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sample.docx");
        write_docx(&path, &["First paragraph.", "Second paragraph.", "Third paragraph."]);

        let doc = Document::from_file(&path).expect("load docx");
        assert_eq!(
            doc.text,
            "First paragraph.\nSecond paragraph.\nThird paragraph."
        );
    }

    #[test]
    fn test_unsupported_format_is_explicit_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "a,b,c").expect("write csv");

        let result = Document::from_file(&path);
        assert!(matches!(result, Err(TinytalkError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Document::from_file("/nonexistent/input.txt");
        assert!(matches!(result, Err(TinytalkError::FileNotFound(_))));
    }

    #[test]
    fn test_malformed_docx_propagates_parser_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, "not a zip archive").expect("write bytes");

        let result = Document::from_file(&path);
        assert!(matches!(result, Err(TinytalkError::Document(_))));
    }
}
