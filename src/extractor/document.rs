use crate::error::{Result, TextVizError};
use crate::extractor::{plain, structured, tabular};
use serde::Serialize;
use std::path::Path;

/// Flattened textual content of a document, before normalization.
///
/// For tabular and structured sources all cell/field values are coerced to
/// text and joined with single spaces; the original structure is
/// irrecoverably lost.
pub type RawText = String;

/// The closed set of document formats the extractor understands.
///
/// Dispatch is an exhaustive match over this enum rather than chained
/// suffix conditionals, so adding a format forces every call site to
/// handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    TabularCsv,
    TabularXlsx,
    StructuredJson,
}

impl DocumentFormat {
    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "txt" => Some(DocumentFormat::PlainText),
            "csv" => Some(DocumentFormat::TabularCsv),
            "xlsx" => Some(DocumentFormat::TabularXlsx),
            "json" => Some(DocumentFormat::StructuredJson),
            _ => None,
        }
    }

    /// Determines the format from a file name, failing with
    /// `UnsupportedFormat` for unrecognized or missing suffixes.
    pub fn from_file_name(name: &str) -> Result<Self> {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        Self::from_extension(extension).ok_or_else(|| TextVizError::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "plain text",
            DocumentFormat::TabularCsv => "CSV",
            DocumentFormat::TabularXlsx => "XLSX",
            DocumentFormat::StructuredJson => "JSON",
        }
    }

    /// Runs the extraction strategy for this format over raw bytes.
    pub fn extract(&self, content: &[u8]) -> Result<RawText> {
        match self {
            DocumentFormat::PlainText => plain::extract(content),
            DocumentFormat::TabularCsv => tabular::extract_csv(content),
            DocumentFormat::TabularXlsx => tabular::extract_xlsx(content),
            DocumentFormat::StructuredJson => structured::extract(content),
        }
    }

    pub fn supported_extensions() -> &'static [&'static str] {
        &["txt", "csv", "xlsx", "json"]
    }
}

/// A user-supplied document: declared name plus owned byte content.
///
/// Transient by design. The document lives for one invocation and is
/// dropped after processing; nothing is written to durable storage.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn format(&self) -> Result<DocumentFormat> {
        DocumentFormat::from_file_name(&self.name)
    }

    /// Extracts the flattened textual content of this document.
    ///
    /// One-shot and side-effect free; fails with `UnsupportedFormat`,
    /// `Decode`, or `Parse` depending on the cause.
    pub fn extract(&self) -> Result<RawText> {
        self.format()?.extract(&self.content)
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_extension("txt"),
            Some(DocumentFormat::PlainText)
        );
        assert_eq!(
            DocumentFormat::from_extension("CSV"),
            Some(DocumentFormat::TabularCsv)
        );
        assert_eq!(
            DocumentFormat::from_extension("xlsx"),
            Some(DocumentFormat::TabularXlsx)
        );
        assert_eq!(
            DocumentFormat::from_extension("json"),
            Some(DocumentFormat::StructuredJson)
        );
        assert_eq!(DocumentFormat::from_extension("pdf"), None);
        assert_eq!(DocumentFormat::from_extension(""), None);
    }

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(
            DocumentFormat::from_file_name("notes.txt").unwrap(),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_file_name("data.v2.json").unwrap(),
            DocumentFormat::StructuredJson
        );
    }

    #[test]
    fn test_unrecognized_suffix_is_unsupported_not_empty() {
        // "wrong format" must stay distinguishable from "no content"
        let err = DocumentFormat::from_file_name("report.pdf").unwrap_err();
        assert!(matches!(
            err,
            TextVizError::UnsupportedFormat { ref extension } if extension == "pdf"
        ));

        let err = DocumentFormat::from_file_name("no_extension").unwrap_err();
        assert!(matches!(err, TextVizError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_document_extract_dispatches_on_name() {
        let doc = UploadedDocument::new("hello.txt", b"Hello there".to_vec());
        assert_eq!(doc.extract().unwrap(), "Hello there");

        let doc = UploadedDocument::new("hello.pdf", b"Hello there".to_vec());
        assert!(doc.extract().is_err());
    }

    #[test]
    fn test_document_size() {
        let doc = UploadedDocument::new("a.txt", vec![0u8; 42]);
        assert_eq!(doc.size(), 42);
    }

    #[test]
    fn test_supported_extensions_cover_every_variant() {
        for ext in DocumentFormat::supported_extensions() {
            assert!(DocumentFormat::from_extension(ext).is_some());
        }
    }
}
