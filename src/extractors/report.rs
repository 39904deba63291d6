// src/extractors/report.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use lopdf::Document;
use std::path::Path;

// --- Data Structures ---

/// An opened credit report, held in memory until dropped.
/// Re-open (or call `pages()` again) to restart the page sequence.
pub enum ReportSource {
    Pdf { name: String, document: Document },
    Text { name: String, content: String },
}

impl ReportSource {
    /// Opens a report from disk, choosing the reader by file extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        tracing::info!("Opening report: {}", path.display());

        match extension.as_str() {
            "pdf" => {
                let bytes = std::fs::read(path)?;
                Self::from_pdf_bytes(name, &bytes)
            }
            "txt" | "text" => {
                let bytes = std::fs::read(path)?;
                Ok(Self::from_text(name, String::from_utf8_lossy(&bytes)))
            }
            _ => Err(ExtractError::UnsupportedFormat(format!(
                "{} (expected .pdf or .txt)",
                name
            ))),
        }
    }

    /// Parses an in-memory PDF.
    pub fn from_pdf_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, ExtractError> {
        let name = name.into();
        let document = Document::load_mem(bytes)
            .map_err(|e| ExtractError::PdfLoad(format!("{}: {}", name, e)))?;
        tracing::debug!("Loaded PDF {} with {} pages", name, document.get_pages().len());
        Ok(Self::Pdf { name, document })
    }

    /// Wraps already-extracted plain text as a single-page report.
    pub fn from_text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Text { name: name.into(), content: content.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Pdf { name, .. } | Self::Text { name, .. } => name,
        }
    }

    pub fn page_count(&self) -> usize {
        match self {
            Self::Pdf { document, .. } => document.get_pages().len(),
            Self::Text { .. } => 1,
        }
    }

    /// Lazily yields the text of each page that has any.
    pub fn pages(&self) -> Pages<'_> {
        let numbers: Vec<u32> = match self {
            Self::Pdf { document, .. } => document.get_pages().keys().copied().collect(),
            Self::Text { .. } => vec![1],
        };
        Pages { source: self, numbers: numbers.into_iter() }
    }

    /// Concatenates every page, each followed by a newline.
    pub fn full_text(&self) -> String {
        let mut text = String::new();
        for page in self.pages() {
            text.push_str(&page);
            text.push('\n');
        }
        tracing::debug!("Extracted {} bytes of text from {}", text.len(), self.name());
        text
    }

    fn page_text(&self, page_number: u32) -> Result<String, String> {
        match self {
            Self::Pdf { document, .. } => document
                .extract_text(&[page_number])
                .map_err(|e| e.to_string()),
            Self::Text { content, .. } => Ok(content.clone()),
        }
    }
}

/// Iterator over the non-empty page texts of a `ReportSource`.
pub struct Pages<'a> {
    source: &'a ReportSource,
    numbers: std::vec::IntoIter<u32>,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let page_number = self.numbers.next()?;
            match self.source.page_text(page_number) {
                Ok(text) if !text.is_empty() => return Some(text),
                Ok(_) => {
                    tracing::debug!("Page {} of {} has no text, skipping", page_number, self.source.name());
                }
                Err(e) => {
                    // Unreadable pages contribute nothing
                    tracing::debug!("Could not extract page {} of {}: {}", page_number, self.source.name(), e);
                }
            }
        }
    }
}
