//! Best-effort document-to-text extraction for uploaded resumes.
//!
//! Supports `.txt`, `.docx`, and `.pdf`. PDF text recovery goes through the
//! `pdf-extract` crate; DOCX recovery is a textual scrape of the readable
//! XML fragments. Low-quality extraction never errors: anything below the
//! minimum length threshold comes back as a fixed placeholder string so the
//! caller always has something to show. The only error this module produces
//! is an unsupported file extension.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unsupported file type '{0}' (expected txt, docx, or pdf)")]
    UnsupportedType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Txt,
    Docx,
    Pdf,
}

impl DocumentKind {
    pub fn from_filename(name: &str) -> Result<Self, DocumentError> {
        let extension = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
        match extension.as_str() {
            "txt" => Ok(Self::Txt),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(DocumentError::UnsupportedType(extension)),
        }
    }
}

/// Minimum plausible length for scraped document text.
const MIN_EXTRACTED_LEN: usize = 20;

pub const EXTRACTION_PLACEHOLDER: &str = "Unable to extract text from this file. \
    Please upload a TXT file or fill in the profile fields manually.";

/// Text fragments between XML tags, as found in DOCX document parts.
static XML_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">([^<]+)<").unwrap());
/// Fragments that are only digits, whitespace, and separators carry no prose.
static NUMERIC_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-_.]+$").unwrap());
/// Tokens worth keeping when scraping readable text out of raw bytes.
static WORDLIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@.,\-_]+$").unwrap());

static SPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").unwrap());

/// Recovers plain text from the uploaded bytes. Never panics and never
/// errors: garbage input degrades to the placeholder string.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> String {
    match kind {
        DocumentKind::Txt => String::from_utf8_lossy(bytes).into_owned(),
        DocumentKind::Docx => with_placeholder_floor(extract_docx_text(bytes)),
        DocumentKind::Pdf => with_placeholder_floor(extract_pdf_text(bytes)),
    }
}

fn with_placeholder_floor(text: String) -> String {
    if text.trim().len() < MIN_EXTRACTED_LEN {
        EXTRACTION_PLACEHOLDER.to_string()
    } else {
        text
    }
}

fn extract_pdf_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if text.trim().len() >= MIN_EXTRACTED_LEN => clean_text(&text),
        Ok(_) => {
            debug!("pdf extraction produced near-empty text, falling back to byte scrape");
            clean_text(&scrape_readable_tokens(bytes))
        }
        Err(e) => {
            debug!("pdf extraction failed ({e}), falling back to byte scrape");
            clean_text(&scrape_readable_tokens(bytes))
        }
    }
}

fn extract_docx_text(bytes: &[u8]) -> String {
    let raw = String::from_utf8_lossy(bytes);

    let fragments: Vec<&str> = XML_TEXT_RE
        .captures_iter(&raw)
        .filter_map(|caps| caps.get(1))
        .map(|fragment| fragment.as_str().trim())
        .filter(|fragment| !fragment.is_empty() && !NUMERIC_NOISE_RE.is_match(fragment))
        .collect();
    let text = fragments.join(" ");

    if text.len() >= MIN_EXTRACTED_LEN {
        clean_text(&text)
    } else {
        clean_text(&scrape_readable_tokens(bytes))
    }
}

/// Last-resort recovery: keep only word-like printable-ASCII tokens.
fn scrape_readable_tokens(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    let printable: String = decoded
        .chars()
        .map(|c| if (' '..='~').contains(&c) || c == '\n' { c } else { ' ' })
        .collect();
    printable
        .split_whitespace()
        .filter(|word| word.len() > 2 && WORDLIKE_RE.is_match(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapses space runs and 3+ blank lines while preserving line structure,
/// which the section extractors depend on.
pub fn clean_text(text: &str) -> String {
    let collapsed = SPACE_RUN_RE.replace_all(text, " ");
    let collapsed = BLANK_RUN_RE.replace_all(&collapsed, "\n\n");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("resume.txt").unwrap(), DocumentKind::Txt);
        assert_eq!(DocumentKind::from_filename("Resume.DOCX").unwrap(), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_filename("cv.v2.pdf").unwrap(), DocumentKind::Pdf);
    }

    #[test]
    fn test_kind_rejects_unknown_extension() {
        assert!(DocumentKind::from_filename("resume.rtf").is_err());
        assert!(DocumentKind::from_filename("no_extension").is_err());
    }

    #[test]
    fn test_txt_passes_through() {
        let text = "John Doe\njohn@example.com\n";
        assert_eq!(extract_text(DocumentKind::Txt, text.as_bytes()), text);
    }

    #[test]
    fn test_txt_lossy_decodes_invalid_utf8() {
        let bytes = [b'o', b'k', 0xff, b'!'];
        let text = extract_text(DocumentKind::Txt, &bytes);
        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }

    #[test]
    fn test_docx_scrapes_xml_fragments() {
        let bytes = b"<w:p><w:t>John Doe, Senior Engineer</w:t><w:t>Acme Inc since 2019</w:t></w:p>";
        let text = extract_text(DocumentKind::Docx, bytes);
        assert_eq!(text, "John Doe, Senior Engineer Acme Inc since 2019");
    }

    #[test]
    fn test_docx_skips_numeric_noise_fragments() {
        let bytes = b"<a>120-34 56</a><b>real resume content goes here</b>";
        let text = extract_text(DocumentKind::Docx, bytes);
        assert_eq!(text, "real resume content goes here");
    }

    #[test]
    fn test_docx_garbage_yields_placeholder() {
        let bytes = [0u8, 1, 2, 3, 255, 254];
        assert_eq!(extract_text(DocumentKind::Docx, &bytes), EXTRACTION_PLACEHOLDER);
    }

    #[test]
    fn test_pdf_garbage_yields_placeholder_not_error() {
        let bytes = [0u8, 1, 2, 3, 4, 5];
        assert_eq!(extract_text(DocumentKind::Pdf, &bytes), EXTRACTION_PLACEHOLDER);
    }

    #[test]
    fn test_pdf_scrape_fallback_recovers_wordlike_tokens() {
        // Not a valid PDF; the byte scrape should still pull out the words.
        let mut bytes = vec![0u8; 4];
        bytes.extend_from_slice(b"resume text with john.doe@example.com inside");
        bytes.push(0);
        let text = extract_text(DocumentKind::Pdf, &bytes);
        assert!(text.contains("john.doe@example.com"), "got: {text}");
        assert!(text.contains("resume"));
    }

    #[test]
    fn test_clean_text_collapses_spaces_preserving_lines() {
        let cleaned = clean_text("SKILLS:\n\n\n\nRust,\t  SQL  ");
        assert_eq!(cleaned, "SKILLS:\n\nRust, SQL");
    }
}
