//! Document text extraction
//!
//! Uploaded files arrive as raw bytes plus a filename hint. PDFs get
//! structured page extraction; everything else, and any PDF that fails
//! extraction, is decoded as UTF-8 with invalid sequences replaced.

use tracing::{debug, warn};

/// Extract analyzable text from an uploaded document
///
/// Never fails; an empty string means "no text extracted" and the caller
/// treats the document as irrelevant.
pub fn text_from_file(filename: &str, content: &[u8]) -> String {
    if filename.to_ascii_lowercase().ends_with(".pdf") {
        match pdf_extract::extract_text_from_mem(content) {
            Ok(text) => {
                debug!(filename, chars = text.len(), "Extracted PDF text");
                return normalize_pdf_text(&text);
            }
            Err(e) => {
                warn!(filename, error = %e, "PDF extraction failed, falling back to raw decode");
            }
        }
    }

    String::from_utf8_lossy(content).trim().to_string()
}

/// Replace form-feed page separators with newlines and trim the result
///
/// pdf-extract emits a form feed between pages.
fn normalize_pdf_text(text: &str) -> String {
    text.replace('\x0c', "\n").trim().to_string()
}
