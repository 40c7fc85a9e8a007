//! PDF page extraction and assembly
//!
//! Pulls individual pages out of many source PDFs and gathers them into a
//! single output document. A failed page lookup is recorded and skipped, so
//! one bad reference never aborts the rest of the batch.

pub mod assemble;
pub mod error;
pub mod extract;

pub use assemble::PageAssembler;
pub use error::PdfPagesError;
pub use extract::{extract_pages, take_page, ExtractionReport, PageFailure, PageRequest};

/// Parse PDF bytes and return page count
pub fn get_page_count(bytes: &[u8]) -> Result<u32, PdfPagesError> {
    let doc =
        lopdf::Document::load_mem(bytes).map_err(|e| PdfPagesError::ParseError(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}
