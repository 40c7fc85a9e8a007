//! Page extraction
//!
//! Resolves (document, page) requests against source PDFs on disk. Each
//! request opens its own source, keeps the single requested page, and hands
//! the result to the assembler. The source handle is released before the
//! next request starts. Failures are collected per request; the batch always
//! runs to completion.

use crate::assemble::PageAssembler;
use crate::error::PdfPagesError;
use lopdf::Document;
use serde::Serialize;
use std::path::PathBuf;

/// One page to pull from a source document
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Display name used in failure reports
    pub document: String,
    /// Resolved path of the source PDF
    pub source: PathBuf,
    /// Requested page, 1-based
    pub page: u32,
}

impl PageRequest {
    /// Zero-based page index within the source document
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}

/// A request that could not be satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    pub document: String,
    /// Page as requested, 1-based
    pub page: u32,
    pub reason: String,
}

/// Outcome of an extraction batch
#[derive(Debug)]
pub struct ExtractionReport {
    /// Serialized output document; `None` when no page could be extracted
    pub pdf: Option<Vec<u8>>,
    pub pages_extracted: usize,
    /// Failures in request order
    pub failures: Vec<PageFailure>,
}

/// Process `requests` in order, appending each successfully extracted page
/// to a fresh output document.
///
/// A failed request (missing file, unreadable document, page out of range)
/// is recorded and skipped. The returned error covers only serialization of
/// the final output, never a per-request fault.
pub fn extract_pages(requests: &[PageRequest]) -> Result<ExtractionReport, PdfPagesError> {
    let mut assembler = PageAssembler::new();
    let mut failures = Vec::new();

    for request in requests {
        match extract_single(request) {
            Ok(page_doc) => assembler.append(page_doc),
            Err(e) => failures.push(PageFailure {
                document: request.document.clone(),
                page: request.page,
                reason: e.to_string(),
            }),
        }
    }

    let pages_extracted = assembler.page_count();
    let pdf = assembler.finish()?;

    Ok(ExtractionReport {
        pdf,
        pages_extracted,
        failures,
    })
}

/// Open one source document and reduce it to the requested page
fn extract_single(request: &PageRequest) -> Result<Document, PdfPagesError> {
    let doc = Document::load(&request.source)
        .map_err(|e| PdfPagesError::ParseError(e.to_string()))?;
    take_page(doc, request.page)
}

/// Reduce `doc` to the single page `page` (1-based), dropping every other
/// page and pruning objects the kept page no longer references.
pub fn take_page(mut doc: Document, page: u32) -> Result<Document, PdfPagesError> {
    if page == 0 {
        return Err(PdfPagesError::InvalidPage(
            "Page numbers must be >= 1".into(),
        ));
    }

    let page_count = doc.get_pages().len() as u32;
    if page > page_count {
        return Err(PdfPagesError::InvalidPage(format!(
            "Page {} does not exist (document has {} pages)",
            page, page_count
        )));
    }

    // Delete in reverse order to keep page numbers stable while deleting
    let mut pages_to_delete: Vec<u32> = (1..=page_count).filter(|p| *p != page).collect();
    pages_to_delete.reverse();
    for page_num in pages_to_delete {
        doc.delete_pages(&[page_num]);
    }

    doc.prune_objects();
    Ok(doc)
}
