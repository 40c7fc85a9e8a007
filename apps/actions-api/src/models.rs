//! Request and response bodies for the actions API

use action_catalog::{ActionRecord, SchoolSummary};
use pdfpages_core::PageFailure;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Catalog summary response
#[derive(Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    /// Distinct-action counts, sorted by school
    pub schools: Vec<SchoolSummary>,
    pub count: usize,
}

/// Fuzzy search request body
#[derive(Deserialize)]
pub struct SearchRequest {
    /// Free-text keyword, e.g. "retroalimentación"
    pub query: String,
}

/// Fuzzy search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    /// Action labels similar to the query, sorted
    pub matches: Vec<String>,
    pub count: usize,
}

/// Action/school selection, shared by preview and both exports
#[derive(Deserialize)]
pub struct SelectionRequest {
    /// Selected action labels
    pub actions: Vec<String>,

    /// Selected schools; omitted selects every school the actions touch
    #[serde(default)]
    pub schools: Option<Vec<String>>,
}

/// Preview response: derived schools plus the rows they select
#[derive(Serialize)]
pub struct PreviewResponse {
    pub success: bool,
    /// Schools touched by the selected actions, sorted ascending
    pub schools: Vec<String>,
    pub school_count: usize,
    /// Selected rows, ordered by (establishment, action)
    pub rows: Vec<ActionRecord>,
    pub row_count: usize,
}

/// Spreadsheet export response
#[derive(Serialize)]
pub struct SpreadsheetResponse {
    pub success: bool,
    /// Base64-encoded XLSX artifact
    pub data: String,
    pub file_name: String,
    pub row_count: usize,
}

/// Merged-PDF export response
#[derive(Serialize)]
pub struct PdfExportResponse {
    pub success: bool,
    /// Base64-encoded PDF; absent when no page could be extracted
    pub data: Option<String>,
    pub file_name: String,
    pub page_count: usize,
    /// Per-page failures, in request order
    pub errors: Vec<PageFailure>,
}
