//! API handlers for the actions server
//!
//! One interaction runs one pass of the pipeline: fuzzy-match a query
//! against the distinct action labels, derive the schools the selected
//! labels touch, filter the rows, and export the result as a spreadsheet or
//! as a merged PDF built from each row's (document, page) reference.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::{info, warn};

use action_catalog::{filter_by_actions, similar_actions, FilteredView, SIMILARITY_THRESHOLD};
use export_sinks::{write_pdf, write_spreadsheet};
use pdfpages_core::{extract_pages, PageRequest};

use crate::error::ApiError;
use crate::models::{
    HealthResponse, PdfExportResponse, PreviewResponse, SearchRequest, SearchResponse,
    SelectionRequest, SpreadsheetResponse, SummaryResponse,
};
use crate::state::{AppState, PDF_FILE_NAME, SPREADSHEET_FILE_NAME};

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "actions-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: GET /api/summary
pub async fn handle_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let schools = state.catalog.summary();
    let count = schools.len();
    Json(SummaryResponse {
        success: true,
        schools,
        count,
    })
}

/// Handler: POST /api/search
///
/// Zero matches is a successful empty response; the operator retries with
/// another keyword.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let labels = state.catalog.distinct_actions();
    let matches = similar_actions(
        &req.query,
        labels.iter().map(String::as_str),
        SIMILARITY_THRESHOLD,
    );
    info!("Search '{}' matched {} action(s)", req.query, matches.len());

    let count = matches.len();
    Json(SearchResponse {
        success: true,
        matches,
        count,
    })
}

/// Handler: POST /api/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<SelectionRequest>,
) -> Json<PreviewResponse> {
    let by_actions = filter_by_actions(&state.catalog, &req.actions);
    let schools = by_actions.schools();

    let selected = match &req.schools {
        Some(schools) => schools.clone(),
        None => schools.clone(),
    };
    let view = by_actions.retain_schools(&selected);

    let rows: Vec<_> = view.preview().into_iter().cloned().collect();
    let row_count = rows.len();
    let school_count = schools.len();

    Json(PreviewResponse {
        success: true,
        schools,
        school_count,
        rows,
        row_count,
    })
}

/// Handler: POST /api/export/spreadsheet
pub async fn handle_export_spreadsheet(
    State(state): State<AppState>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<SpreadsheetResponse>, ApiError> {
    let (_, view) = resolve_selection(&state, &req);
    if view.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Selection matches no catalog rows".into(),
        ));
    }

    let rows: Vec<_> = view.rows().iter().map(|r| (*r).clone()).collect();
    let row_count = rows.len();
    let dest = state.output_dir.join(SPREADSHEET_FILE_NAME);

    let write_dest = dest.clone();
    tokio::task::spawn_blocking(move || write_spreadsheet(rows.iter(), &write_dest))
        .await
        .map_err(|e| ApiError::Internal(e.into()))??;

    let bytes = tokio::fs::read(&dest)
        .await
        .map_err(|e| ApiError::Internal(e.into()))?;
    info!("Exported {} row(s) to {}", row_count, dest.display());

    Ok(Json(SpreadsheetResponse {
        success: true,
        data: BASE64.encode(bytes),
        file_name: SPREADSHEET_FILE_NAME.to_string(),
        row_count,
    }))
}

/// Handler: POST /api/export/pdf
///
/// Builds the extraction list school by school in selection order, each
/// school's rows in catalog order. Failed page lookups never abort the
/// batch; they come back in `errors`. The artifact is written (and
/// returned) only when at least one page was extracted.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<PdfExportResponse>, ApiError> {
    let (schools, view) = resolve_selection(&state, &req);
    if view.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Selection matches no catalog rows".into(),
        ));
    }

    let requests: Vec<PageRequest> = schools
        .iter()
        .flat_map(|school| view.rows_for_school(school))
        .map(|row| PageRequest {
            document: row.document.clone(),
            source: state.documents_dir.join(&row.document),
            page: row.page,
        })
        .collect();

    let report = tokio::task::spawn_blocking(move || extract_pages(&requests))
        .await
        .map_err(|e| ApiError::Internal(e.into()))??;

    for failure in &report.failures {
        warn!(
            "{} (pág {}): {}",
            failure.document, failure.page, failure.reason
        );
    }

    let data = match &report.pdf {
        Some(bytes) => {
            let dest = state.output_dir.join(PDF_FILE_NAME);
            write_pdf(bytes, &dest)?;
            info!(
                "Assembled {} page(s) into {}",
                report.pages_extracted,
                dest.display()
            );
            Some(BASE64.encode(bytes))
        }
        None => None,
    };

    Ok(Json(PdfExportResponse {
        success: data.is_some(),
        data,
        file_name: PDF_FILE_NAME.to_string(),
        page_count: report.pages_extracted,
        errors: report.failures,
    }))
}

/// Resolve a selection into the selected schools (in selection order) and
/// the rows they keep. An omitted school list selects every school the
/// chosen actions touch.
fn resolve_selection<'a>(
    state: &'a AppState,
    req: &SelectionRequest,
) -> (Vec<String>, FilteredView<'a>) {
    let by_actions = filter_by_actions(&state.catalog, &req.actions);
    let schools = match &req.schools {
        Some(schools) => schools.clone(),
        None => by_actions.schools(),
    };
    let view = by_actions.retain_schools(&schools);
    (schools, view)
}
