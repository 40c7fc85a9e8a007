//! Application state for the actions API

use action_catalog::Catalog;
use std::path::PathBuf;
use std::sync::Arc;

/// Fixed spreadsheet artifact name
pub const SPREADSHEET_FILE_NAME: &str = "acciones_filtradas.xlsx";

/// Fixed merged-PDF artifact name
pub const PDF_FILE_NAME: &str = "acciones_seleccionadas.pdf";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only catalog, loaded once at startup
    pub catalog: Arc<Catalog>,
    /// Base directory the catalog's document filenames resolve against
    pub documents_dir: PathBuf,
    /// Directory export artifacts are written to
    pub output_dir: PathBuf,
}
