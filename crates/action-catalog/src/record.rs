//! Catalog row model

use serde::{Deserialize, Serialize};

/// One catalog row: a school referencing an action documented on a specific
/// page of a source PDF.
///
/// Fields serialize under the original catalog column headers, so the CSV
/// source and the exported spreadsheet share one schema. The same action
/// label may appear on several rows; a school can reference it on more than
/// one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// School name
    #[serde(rename = "Establecimiento")]
    pub establishment: String,

    /// Free-text action label
    #[serde(rename = "Acción")]
    pub action: String,

    /// Filename of the source PDF holding the supporting evidence
    #[serde(rename = "Documento PDF")]
    pub document: String,

    /// Page within the source document, 1-based
    #[serde(rename = "Página")]
    pub page: u32,
}
