//! Catalog loading and read-only accessors

use crate::record::ActionRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Read(#[from] csv::Error),

    #[error("Invalid page number {page} for {document} (row {row})")]
    InvalidPage {
        row: usize,
        document: String,
        page: u32,
    },
}

/// Distinct-action count for one school
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolSummary {
    pub establishment: String,
    pub action_count: usize,
}

/// Immutable, in-memory action catalog.
///
/// Loaded once per session; every filter derives a new view and the row
/// order of the source is preserved throughout.
#[derive(Debug, Clone)]
pub struct Catalog {
    rows: Vec<ActionRecord>,
}

impl Catalog {
    /// Load the catalog from a CSV file carrying the original column
    /// headers (`Establecimiento`, `Acción`, `Documento PDF`, `Página`).
    ///
    /// Fails when the file is missing, a required column is absent, a page
    /// value is not integer-coercible, or a page number is below 1.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for result in reader.deserialize::<ActionRecord>() {
            rows.push(result?);
        }
        Self::from_rows(rows)
    }

    /// Build a catalog from already-parsed rows, enforcing the page
    /// invariant
    pub fn from_rows(rows: Vec<ActionRecord>) -> Result<Self, CatalogError> {
        for (idx, record) in rows.iter().enumerate() {
            if record.page < 1 {
                return Err(CatalogError::InvalidPage {
                    row: idx + 1,
                    document: record.document.clone(),
                    page: record.page,
                });
            }
        }
        Ok(Self { rows })
    }

    /// All rows, in source order
    pub fn rows(&self) -> &[ActionRecord] {
        &self.rows
    }

    /// Rows satisfying `predicate`, in source order
    pub fn rows_where<P>(&self, mut predicate: P) -> Vec<&ActionRecord>
    where
        P: FnMut(&ActionRecord) -> bool,
    {
        self.rows.iter().filter(|&r| predicate(r)).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct action labels, sorted ascending
    pub fn distinct_actions(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.rows.iter().map(|r| r.action.as_str()).collect();
        set.into_iter().map(str::to_owned).collect()
    }

    /// Distinct-action count per school, sorted by school ascending
    pub fn summary(&self) -> Vec<SchoolSummary> {
        let mut per_school: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for row in &self.rows {
            per_school
                .entry(row.establishment.as_str())
                .or_default()
                .insert(row.action.as_str());
        }
        per_school
            .into_iter()
            .map(|(establishment, actions)| SchoolSummary {
                establishment: establishment.to_owned(),
                action_count: actions.len(),
            })
            .collect()
    }
}
