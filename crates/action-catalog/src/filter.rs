//! Pure row filtering
//!
//! Views borrow catalog rows; deriving a view never copies or mutates the
//! catalog. Filtering by actions and then by schools is equivalent to one
//! combined predicate over both fields.

use crate::catalog::Catalog;
use crate::record::ActionRecord;
use std::collections::BTreeSet;

/// Rows currently selected by action labels and, optionally, schools
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    rows: Vec<&'a ActionRecord>,
}

/// Rows whose action label is in `labels`, in catalog order
pub fn filter_by_actions<'a>(catalog: &'a Catalog, labels: &[String]) -> FilteredView<'a> {
    let wanted: BTreeSet<&str> = labels.iter().map(String::as_str).collect();
    FilteredView {
        rows: catalog.rows_where(|r| wanted.contains(r.action.as_str())),
    }
}

impl<'a> FilteredView<'a> {
    /// Restrict to rows whose school is in `schools`, preserving row order
    pub fn retain_schools(&self, schools: &[String]) -> FilteredView<'a> {
        let wanted: BTreeSet<&str> = schools.iter().map(String::as_str).collect();
        FilteredView {
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|r| wanted.contains(r.establishment.as_str()))
                .collect(),
        }
    }

    /// Selected rows, in catalog order
    pub fn rows(&self) -> &[&'a ActionRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct schools among the rows, sorted ascending
    pub fn schools(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .rows
            .iter()
            .map(|r| r.establishment.as_str())
            .collect();
        set.into_iter().map(str::to_owned).collect()
    }

    /// Rows ordered by (establishment, action) for display
    pub fn preview(&self) -> Vec<&'a ActionRecord> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            (a.establishment.as_str(), a.action.as_str())
                .cmp(&(b.establishment.as_str(), b.action.as_str()))
        });
        rows
    }

    /// Rows of one school, in catalog order
    pub fn rows_for_school<'s>(
        &'s self,
        school: &str,
    ) -> impl Iterator<Item = &'a ActionRecord> + 's {
        let school = school.to_owned();
        self.rows
            .iter()
            .copied()
            .filter(move |r| r.establishment == school)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(establishment: &str, action: &str, document: &str, page: u32) -> ActionRecord {
        ActionRecord {
            establishment: establishment.to_string(),
            action: action.to_string(),
            document: document.to_string(),
            page,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_rows(vec![
            record("Liceo del Valle", "retroalimentación docente", "valle.pdf", 5),
            record("Escuela Los Robles", "retroalimentación docente", "robles.pdf", 3),
            record("Escuela Los Robles", "plan lector", "robles.pdf", 8),
            record("Colegio Mirador", "taller de asistencia", "mirador.pdf", 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_filter_by_actions_keeps_catalog_order() {
        let catalog = sample_catalog();
        let view = filter_by_actions(&catalog, &["retroalimentación docente".to_string()]);

        assert_eq!(view.len(), 2);
        assert_eq!(view.rows()[0].establishment, "Liceo del Valle");
        assert_eq!(view.rows()[1].establishment, "Escuela Los Robles");
    }

    #[test]
    fn test_schools_sorted_and_deduplicated() {
        let catalog = sample_catalog();
        let view = filter_by_actions(
            &catalog,
            &[
                "retroalimentación docente".to_string(),
                "plan lector".to_string(),
            ],
        );

        assert_eq!(
            view.schools(),
            vec![
                "Escuela Los Robles".to_string(),
                "Liceo del Valle".to_string(),
            ]
        );
    }

    #[test]
    fn test_retain_schools_restricts_rows() {
        let catalog = sample_catalog();
        let view = filter_by_actions(&catalog, &["retroalimentación docente".to_string()])
            .retain_schools(&["Escuela Los Robles".to_string()]);

        assert_eq!(view.len(), 1);
        assert_eq!(view.rows()[0].document, "robles.pdf");
    }

    #[test]
    fn test_chained_filters_equal_combined_predicate() {
        let catalog = sample_catalog();
        let labels = vec![
            "retroalimentación docente".to_string(),
            "taller de asistencia".to_string(),
        ];
        let schools = vec![
            "Colegio Mirador".to_string(),
            "Liceo del Valle".to_string(),
        ];

        let chained = filter_by_actions(&catalog, &labels).retain_schools(&schools);
        let combined: Vec<&ActionRecord> = catalog
            .rows()
            .iter()
            .filter(|r| labels.contains(&r.action) && schools.contains(&r.establishment))
            .collect();

        assert_eq!(chained.rows(), combined.as_slice());
    }

    #[test]
    fn test_preview_sorted_by_school_then_action() {
        let catalog = sample_catalog();
        let view = filter_by_actions(
            &catalog,
            &[
                "retroalimentación docente".to_string(),
                "plan lector".to_string(),
                "taller de asistencia".to_string(),
            ],
        );

        let preview = view.preview();
        let keys: Vec<(&str, &str)> = preview
            .iter()
            .map(|r| (r.establishment.as_str(), r.action.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_rows_for_school_preserves_catalog_order() {
        let catalog = sample_catalog();
        let view = filter_by_actions(
            &catalog,
            &[
                "retroalimentación docente".to_string(),
                "plan lector".to_string(),
            ],
        );

        let pages: Vec<u32> = view
            .rows_for_school("Escuela Los Robles")
            .map(|r| r.page)
            .collect();
        assert_eq!(pages, vec![3, 8]);
    }

    #[test]
    fn test_empty_selection_yields_empty_view() {
        let catalog = sample_catalog();
        let view = filter_by_actions(&catalog, &[]);
        assert!(view.is_empty());
        assert!(view.schools().is_empty());
    }
}
