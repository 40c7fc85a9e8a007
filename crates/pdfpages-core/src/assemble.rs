//! Output document assembly
//!
//! Accumulates extracted pages into one output PDF.
//!
//! The algorithm:
//! 1. The first appended document becomes the base
//! 2. For each later document:
//!    a. Calculate an ID offset past the current maximum to avoid conflicts
//!    b. Import all objects with remapped IDs
//!    c. Record its page references in append order
//! 3. `finish` rebuilds the page tree, compresses, and serializes

use crate::error::PdfPagesError;
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Accumulates single-page documents into one output PDF.
///
/// Pages appear in the output exactly in append order. An assembler that
/// never received a page produces no artifact.
pub struct PageAssembler {
    dest: Option<Document>,
    page_refs: Vec<ObjectId>,
    max_id: u32,
}

impl PageAssembler {
    pub fn new() -> Self {
        Self {
            dest: None,
            page_refs: Vec::new(),
            max_id: 0,
        }
    }

    /// Number of pages appended so far
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Append every page of `source`, in `source` page order
    pub fn append(&mut self, source: Document) {
        match self.dest {
            None => {
                self.page_refs = page_references(&source);
                self.max_id = source.max_id;
                self.dest = Some(source);
            }
            Some(ref mut dest) => {
                let source_pages = page_references(&source);
                let source_max_id = source.max_id;
                let id_offset = self.max_id;

                // Remap all object IDs in the source document
                let mut remapped_objects = BTreeMap::new();
                for (old_id, object) in source.objects.into_iter() {
                    let new_id = (old_id.0 + id_offset, old_id.1);
                    remapped_objects.insert(new_id, remap_object_refs(object, id_offset));
                }

                for (id, object) in remapped_objects {
                    dest.objects.insert(id, object);
                }

                for old_page_ref in source_pages {
                    self.page_refs
                        .push((old_page_ref.0 + id_offset, old_page_ref.1));
                }

                self.max_id = (source_max_id + id_offset).max(self.max_id);
            }
        }
    }

    /// Serialize the accumulated output.
    ///
    /// Returns `Ok(None)` when no page was ever appended: in that case no
    /// artifact exists and only the caller's failure list is meaningful.
    pub fn finish(self) -> Result<Option<Vec<u8>>, PdfPagesError> {
        let Some(mut dest) = self.dest else {
            return Ok(None);
        };

        update_page_tree(&mut dest, self.page_refs)?;
        dest.max_id = self.max_id;
        dest.compress();

        let mut buffer = Vec::new();
        dest.save_to(&mut buffer).map_err(|e| {
            PdfPagesError::OperationError(format!("Failed to save output PDF: {}", e))
        })?;

        Ok(Some(buffer))
    }
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Page object references of a document, in page order
fn page_references(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// Recursively remap object references in an object
fn remap_object_refs(obj: Object, offset: u32) -> Object {
    match obj {
        Object::Reference(id) => Object::Reference((id.0 + offset, id.1)),
        Object::Array(arr) => Object::Array(
            arr.into_iter()
                .map(|o| remap_object_refs(o, offset))
                .collect(),
        ),
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = remap_object_refs(value.clone(), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = remap_object_refs(value.clone(), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}

/// Update the page tree in the destination document with new page references
fn update_page_tree(doc: &mut Document, page_refs: Vec<ObjectId>) -> Result<(), PdfPagesError> {
    let root_obj = doc
        .trailer
        .get(b"Root")
        .map_err(|_| PdfPagesError::OperationError("No Root in trailer".into()))?;

    let catalog_id = root_obj
        .as_reference()
        .map_err(|_| PdfPagesError::OperationError("Root is not a reference".into()))?;

    let catalog = doc
        .objects
        .get(&catalog_id)
        .ok_or_else(|| PdfPagesError::OperationError("Catalog not found".into()))?
        .as_dict()
        .map_err(|_| PdfPagesError::OperationError("Invalid catalog".into()))?;

    let pages_obj = catalog
        .get(b"Pages")
        .map_err(|_| PdfPagesError::OperationError("No Pages in catalog".into()))?;

    let pages_id = pages_obj
        .as_reference()
        .map_err(|_| PdfPagesError::OperationError("Pages is not a reference".into()))?;

    if let Some(Object::Dictionary(ref mut pages_dict)) = doc.objects.get_mut(&pages_id) {
        let kids = page_refs
            .iter()
            .map(|&id| Object::Reference(id))
            .collect::<Vec<_>>();
        pages_dict.set("Kids", Object::Array(kids));
        pages_dict.set("Count", Object::Integer(page_refs.len() as i64));
    } else {
        return Err(PdfPagesError::OperationError(
            "Invalid pages dictionary".into(),
        ));
    }

    Ok(())
}
