//! PDF codec boundary
//!
//! The orchestrator in [`crate::pdf::merge`] is written against the
//! [`PdfCodec`] trait so it can be tested with a stub codec. [`LopdfCodec`]
//! is the real implementation, backed by lopdf.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::Result;

/// Parse-and-assemble capability for one document format.
///
/// `parse` decodes one input into a document, `assemble` concatenates the
/// pages of several documents into one serialized output.
pub trait PdfCodec {
    /// Parsed in-memory document
    type Document;

    /// Decode a byte buffer into a document
    fn parse(&self, bytes: &[u8]) -> Result<Self::Document>;

    /// Number of pages in a parsed document
    fn page_count(&self, document: &Self::Document) -> usize;

    /// Concatenate the pages of all documents, in the order given, into one
    /// serialized document
    fn assemble(&self, documents: Vec<Self::Document>) -> Result<Vec<u8>>;
}

/// PDF codec backed by lopdf
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfCodec;

impl PdfCodec for LopdfCodec {
    type Document = Document;

    fn parse(&self, bytes: &[u8]) -> Result<Document> {
        Ok(Document::load_mem(bytes)?)
    }

    fn page_count(&self, document: &Document) -> usize {
        document.get_pages().len()
    }

    /// Merge documents by collecting every object into one document
    ///
    /// Based on the lopdf merge example:
    /// https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
    fn assemble(&self, documents: Vec<Document>) -> Result<Vec<u8>> {
        // Define a starting max_id for the merged document
        let mut max_id = 1;
        let mut page_ids: Vec<ObjectId> = Vec::new();
        let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

        for mut doc in documents {
            // Renumber objects in this document to avoid conflicts
            doc.renumber_objects_with(max_id);
            max_id = doc.max_id + 1;

            // Collect page IDs from this document, preserving page order
            let pages = doc.get_pages();
            page_ids.extend(pages.into_iter().map(|(_, id)| id));

            objects.extend(doc.objects);
        }

        let mut merged_doc = Document::with_version("1.5");

        // Add all collected objects FIRST
        merged_doc.objects.extend(objects);

        // CRITICAL: update max_id to reflect the highest object ID we just
        // added, otherwise new_object_id() collides with existing objects
        merged_doc.max_id = max_id - 1;

        // Fresh catalog and pages tree with IDs above any source object
        let pages_id = merged_doc.new_object_id();

        let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

        let mut pages_object = Dictionary::new();
        pages_object.set("Type", Object::Name(b"Pages".to_vec()));
        pages_object.set("Count", Object::Integer(page_ids.len() as i64));
        pages_object.set("Kids", Object::Array(kids));

        let catalog_id = merged_doc.new_object_id();
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));

        merged_doc.objects.insert(catalog_id, Object::Dictionary(catalog));
        merged_doc.objects.insert(pages_id, Object::Dictionary(pages_object));

        merged_doc.trailer.set("Root", Object::Reference(catalog_id));

        // Reparent every page onto the new pages node
        for &page_id in &page_ids {
            if let Ok(Object::Dictionary(ref mut dict)) = merged_doc.get_object_mut(page_id) {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }

        merged_doc.compress();

        let mut out = Vec::new();
        merged_doc.save_to(&mut out)?;
        Ok(out)
    }
}
