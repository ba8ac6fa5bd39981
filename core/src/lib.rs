//! Lucene stored field retrieval.
//!
//! A stored fields reader streams the values of a document one field at a time to a
//! [index::StoredFieldVisitor], asking it first whether each field is wanted. The visitors in
//! [document] turn that stream back into [document::Document]s, either one at a time or as a batch
//! via [document::MultiDocumentStoredFieldVisitor].

#![warn(clippy::all)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

mod error;

/// Stored documents and the visitors that build them.
pub mod document;

/// Lucene index (database) types.
pub mod index;

/// Utility types.
pub mod util;

pub use error::*;
