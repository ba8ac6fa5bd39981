#[allow(clippy::module_inception)]
mod document;
mod document_stored_field_visitor;
mod field_collector;
mod field_filter;
mod field_type;
mod multi_document_stored_field_visitor;
mod stored_field;
mod stored_value;

pub use {
    document::*, document_stored_field_visitor::*, field_collector::*, field_filter::*, field_type::*,
    multi_document_stored_field_visitor::*, stored_field::*, stored_value::*,
};
