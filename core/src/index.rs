mod field_info;
mod field_infos;
mod index_options;
mod memory_stored_fields;
mod stored_field_visitor;
mod stored_fields;

pub use {
    field_info::*, field_infos::*, index_options::*, memory_stored_fields::*, stored_field_visitor::*,
    stored_fields::*,
};
