pub mod error;
pub mod extractors;
pub mod field_change;
pub mod field_change_builder;
pub mod projects;
pub mod work_items;
