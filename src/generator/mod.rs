pub mod enum_spec;
pub mod generator;
pub mod templates;
