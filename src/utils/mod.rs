pub mod config;
pub mod file;
pub mod name_mapping;
