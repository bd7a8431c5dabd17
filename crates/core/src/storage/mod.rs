pub mod registry_file;
pub mod store;
