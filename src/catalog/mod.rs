pub mod error;
pub mod region_catalog;
