//! CSV source file ingestion

pub mod reader;

pub use reader::read_records;
