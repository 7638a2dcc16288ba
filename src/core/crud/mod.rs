//! CRUD demonstration

pub mod demo;

pub use demo::{run_crud_demo, CrudReport, DEMO_NAME};
