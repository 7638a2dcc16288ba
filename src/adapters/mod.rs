//! External system integrations for carelift.
//!
//! - [`csv`] - Source file ingestion (the Record Source)
//! - [`store`] - Store abstraction layer (trait-based)
//! - [`mongodb`] - MongoDB implementation of the store trait
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the core pipeline
//! can be exercised against an in-memory store in tests. The store layer is
//! the Store Handle of the design: created once, passed by reference, never
//! a process-wide singleton.

pub mod csv;
pub mod mongodb;
pub mod store;
