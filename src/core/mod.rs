//! Core business logic

pub mod clean;
pub mod crud;
pub mod migrate;
pub mod verification;
