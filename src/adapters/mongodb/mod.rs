//! MongoDB store adapter

pub mod client;

pub use client::{MongoStore, STORE_HOST, STORE_PORT};
