//! Store abstraction layer

pub mod traits;

pub use traits::StoreClient;
