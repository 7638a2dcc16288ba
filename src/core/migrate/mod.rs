//! Migration pipeline

pub mod coordinator;
pub mod loader;
pub mod summary;

pub use coordinator::MigrationCoordinator;
pub use loader::load;
pub use summary::MigrationSummary;
