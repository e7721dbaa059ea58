pub mod reconciliation;
pub mod summary;
