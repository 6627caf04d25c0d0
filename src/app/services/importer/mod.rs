//! Transactional importers for timesheet and product files
//!
//! The importers read a file, run the matching parser and write the result
//! through a store inside one transaction. A dry run performs every step and
//! then rolls back.
//!
//! ## Architecture
//!
//! - [`timesheet_importer`] - Timesheet orchestration and day-scope replacement
//! - [`product_importer`] - Product orchestration and record-to-product conversion
//! - [`store`] - Store traits the importers write through
//! - [`memory_store`] - Reference store with snapshot transactions and JSON persistence
//! - [`summary`] - Import results

pub mod memory_store;
pub mod product_importer;
pub mod store;
pub mod summary;
pub mod timesheet_importer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use memory_store::{MemoryStore, StoreSnapshot, StoredTimeEntry};
pub use product_importer::{ProductConversionError, ProductImporter, convert_to_product};
pub use store::{ProductStore, TimesheetStore, TransactionalStore};
pub use summary::{ImportKind, ImportSummary};
pub use timesheet_importer::TimesheetImporter;
