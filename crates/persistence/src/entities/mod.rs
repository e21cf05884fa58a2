//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod entry;

pub use entry::EntryEntity;
