//! Persistence layer for the journal backend.
//!
//! This crate contains:
//! - Database connection pool lifecycle (connect with retry, schema setup)
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
