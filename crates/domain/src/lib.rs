//! Domain layer for the journal backend.
//!
//! This crate contains:
//! - Domain models (Entry)
//! - Request payloads with declarative validation

pub mod models;
