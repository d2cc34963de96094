//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and the
//! input formats the service accepts.
//!
//! # Modules
//!
//! - [`csv`] - Batch upload parsing
//! - [`persistence`] - Deduction configuration storage

pub mod csv;
pub mod persistence;
