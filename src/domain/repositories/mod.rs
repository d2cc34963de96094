//! Repository trait definitions for the domain layer.
//!
//! The configuration store is the only external collaborator the tax engine
//! needs. Its contract is defined here and implemented in
//! `crate::infrastructure::persistence`.
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod deduction_repository;

pub use deduction_repository::{ConfigError, DeductionRepository};

#[cfg(test)]
pub use deduction_repository::MockDeductionRepository;
