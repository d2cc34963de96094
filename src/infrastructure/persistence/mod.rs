//! Deduction repository implementations.
//!
//! # Repositories
//!
//! - [`PgDeductionRepository`] - PostgreSQL `admin_config` table via SQLx
//! - [`InMemoryDeductionRepository`] - In-process store for tests and offline use

pub mod in_memory_deduction_repository;
pub mod pg_deduction_repository;

pub use in_memory_deduction_repository::InMemoryDeductionRepository;
pub use pg_deduction_repository::PgDeductionRepository;
