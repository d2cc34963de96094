//! Application layer services.
//!
//! This layer orchestrates domain operations: it fetches configuration from
//! repositories, runs the tax engine, and enforces administrative rules.
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::tax_service::TaxService`] - Single and batch tax calculation
//! - [`services::deduction_service::DeductionService`] - Deduction configuration management
//! - [`services::auth_service::AuthService`] - Admin credential checks

pub mod services;
