//! Domain layer containing business entities and the tax engine.
//!
//! This module holds everything that defines *what* a tax calculation is,
//! independent of HTTP, SQL or CSV concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core value objects
//! - [`tax`] - Validation, allowance aggregation, bracket ladder, settlement
//! - [`repositories`] - Configuration store trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod tax;
