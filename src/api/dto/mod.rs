//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with camelCase
//! field names, and validator for admin input validation.

pub mod calculation;
pub mod deductions;
pub mod health;
pub mod upload;
