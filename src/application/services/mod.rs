//! Business logic services for the application layer.

pub mod auth_service;
pub mod deduction_service;
pub mod tax_service;

pub use auth_service::AuthService;
pub use deduction_service::DeductionService;
pub use tax_service::TaxService;
