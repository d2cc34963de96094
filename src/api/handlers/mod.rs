//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod calculations;
pub mod deductions;
pub mod health;
pub mod upload_csv;

pub use calculations::calculate_handler;
pub use deductions::{
    get_deductions_handler, set_k_receipt_handler, set_personal_deduction_handler,
};
pub use health::health_handler;
pub use upload_csv::upload_csv_handler;
