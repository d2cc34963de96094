//! Repository trait for the deduction configuration store.

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::entities::DeductionSettings;

/// Failure to read or write the configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The store holds no configuration row at all.
    #[error("deduction configuration not found")]
    NotFound,

    /// The store could not be reached or the query failed.
    #[error("deduction configuration unavailable: {0}")]
    Unavailable(String),
}

/// Repository interface for deduction parameters.
///
/// Calculations read the configuration fresh on every request; nothing is
/// cached between calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDeductionRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryDeductionRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeductionRepository: Send + Sync {
    /// Reads the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no configuration has been stored.
    /// Returns [`ConfigError::Unavailable`] if the store cannot be queried.
    async fn fetch_config(&self) -> Result<DeductionSettings, ConfigError>;

    /// Stores a new personal deduction and returns the updated configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_config`].
    async fn update_personal_deduction(
        &self,
        amount: Decimal,
    ) -> Result<DeductionSettings, ConfigError>;

    /// Stores a new k-receipt maximum and returns the updated configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_config`].
    async fn update_k_receipt_max(&self, amount: Decimal)
    -> Result<DeductionSettings, ConfigError>;
}
