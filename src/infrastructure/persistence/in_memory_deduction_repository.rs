//! In-process deduction repository.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::DeductionSettings;
use crate::domain::repositories::{ConfigError, DeductionRepository};

/// A repository that keeps the configuration in memory.
///
/// Gives deterministic configuration without a database. An empty store
/// behaves like an unseeded `admin_config` table and reports
/// [`ConfigError::NotFound`].
///
/// # Use Cases
///
/// - Handler and service tests
/// - Local runs of the `admin calc` command without a database
pub struct InMemoryDeductionRepository {
    settings: RwLock<Option<DeductionSettings>>,
}

impl InMemoryDeductionRepository {
    /// Creates a store holding the given parameters.
    pub fn new(personal_deduction: Decimal, k_receipt_max: Decimal) -> Self {
        debug!("Using in-memory deduction configuration");
        Self {
            settings: RwLock::new(Some(DeductionSettings::new(
                personal_deduction,
                k_receipt_max,
                Utc::now(),
            ))),
        }
    }

    /// Creates a store with no configuration.
    pub fn empty() -> Self {
        Self {
            settings: RwLock::new(None),
        }
    }

    async fn modify(
        &self,
        apply: impl FnOnce(&mut DeductionSettings),
    ) -> Result<DeductionSettings, ConfigError> {
        let mut guard = self.settings.write().await;
        let settings = guard.as_mut().ok_or(ConfigError::NotFound)?;

        apply(settings);
        settings.updated_at = Utc::now();

        Ok(settings.clone())
    }
}

#[async_trait]
impl DeductionRepository for InMemoryDeductionRepository {
    async fn fetch_config(&self) -> Result<DeductionSettings, ConfigError> {
        self.settings
            .read()
            .await
            .clone()
            .ok_or(ConfigError::NotFound)
    }

    async fn update_personal_deduction(
        &self,
        amount: Decimal,
    ) -> Result<DeductionSettings, ConfigError> {
        self.modify(|s| s.config.personal_deduction = amount).await
    }

    async fn update_k_receipt_max(
        &self,
        amount: Decimal,
    ) -> Result<DeductionSettings, ConfigError> {
        self.modify(|s| s.config.k_receipt_max = amount).await
    }
}
