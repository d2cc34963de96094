//! Deduction configuration management service.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::entities::{DeductionSettings, check_configured_amount};
use crate::domain::repositories::DeductionRepository;
use crate::error::AppError;

/// Service for reading and updating the administrator-configured deductions.
///
/// Amounts must lie in `0..=100000`. Personal deductions below the 10,000
/// floor are stored as given; the floor is applied when tax is calculated.
pub struct DeductionService<R: DeductionRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: DeductionRepository + ?Sized> DeductionService<R> {
    /// Creates a new deduction service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing has been configured.
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    pub async fn get_settings(&self) -> Result<DeductionSettings, AppError> {
        Ok(self.repository.fetch_config().await?)
    }

    /// Sets the personal deduction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the amount is out of range.
    /// Store errors as in [`Self::get_settings`].
    pub async fn update_personal_deduction(
        &self,
        amount: Decimal,
    ) -> Result<DeductionSettings, AppError> {
        check_configured_amount(amount)?;

        let settings = self.repository.update_personal_deduction(amount).await?;
        tracing::info!("Personal deduction set to {}", amount);

        Ok(settings)
    }

    /// Sets the k-receipt maximum.
    ///
    /// # Errors
    ///
    /// See [`Self::update_personal_deduction`].
    pub async fn update_k_receipt_max(
        &self,
        amount: Decimal,
    ) -> Result<DeductionSettings, AppError> {
        check_configured_amount(amount)?;

        let settings = self.repository.update_k_receipt_max(amount).await?;
        tracing::info!("K-receipt maximum set to {}", amount);

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{ConfigError, MockDeductionRepository};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_update_personal_deduction_success() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo
            .expect_update_personal_deduction()
            .withf(|amount| *amount == dec!(70000))
            .times(1)
            .returning(|amount| {
                Ok(DeductionSettings::new(amount, dec!(50000), Utc::now()))
            });

        let service = DeductionService::new(Arc::new(mock_repo));

        let settings = service.update_personal_deduction(dec!(70000)).await.unwrap();

        assert_eq!(settings.config.personal_deduction, dec!(70000));
    }

    #[tokio::test]
    async fn test_personal_deduction_below_floor_is_stored_as_given() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo
            .expect_update_personal_deduction()
            .times(1)
            .returning(|amount| {
                Ok(DeductionSettings::new(amount, dec!(50000), Utc::now()))
            });

        let service = DeductionService::new(Arc::new(mock_repo));

        let settings = service.update_personal_deduction(dec!(5000)).await.unwrap();

        assert_eq!(settings.config.personal_deduction, dec!(5000));
        assert_eq!(settings.config.effective_personal_deduction(), dec!(10000));
    }

    #[tokio::test]
    async fn test_out_of_range_amount_never_reaches_store() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo.expect_update_personal_deduction().times(0);
        mock_repo.expect_update_k_receipt_max().times(0);

        let service = DeductionService::new(Arc::new(mock_repo));

        let too_large = service.update_personal_deduction(dec!(100001)).await;
        let negative = service.update_k_receipt_max(dec!(-1)).await;

        match too_large {
            Err(AppError::Validation { message, .. }) => {
                assert_eq!(message, "amount cannot be greater than 100000");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        match negative {
            Err(AppError::Validation { message, .. }) => {
                assert_eq!(message, "amount cannot be negative");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_k_receipt_max_success() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo
            .expect_update_k_receipt_max()
            .times(1)
            .returning(|amount| {
                Ok(DeductionSettings::new(dec!(60000), amount, Utc::now()))
            });

        let service = DeductionService::new(Arc::new(mock_repo));

        let settings = service.update_k_receipt_max(dec!(100000)).await.unwrap();

        assert_eq!(settings.config.k_receipt_max, dec!(100000));
    }

    #[tokio::test]
    async fn test_get_settings_missing() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo
            .expect_fetch_config()
            .times(1)
            .returning(|| Err(ConfigError::NotFound));

        let service = DeductionService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.get_settings().await,
            Err(AppError::NotFound { .. })
        ));
    }
}
