//! Tax calculation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{BatchTaxResult, DeductionConfig, TaxRecord, TaxRequest, TaxResult};
use crate::domain::repositories::DeductionRepository;
use crate::domain::tax;
use crate::error::AppError;

/// Service that runs the tax engine against the current deduction configuration.
///
/// The configuration is fetched fresh for every call; a failed fetch aborts
/// the calculation without a partial result.
pub struct TaxService<R: DeductionRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: DeductionRepository + ?Sized> TaxService<R> {
    /// Creates a new tax service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Calculates tax for a single request.
    ///
    /// The request is validated before the configuration store is contacted,
    /// so malformed input never costs a database round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the request breaks a validation rule.
    /// Returns [`AppError::NotFound`] if no deduction configuration exists.
    /// Returns [`AppError::Internal`] if the configuration cannot be fetched.
    pub async fn calculate(&self, request: TaxRequest) -> Result<TaxResult, AppError> {
        let validated = tax::validate(&request)?;
        let config = self.current_config().await?;

        let result = tax::calculate(&validated, &config);
        tracing::debug!(
            total_income = %validated.total_income(),
            gross_tax = %result.gross_tax,
            tax = %result.tax(),
            "Calculated tax"
        );

        Ok(result)
    }

    /// Calculates tax for every record of a batch upload.
    ///
    /// Each record is treated as a request carrying a single donation
    /// allowance. All records are validated before the configuration is
    /// fetched, and the configuration is fetched once for the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the 1-based row of the first
    /// invalid record; no results are returned in that case.
    /// Configuration errors as in [`Self::calculate`].
    pub async fn calculate_batch(
        &self,
        records: Vec<TaxRecord>,
    ) -> Result<Vec<BatchTaxResult>, AppError> {
        let validated = records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                tax::validate(&TaxRequest::from(*record)).map_err(|e| {
                    AppError::bad_request(e.to_string(), json!({ "row": idx + 1 }))
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let config = self.current_config().await?;

        let results: Vec<BatchTaxResult> = records
            .iter()
            .zip(&validated)
            .map(|(record, request)| BatchTaxResult {
                total_income: record.total_income,
                settlement: tax::calculate(request, &config).settlement,
            })
            .collect();

        tracing::info!("Calculated tax for {} batch records", results.len());

        Ok(results)
    }

    async fn current_config(&self) -> Result<DeductionConfig, AppError> {
        let settings = self.repository.fetch_config().await?;
        Ok(settings.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DeductionSettings, RawAllowance};
    use crate::domain::repositories::{ConfigError, MockDeductionRepository};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn settings(personal: Decimal, k_receipt: Decimal) -> DeductionSettings {
        DeductionSettings::new(personal, k_receipt, Utc::now())
    }

    fn repo_returning(personal: Decimal, k_receipt: Decimal) -> MockDeductionRepository {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo
            .expect_fetch_config()
            .times(1)
            .returning(move || Ok(settings(personal, k_receipt)));
        mock_repo
    }

    fn request(total_income: Decimal, wht: Decimal, allowances: &[(&str, Decimal)]) -> TaxRequest {
        TaxRequest {
            total_income,
            wht,
            allowances: allowances
                .iter()
                .map(|(tag, amount)| RawAllowance {
                    allowance_type: tag.to_string(),
                    amount: *amount,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_calculate_refund() {
        let service = TaxService::new(Arc::new(repo_returning(dec!(60000), dec!(50000))));

        let result = service
            .calculate(request(dec!(500000), dec!(60000), &[("donation", dec!(0))]))
            .await
            .unwrap();

        assert_eq!(result.tax(), dec!(0));
        assert_eq!(result.refund(), Some(dec!(31000)));
        assert_eq!(result.levels.len(), 5);
    }

    #[tokio::test]
    async fn test_calculate_payable() {
        let service = TaxService::new(Arc::new(repo_returning(dec!(60000), dec!(50000))));

        let result = service
            .calculate(request(dec!(800000), dec!(60000), &[]))
            .await
            .unwrap();

        assert_eq!(result.tax(), dec!(11000));
        assert_eq!(result.refund(), None);
    }

    #[tokio::test]
    async fn test_calculate_uses_configured_k_receipt_cap() {
        let service = TaxService::new(Arc::new(repo_returning(dec!(60000), dec!(20000))));

        let result = service
            .calculate(request(
                dec!(500000),
                dec!(0),
                &[("k-receipt", dec!(50000))],
            ))
            .await
            .unwrap();

        // 500000 - 60000 - 20000 = 420000 -> 27000
        assert_eq!(result.tax(), dec!(27000));
    }

    #[tokio::test]
    async fn test_calculate_floors_low_personal_deduction() {
        let service = TaxService::new(Arc::new(repo_returning(dec!(5000), dec!(50000))));

        let result = service
            .calculate(request(dec!(500000), dec!(0), &[]))
            .await
            .unwrap();

        // 500000 - 10000 = 490000 -> 34000
        assert_eq!(result.tax(), dec!(34000));
    }

    #[tokio::test]
    async fn test_invalid_request_skips_config_fetch() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo.expect_fetch_config().times(0);

        let service = TaxService::new(Arc::new(mock_repo));

        let result = service
            .calculate(request(dec!(500000), dec!(-100), &[]))
            .await;

        match result {
            Err(AppError::Validation { message, .. }) => {
                assert_eq!(message, "withholding cannot be negative");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_configuration_is_not_found() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo
            .expect_fetch_config()
            .times(1)
            .returning(|| Err(ConfigError::NotFound));

        let service = TaxService::new(Arc::new(mock_repo));

        let result = service.calculate(request(dec!(500000), dec!(0), &[])).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_unavailable_configuration_is_internal() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo
            .expect_fetch_config()
            .times(1)
            .returning(|| {
                Err(ConfigError::Unavailable("connection refused".to_string()))
            });

        let service = TaxService::new(Arc::new(mock_repo));

        let result = service.calculate(request(dec!(500000), dec!(0), &[])).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_batch_fetches_config_once() {
        let service = TaxService::new(Arc::new(repo_returning(dec!(60000), dec!(50000))));
        let records = vec![
            TaxRecord {
                total_income: dec!(500000),
                wht: dec!(0),
                donation: dec!(0),
            },
            TaxRecord {
                total_income: dec!(600000),
                wht: dec!(40000),
                donation: dec!(20000),
            },
            TaxRecord {
                total_income: dec!(750000),
                wht: dec!(50000),
                donation: dec!(15000),
            },
        ];

        let results = service.calculate_batch(records).await.unwrap();

        let settlements: Vec<_> = results
            .iter()
            .map(|r| (r.total_income, r.settlement.tax, r.settlement.refund))
            .collect();
        assert_eq!(
            settlements,
            vec![
                (dec!(500000), dec!(29000), None),
                (dec!(600000), dec!(0), Some(dec!(2000))),
                (dec!(750000), dec!(11250), None),
            ]
        );
    }

    #[tokio::test]
    async fn test_batch_reports_row_of_invalid_record() {
        let mut mock_repo = MockDeductionRepository::new();
        mock_repo.expect_fetch_config().times(0);

        let service = TaxService::new(Arc::new(mock_repo));
        let records = vec![
            TaxRecord {
                total_income: dec!(500000),
                wht: dec!(0),
                donation: dec!(0),
            },
            TaxRecord {
                total_income: dec!(100000),
                wht: dec!(200000),
                donation: dec!(0),
            },
        ];

        match service.calculate_batch(records).await {
            Err(AppError::Validation { message, details }) => {
                assert_eq!(message, "withholding cannot exceed total income");
                assert_eq!(details["row"], 2);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
