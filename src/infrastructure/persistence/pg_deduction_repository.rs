//! PostgreSQL implementation of the deduction repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::DeductionSettings;
use crate::domain::repositories::{ConfigError, DeductionRepository};

impl From<sqlx::Error> for ConfigError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => ConfigError::NotFound,
            other => ConfigError::Unavailable(other.to_string()),
        }
    }
}

#[derive(sqlx::FromRow)]
struct AdminConfigRow {
    personal_deduction: Decimal,
    k_receipt_max: Decimal,
    updated_at: DateTime<Utc>,
}

impl From<AdminConfigRow> for DeductionSettings {
    fn from(row: AdminConfigRow) -> Self {
        DeductionSettings::new(row.personal_deduction, row.k_receipt_max, row.updated_at)
    }
}

/// PostgreSQL repository backed by the single-row `admin_config` table.
///
/// The row is seeded by migrations; updates never insert, so a missing row
/// surfaces as [`ConfigError::NotFound`] rather than being recreated.
pub struct PgDeductionRepository {
    pool: Arc<PgPool>,
}

impl PgDeductionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeductionRepository for PgDeductionRepository {
    async fn fetch_config(&self) -> Result<DeductionSettings, ConfigError> {
        let row = sqlx::query_as::<_, AdminConfigRow>(
            r#"
            SELECT personal_deduction, k_receipt_max, updated_at
            FROM admin_config
            WHERE id = 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(DeductionSettings::from)
            .ok_or(ConfigError::NotFound)
    }

    async fn update_personal_deduction(
        &self,
        amount: Decimal,
    ) -> Result<DeductionSettings, ConfigError> {
        let row = sqlx::query_as::<_, AdminConfigRow>(
            r#"
            UPDATE admin_config
            SET personal_deduction = $1, updated_at = NOW()
            WHERE id = 1
            RETURNING personal_deduction, k_receipt_max, updated_at
            "#,
        )
        .bind(amount)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(DeductionSettings::from)
            .ok_or(ConfigError::NotFound)
    }

    async fn update_k_receipt_max(
        &self,
        amount: Decimal,
    ) -> Result<DeductionSettings, ConfigError> {
        let row = sqlx::query_as::<_, AdminConfigRow>(
            r#"
            UPDATE admin_config
            SET k_receipt_max = $1, updated_at = NOW()
            WHERE id = 1
            RETURNING personal_deduction, k_receipt_max, updated_at
            "#,
        )
        .bind(amount)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(DeductionSettings::from)
            .ok_or(ConfigError::NotFound)
    }
}
