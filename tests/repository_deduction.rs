use rust_decimal_macros::dec;
use sqlx::PgPool;
use std::sync::Arc;
use tax_service::domain::repositories::{ConfigError, DeductionRepository};
use tax_service::infrastructure::persistence::PgDeductionRepository;

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_fetch_seeded_config(pool: PgPool) {
    let repo = PgDeductionRepository::new(Arc::new(pool));

    let settings = repo.fetch_config().await.unwrap();

    assert_eq!(settings.config.personal_deduction, dec!(60000));
    assert_eq!(settings.config.k_receipt_max, dec!(50000));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_update_personal_deduction(pool: PgPool) {
    let repo = PgDeductionRepository::new(Arc::new(pool));
    let before = repo.fetch_config().await.unwrap();

    let updated = repo.update_personal_deduction(dec!(70000)).await.unwrap();

    assert_eq!(updated.config.personal_deduction, dec!(70000));
    assert_eq!(updated.config.k_receipt_max, dec!(50000));
    assert!(updated.updated_at >= before.updated_at);

    let fetched = repo.fetch_config().await.unwrap();
    assert_eq!(fetched.config.personal_deduction, dec!(70000));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_update_k_receipt_max(pool: PgPool) {
    let repo = PgDeductionRepository::new(Arc::new(pool));

    let updated = repo.update_k_receipt_max(dec!(80000.50)).await.unwrap();

    assert_eq!(updated.config.k_receipt_max, dec!(80000.50));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_missing_row_is_not_found(pool: PgPool) {
    sqlx::query("DELETE FROM admin_config")
        .execute(&pool)
        .await
        .unwrap();
    let repo = PgDeductionRepository::new(Arc::new(pool));

    assert_eq!(
        repo.fetch_config().await.unwrap_err(),
        ConfigError::NotFound
    );
    assert_eq!(
        repo.update_personal_deduction(dec!(1000)).await.unwrap_err(),
        ConfigError::NotFound
    );
}
