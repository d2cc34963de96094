//! DTOs for the CSV upload endpoint.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::BatchTaxResult;

/// Response body for `POST /tax/calculations/upload-csv`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub taxes: Vec<TaxUploadItem>,
}

/// Outcome of one uploaded record.
///
/// Untagged, so a record renders either `{totalIncome, tax}` or
/// `{totalIncome, taxRefund}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TaxUploadItem {
    #[serde(rename_all = "camelCase")]
    Refund {
        total_income: Decimal,
        tax_refund: Decimal,
    },
    #[serde(rename_all = "camelCase")]
    Payable { total_income: Decimal, tax: Decimal },
}

impl From<BatchTaxResult> for TaxUploadItem {
    fn from(result: BatchTaxResult) -> Self {
        match result.settlement.refund {
            Some(tax_refund) => TaxUploadItem::Refund {
                total_income: result.total_income,
                tax_refund,
            },
            None => TaxUploadItem::Payable {
                total_income: result.total_income,
                tax: result.settlement.tax,
            },
        }
    }
}

impl From<Vec<BatchTaxResult>> for UploadResponse {
    fn from(results: Vec<BatchTaxResult>) -> Self {
        Self {
            taxes: results.into_iter().map(TaxUploadItem::from).collect(),
        }
    }
}
