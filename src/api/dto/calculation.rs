//! DTOs for the tax calculation endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{RawAllowance, TaxLevel, TaxRequest, TaxResult};

/// Request body for `POST /tax/calculations`.
///
/// Missing fields default to zero or empty so that business validation, not
/// deserialization, reports them. Unknown fields are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CalculationRequest {
    pub total_income: Decimal,
    pub wht: Decimal,
    pub allowances: Vec<AllowanceItem>,
}

/// One allowance entry of a calculation request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AllowanceItem {
    pub allowance_type: String,
    pub amount: Decimal,
}

impl From<CalculationRequest> for TaxRequest {
    fn from(req: CalculationRequest) -> Self {
        TaxRequest {
            total_income: req.total_income,
            wht: req.wht,
            allowances: req
                .allowances
                .into_iter()
                .map(|item| RawAllowance {
                    allowance_type: item.allowance_type,
                    amount: item.amount,
                })
                .collect(),
        }
    }
}

/// Response body for `POST /tax/calculations`.
///
/// `taxRefund` is omitted unless withholding exceeded the computed tax.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub tax: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_refund: Option<Decimal>,

    pub tax_levels: Vec<TaxLevelItem>,
}

/// Tax contributed by one bracket.
#[derive(Debug, Serialize)]
pub struct TaxLevelItem {
    pub level: &'static str,
    pub tax: Decimal,
}

impl From<TaxLevel> for TaxLevelItem {
    fn from(level: TaxLevel) -> Self {
        Self {
            level: level.label,
            tax: level.tax,
        }
    }
}

impl From<TaxResult> for CalculationResponse {
    fn from(result: TaxResult) -> Self {
        Self {
            tax: result.tax(),
            tax_refund: result.refund(),
            tax_levels: result.levels.into_iter().map(TaxLevelItem::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Settlement;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let req: CalculationRequest = serde_json::from_value(json!({})).unwrap();

        assert!(req.total_income.is_zero());
        assert!(req.wht.is_zero());
        assert!(req.allowances.is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = serde_json::from_value::<CalculationRequest>(json!({
            "totalIncome": 500000.0,
            "salary": 1
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_response_omits_absent_refund() {
        let response = CalculationResponse::from(TaxResult {
            gross_tax: dec!(29000),
            settlement: Settlement {
                tax: dec!(29000),
                refund: None,
            },
            levels: vec![TaxLevel {
                label: "0-150,000",
                tax: dec!(0),
            }],
        });

        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("taxRefund").is_none());
        assert_eq!(value["taxLevels"][0]["level"], "0-150,000");
        assert_eq!(value["tax"].as_f64(), Some(29000.0));
    }
}
