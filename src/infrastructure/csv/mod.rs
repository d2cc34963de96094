//! CSV parsing for batch tax uploads.
//!
//! ## CSV Format
//!
//! A header row is required. Columns are matched by name, so their order does
//! not matter. Header names are case-sensitive.
//!
//! | Column        | Type    | Notes |
//! |---------------|---------|-------|
//! | `totalIncome` | decimal | e.g. `500000.00` |
//! | `wht`         | decimal | withholding tax |
//! | `donation`    | decimal | single donation allowance |
//!
//! Surrounding whitespace in cells is ignored.
//!
//! ### Example
//!
//! ```csv
//! totalIncome,wht,donation
//! 500000,0,0
//! 600000,40000,20000
//! ```

use std::io::Read;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::entities::TaxRecord;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "totalIncome")]
    total_income: String,
    wht: String,
    donation: String,
}

/// Errors that can occur while reading a batch upload.
#[derive(Debug, thiserror::Error)]
pub enum CsvRecordError {
    /// Bad structure: missing column, wrong field count, invalid UTF-8.
    #[error("Error reading CSV: {0}")]
    Csv(#[from] ::csv::Error),

    /// A cell is not a decimal number. `row` is 1-based, header excluded.
    #[error("invalid {column} format")]
    InvalidNumber {
        column: &'static str,
        row: usize,
        value: String,
    },

    /// The file has a header but no records.
    #[error("CSV contains no tax records")]
    Empty,
}

fn parse_cell(value: &str, column: &'static str, row: usize) -> Result<Decimal, CsvRecordError> {
    Decimal::from_str(value).map_err(|_| CsvRecordError::InvalidNumber {
        column,
        row,
        value: value.to_string(),
    })
}

fn convert_row(row: CsvRow, row_number: usize) -> Result<TaxRecord, CsvRecordError> {
    Ok(TaxRecord {
        total_income: parse_cell(&row.total_income, "totalIncome", row_number)?,
        wht: parse_cell(&row.wht, "wht", row_number)?,
        donation: parse_cell(&row.donation, "donation", row_number)?,
    })
}

/// Reads every record from a CSV source.
///
/// # Errors
///
/// Fails on the first malformed row; see [`CsvRecordError`].
pub fn parse_tax_records<R: Read>(reader: R) -> Result<Vec<TaxRecord>, CsvRecordError> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, row)| convert_row(row?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(CsvRecordError::Empty);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parses_records_in_order() {
        let data = "totalIncome,wht,donation\n500000,0,0\n600000,40000,20000\n750000,50000,15000";

        let records = parse_tax_records(data.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                TaxRecord {
                    total_income: dec!(500000),
                    wht: dec!(0),
                    donation: dec!(0)
                },
                TaxRecord {
                    total_income: dec!(600000),
                    wht: dec!(40000),
                    donation: dec!(20000)
                },
                TaxRecord {
                    total_income: dec!(750000),
                    wht: dec!(50000),
                    donation: dec!(15000)
                },
            ]
        );
    }

    #[test]
    fn test_columns_matched_by_name_and_trimmed() {
        let data = "donation, wht ,totalIncome\n 100.50 , 0 , 250000.75 \n";

        let records = parse_tax_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_income, dec!(250000.75));
        assert_eq!(records[0].donation, dec!(100.50));
    }

    #[test]
    fn test_invalid_number_reports_column_and_row() {
        let data = "totalIncome,wht,donation\n500000,0,0\n600000,abc,0\n";

        let err = parse_tax_records(data.as_bytes()).unwrap_err();

        match &err {
            CsvRecordError::InvalidNumber { column, row, value } => {
                assert_eq!(*column, "wht");
                assert_eq!(*row, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
        assert_eq!(err.to_string(), "invalid wht format");
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let data = "totalIncome,wht\n500000,0\n";

        assert!(matches!(
            parse_tax_records(data.as_bytes()),
            Err(CsvRecordError::Csv(_))
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        let data = "totalIncome,wht,donation\n";

        assert!(matches!(
            parse_tax_records(data.as_bytes()),
            Err(CsvRecordError::Empty)
        ));
    }
}
