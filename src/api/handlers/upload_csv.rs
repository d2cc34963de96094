//! Handler for batch calculation from an uploaded CSV file.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
};
use serde_json::json;

use crate::api::dto::upload::UploadResponse;
use crate::error::AppError;
use crate::infrastructure::csv::parse_tax_records;
use crate::state::AppState;

/// Multipart field names accepted for the uploaded file.
const FILE_FIELDS: [&str; 2] = ["taxFile", "file"];

/// Calculates tax for every row of an uploaded CSV file.
///
/// # Endpoint
///
/// `POST /tax/calculations/upload-csv` (multipart, field `taxFile`)
///
/// # File Format
///
/// ```text
/// totalIncome,wht,donation
/// 500000,0,0
/// 600000,40000,20000
/// ```
///
/// # Response
///
/// ```json
/// {
///   "taxes": [
///     { "totalIncome": 500000.0, "tax": 29000.0 },
///     { "totalIncome": 600000.0, "taxRefund": 2000.0 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// The whole upload fails with 400 on a missing file, a malformed file or
/// the first invalid row. Configuration errors as for a single calculation.
pub async fn upload_csv_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        AppError::bad_request(
            "Invalid multipart request",
            json!({ "reason": e.body_text() }),
        )
    })?;

    let contents = read_tax_file(&mut multipart).await?;
    let records = parse_tax_records(&contents[..])?;

    tracing::debug!("Parsed {} records from uploaded file", records.len());

    let results = state.tax_service.calculate_batch(records).await?;

    Ok(Json(results.into()))
}

/// Returns the contents of the first file field.
async fn read_tax_file(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name().is_some_and(|name| FILE_FIELDS.contains(&name)) {
            return field.bytes().await.map_err(multipart_error);
        }
    }

    Err(AppError::bad_request(
        "Missing file",
        json!({ "field": FILE_FIELDS[0] }),
    ))
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::bad_request(
        "Failed to read uploaded file",
        json!({ "reason": e.body_text() }),
    )
}
