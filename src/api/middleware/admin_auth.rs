//! HTTP Basic authentication middleware for admin routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates admin requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(username:password)>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or not Basic
/// - Username or password does not match the configured admin
///
/// Adds `WWW-Authenticate: Basic realm="admin"` to 401 responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::admin_auth;
///
/// let admin = Router::new()
///     .route("/deductions", get(get_deductions_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    st.auth_service.authenticate(&username, password.as_deref())?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
