use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// Stand-in for the external system-edit privilege check: every whitelist
/// management request, the list view included, must present the configured
/// admin key.
pub async fn require_admin_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match state.admin_api_key.as_deref() {
        None => Ok(next.run(request).await),
        Some(expected) => verify_request(request, next, expected).await,
    }
}

async fn verify_request(
    request: Request,
    next: Next,
    expected: &str,
) -> Result<Response, StatusCode> {
    let provided = extract_admin_key(&request).ok_or(StatusCode::UNAUTHORIZED)?;
    if !timing_safe_eq(provided.as_bytes(), expected.as_bytes()) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

fn extract_admin_key(request: &Request) -> Option<String> {
    request
        .headers()
        .get("X-Admin-Key")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
