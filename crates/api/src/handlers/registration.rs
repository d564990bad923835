use crate::{
    dto::{RegistrationCheckRequest, RegistrationCheckResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{extract::State, Json};
use mailgate_domain::registration::RegistrationDecision;
use tracing::{debug, instrument};

/// Registration hook: the registration flow calls this before creating an
/// account and must abort when `allowed` comes back false.
#[instrument(skip(state, req), name = "api_check_registration")]
pub async fn check_registration(
    State(state): State<AppState>,
    Json(req): Json<RegistrationCheckRequest>,
) -> Result<Json<RegistrationCheckResponse>, ApiError> {
    let decision = state.evaluate_registration.execute(&req.email).await?;

    let response = match decision {
        RegistrationDecision::Allowed => RegistrationCheckResponse {
            allowed: true,
            reason: None,
        },
        RegistrationDecision::Rejected(reason) => {
            debug!(reason = %reason, "Registration attempt rejected");
            RegistrationCheckResponse {
                allowed: false,
                reason: Some(reason.as_str().to_string()),
            }
        }
    };

    Ok(Json(response))
}
