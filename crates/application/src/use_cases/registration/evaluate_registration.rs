use mailgate_domain::{
    email::{extract_domain, is_valid_email},
    registration::{RegistrationDecision, RejectReason},
    DomainError,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::WhitelistRepository;

/// Registration-time decision point. Composes the email validator with the
/// allow-list store: one store read per attempt, never a write. Store faults
/// propagate as errors and are never folded into a rejection.
pub struct EvaluateRegistrationUseCase {
    repository: Arc<dyn WhitelistRepository>,
}

impl EvaluateRegistrationUseCase {
    pub fn new(repository: Arc<dyn WhitelistRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, email: &str) -> Result<RegistrationDecision, DomainError> {
        if email.trim().is_empty() {
            return Ok(RegistrationDecision::Rejected(RejectReason::EmailRequired));
        }

        if !is_valid_email(email) {
            debug!(email = %email, "Registration email failed syntax check");
            return Ok(RegistrationDecision::Rejected(RejectReason::InvalidEmail));
        }

        let domain = extract_domain(email)?;

        if self.repository.contains(&domain).await? {
            debug!(domain = %domain, "Registration domain is whitelisted");
            Ok(RegistrationDecision::Allowed)
        } else {
            debug!(domain = %domain, "Registration domain not in whitelist");
            Ok(RegistrationDecision::Rejected(
                RejectReason::DomainNotWhitelisted,
            ))
        }
    }
}
