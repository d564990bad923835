use std::fmt;

/// Why a registration attempt was turned away. Rendered to the end user as
/// the registration-blocking reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmailRequired,
    InvalidEmail,
    DomainNotWhitelisted,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::EmailRequired => "email required",
            RejectReason::InvalidEmail => "invalid email",
            RejectReason::DomainNotWhitelisted => "domain not whitelisted",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of one registration attempt. A `Rejected` decision is a
/// hard stop for the caller, not a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationDecision {
    Allowed,
    Rejected(RejectReason),
}

impl RegistrationDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RegistrationDecision::Allowed)
    }
}
