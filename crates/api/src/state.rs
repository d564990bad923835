use mailgate_application::use_cases::{
    AddDomainUseCase, EvaluateRegistrationUseCase, GetWhitelistUseCase, RemoveDomainUseCase,
};
use std::sync::Arc;

/// Constructed once at process start and injected into every handler — the
/// single-instance semantics live here, not in a process-wide global.
#[derive(Clone)]
pub struct AppState {
    pub get_whitelist: Arc<GetWhitelistUseCase>,
    pub add_domain: Arc<AddDomainUseCase>,
    pub remove_domain: Arc<RemoveDomainUseCase>,
    pub evaluate_registration: Arc<EvaluateRegistrationUseCase>,
    pub admin_api_key: Option<Arc<str>>,
}
