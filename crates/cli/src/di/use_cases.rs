use mailgate_application::use_cases::{
    AddDomainUseCase, EvaluateRegistrationUseCase, GetWhitelistUseCase, RemoveDomainUseCase,
};
use std::sync::Arc;

use crate::di::Repositories;

pub struct UseCases {
    pub get_whitelist: Arc<GetWhitelistUseCase>,
    pub add_domain: Arc<AddDomainUseCase>,
    pub remove_domain: Arc<RemoveDomainUseCase>,
    pub evaluate_registration: Arc<EvaluateRegistrationUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            get_whitelist: Arc::new(GetWhitelistUseCase::new(repos.whitelist.clone())),
            add_domain: Arc::new(AddDomainUseCase::new(repos.whitelist.clone())),
            remove_domain: Arc::new(RemoveDomainUseCase::new(repos.whitelist.clone())),
            evaluate_registration: Arc::new(EvaluateRegistrationUseCase::new(
                repos.whitelist.clone(),
            )),
        }
    }
}
