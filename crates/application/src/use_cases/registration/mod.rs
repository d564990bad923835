mod evaluate_registration;

pub use evaluate_registration::EvaluateRegistrationUseCase;
