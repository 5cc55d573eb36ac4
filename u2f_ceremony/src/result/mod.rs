mod authentication;
mod registration;

pub use authentication::AuthenticationVerificationResult;
pub use registration::RegistrationVerificationResult;
