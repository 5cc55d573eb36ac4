use thiserror::Error;

use crate::verifier::VerifierError;

/// Errors that sit outside the closed ceremony outcome taxonomy.
///
/// Expected ceremony failures (a mismatching app ID, a regressing sign
/// counter, a device-reported error) are never raised as errors; they are
/// returned as variants of the verification result types so that callers are
/// forced to handle every case. This enum covers the remaining two classes:
/// invalid arguments (a programming bug in the caller) and verifier failures
/// the service does not recognize (which must never be misclassified as a
/// known benign outcome).
#[derive(Debug, Error)]
pub enum U2fError {
    /// The configured application identifier is not a valid https URL
    #[error("Invalid app ID: {0}")]
    InvalidAppId(String),

    /// A device error code outside the closed wire enumeration (0..=5)
    #[error("Device error code {0} is not one of the known error codes")]
    UnknownDeviceErrorCode(u32),

    /// The cryptographic verifier failed with a code this service has no
    /// mapping for
    #[error("Unexpected verifier error {code}: {message}")]
    UnexpectedVerifierError { code: u32, message: String },

    /// Failure while the verifier was producing challenge data
    #[error("Verifier error: {0}")]
    Verifier(#[from] VerifierError),
}
