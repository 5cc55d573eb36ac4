use thiserror::Error;

use crate::types::{RegisterRequest, RegisterResponse, Registration, SignRequest, SignResponse};

/// Error codes a [`CryptoVerifier`] implementation reports.
///
/// This integer space is disjoint from the device error codes in
/// [`crate::DeviceErrorCode`]. Per ceremony the service recognizes a fixed
/// subset of these codes and maps them into its result taxonomy; anything
/// else is surfaced as an unexpected failure.
pub mod verifier_error_codes {
    /// The sign response does not match the outstanding sign request
    pub const NO_MATCHING_REQUEST: u32 = 1;
    /// The sign response does not match the given registration
    pub const NO_MATCHING_REGISTRATION: u32 = 2;
    /// The signature does not verify with the registered public key
    pub const AUTHENTICATION_FAILURE: u32 = 3;
    /// The registration response challenge does not match the request
    pub const UNMATCHED_CHALLENGE: u32 = 4;
    /// The attestation signature on the registration response does not verify
    pub const ATTESTATION_SIGNATURE: u32 = 5;
    /// The attestation certificate could not be verified
    pub const ATTESTATION_VERIFICATION: u32 = 6;
    /// The verifier could not obtain good randomness
    pub const BAD_RANDOM: u32 = 7;
    /// The reported sign counter is lower than expected
    pub const COUNTER_TOO_LOW: u32 = 8;
    /// The device public key could not be decoded
    pub const PUBKEY_DECODE: u32 = 9;
}

/// Coded failure reported by a [`CryptoVerifier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Verifier failure {code}: {message}")]
pub struct VerifierError {
    pub code: u32,
    pub message: String,
}

impl VerifierError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Registration data the verifier extracted from a valid response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedRegistration {
    pub key_handle: String,
    pub public_key: String,
}

/// The external cryptographic collaborator.
///
/// Implementations perform the actual U2F cryptography: challenge
/// generation, attestation certificate validation, and ECDSA signature
/// verification over the supplied request/response bytes. All operations are
/// pure computations; no I/O happens behind this trait.
///
/// [`crate::U2fService`] depends only on this trait, so tests substitute a
/// programmable stub.
pub trait CryptoVerifier {
    /// Produces the challenge for a new registration ceremony.
    fn registration_challenge(&self) -> Result<String, VerifierError>;

    /// Produces the challenge for an authentication ceremony with the given
    /// registered device.
    fn authentication_challenge(
        &self,
        registration: &Registration,
    ) -> Result<String, VerifierError>;

    /// Cryptographically verifies a registration response against its
    /// request, returning the registered key material on success.
    fn verify_registration(
        &self,
        request: &RegisterRequest,
        response: &RegisterResponse,
    ) -> Result<VerifiedRegistration, VerifierError>;

    /// Cryptographically verifies a sign response against its request and
    /// the stored registration, returning the sign counter the device
    /// reported.
    fn verify_authentication(
        &self,
        request: &SignRequest,
        response: &SignResponse,
        registration: &Registration,
    ) -> Result<u32, VerifierError>;
}

/// A shared reference to a verifier is itself a verifier, so a service can
/// borrow one that the caller keeps (tests rely on this to inspect a stub
/// after handing it to the service).
impl<V: CryptoVerifier> CryptoVerifier for &V {
    fn registration_challenge(&self) -> Result<String, VerifierError> {
        V::registration_challenge(self)
    }

    fn authentication_challenge(
        &self,
        registration: &Registration,
    ) -> Result<String, VerifierError> {
        V::authentication_challenge(self, registration)
    }

    fn verify_registration(
        &self,
        request: &RegisterRequest,
        response: &RegisterResponse,
    ) -> Result<VerifiedRegistration, VerifierError> {
        V::verify_registration(self, request, response)
    }

    fn verify_authentication(
        &self,
        request: &SignRequest,
        response: &SignResponse,
        registration: &Registration,
    ) -> Result<u32, VerifierError> {
        V::verify_authentication(self, request, response, registration)
    }
}
