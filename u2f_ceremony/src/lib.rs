//! u2f-ceremony - U2F registration and authentication ceremony verification
//!
//! This crate implements the decision logic for the two U2F ceremonies: it
//! builds the protocol requests, hands the request/response pairs to a
//! pluggable cryptographic verifier, and maps every possible outcome into a
//! closed, exhaustively-matchable result type.
//!
//! The cryptographic work itself (signature verification, attestation
//! certificate checks, key handle decoding) lives behind the
//! [`CryptoVerifier`] trait so that it can be provided by an external
//! library or substituted with a test double.

mod app_id;
mod errors;
mod result;
mod service;
mod types;
mod verifier;

pub use app_id::AppId;
pub use errors::U2fError;
pub use result::{AuthenticationVerificationResult, RegistrationVerificationResult};
pub use service::U2fService;
pub use types::{
    DeviceErrorCode, RegisterRequest, RegisterResponse, Registration, SignRequest, SignResponse,
    U2F_VERSION,
};
pub use verifier::{CryptoVerifier, VerifiedRegistration, VerifierError, verifier_error_codes};
