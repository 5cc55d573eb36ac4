use crate::app_id::AppId;
use crate::errors::U2fError;
use crate::result::{AuthenticationVerificationResult, RegistrationVerificationResult};
use crate::types::{
    DeviceErrorCode, RegisterRequest, RegisterResponse, Registration, SignRequest, SignResponse,
    U2F_VERSION,
};
use crate::verifier::{CryptoVerifier, VerifierError, verifier_error_codes};

/// Orchestrates the two U2F ceremonies.
///
/// The service holds only its configured [`AppId`] and a handle to the
/// cryptographic verifier; it keeps no per-ceremony state. The caller
/// carries the request (and, for authentication, the stored registration)
/// across the two protocol messages, typically in its session storage.
/// All operations are synchronous and safe to call concurrently.
pub struct U2fService<V> {
    app_id: AppId,
    verifier: V,
}

impl<V: CryptoVerifier> U2fService<V> {
    pub fn new(app_id: AppId, verifier: V) -> Self {
        Self { app_id, verifier }
    }

    /// Builds the request that starts a registration ceremony.
    ///
    /// Verifier failures while producing the challenge are fatal; they are
    /// not part of the ceremony outcome taxonomy.
    pub fn request_registration(&self) -> Result<RegisterRequest, U2fError> {
        let challenge = self.verifier.registration_challenge()?;

        Ok(RegisterRequest {
            version: U2F_VERSION.to_string(),
            challenge,
            app_id: self.app_id.as_str().to_string(),
        })
    }

    /// Builds the request that starts an authentication ceremony with a
    /// previously registered device, binding the challenge to its key
    /// handle.
    pub fn request_authentication(
        &self,
        registration: &Registration,
    ) -> Result<SignRequest, U2fError> {
        let challenge = self.verifier.authentication_challenge(registration)?;

        Ok(SignRequest {
            version: U2F_VERSION.to_string(),
            challenge,
            app_id: self.app_id.as_str().to_string(),
            key_handle: registration.key_handle.clone(),
        })
    }

    /// Verifies the device's answer to a registration request.
    ///
    /// Checks run cheapest-first: a device-reported error short-circuits
    /// before anything else (an errored device never produced a signable
    /// payload), the app ID check runs before any cryptographic work, and
    /// only a structurally eligible request reaches the verifier. On
    /// success the registered device starts with sign counter 0.
    ///
    /// Returns `Err` only for conditions outside the closed outcome
    /// taxonomy: a device error code outside the wire enumeration, or a
    /// verifier error code this service has no mapping for.
    pub fn verify_registration(
        &self,
        request: &RegisterRequest,
        response: &RegisterResponse,
    ) -> Result<RegistrationVerificationResult, U2fError> {
        if let Some(code) = reported_device_error(response.error_code)? {
            tracing::debug!("Device reported error {:?} during registration", code);
            return Ok(RegistrationVerificationResult::DeviceError { code });
        }

        if request.app_id != self.app_id.as_str() {
            tracing::debug!(
                "Registration request app ID '{}' does not match configured '{}'",
                request.app_id,
                self.app_id
            );
            return Ok(RegistrationVerificationResult::AppIdMismatch);
        }

        match self.verifier.verify_registration(request, response) {
            Ok(verified) => {
                tracing::debug!("Registered key handle {}", verified.key_handle);
                Ok(RegistrationVerificationResult::Success {
                    registration: Registration {
                        key_handle: verified.key_handle,
                        public_key: verified.public_key,
                        sign_counter: 0,
                    },
                })
            }
            Err(error) => match error.code {
                verifier_error_codes::UNMATCHED_CHALLENGE => {
                    Ok(RegistrationVerificationResult::RequestResponseMismatch)
                }
                verifier_error_codes::ATTESTATION_SIGNATURE => {
                    Ok(RegistrationVerificationResult::ResponseNotSignedByDevice)
                }
                verifier_error_codes::ATTESTATION_VERIFICATION => {
                    Ok(RegistrationVerificationResult::DeviceNotTrusted)
                }
                verifier_error_codes::PUBKEY_DECODE => {
                    Ok(RegistrationVerificationResult::PublicKeyDecodeFailed)
                }
                code => Err(unexpected_verifier_error(code, error)),
            },
        }
    }

    /// Verifies the device's answer to a sign request.
    ///
    /// Same check ordering as registration. On cryptographic success the
    /// reported sign counter must be strictly greater than the stored one;
    /// an equal or lower counter is treated as a possible cloned-device
    /// replay and yields `SignCounterTooLow` even though the signature
    /// itself verified.
    pub fn verify_authentication(
        &self,
        request: &SignRequest,
        response: &SignResponse,
        registration: &Registration,
    ) -> Result<AuthenticationVerificationResult, U2fError> {
        if let Some(code) = reported_device_error(response.error_code)? {
            tracing::debug!("Device reported error {:?} during authentication", code);
            return Ok(AuthenticationVerificationResult::DeviceError { code });
        }

        if request.app_id != self.app_id.as_str() {
            tracing::debug!(
                "Sign request app ID '{}' does not match configured '{}'",
                request.app_id,
                self.app_id
            );
            return Ok(AuthenticationVerificationResult::AppIdMismatch);
        }

        match self
            .verifier
            .verify_authentication(request, response, registration)
        {
            Ok(new_counter) => {
                if new_counter <= registration.sign_counter {
                    tracing::warn!(
                        "Sign counter did not increase (stored: {}, received: {}) - possible cloned device",
                        registration.sign_counter,
                        new_counter
                    );
                    return Ok(AuthenticationVerificationResult::SignCounterTooLow);
                }

                tracing::debug!(
                    "Sign counter advanced from {} to {}",
                    registration.sign_counter,
                    new_counter
                );
                Ok(AuthenticationVerificationResult::Success {
                    registration: Registration {
                        sign_counter: new_counter,
                        ..registration.clone()
                    },
                })
            }
            Err(error) => match error.code {
                verifier_error_codes::NO_MATCHING_REQUEST => {
                    Ok(AuthenticationVerificationResult::RequestResponseMismatch)
                }
                verifier_error_codes::NO_MATCHING_REGISTRATION => {
                    Ok(AuthenticationVerificationResult::ResponseRegistrationMismatch)
                }
                verifier_error_codes::AUTHENTICATION_FAILURE => {
                    Ok(AuthenticationVerificationResult::ResponseNotSignedByDevice)
                }
                verifier_error_codes::PUBKEY_DECODE => {
                    Ok(AuthenticationVerificationResult::PublicKeyDecodeFailed)
                }
                code => Err(unexpected_verifier_error(code, error)),
            },
        }
    }
}

/// Interprets the wire error code of a response.
///
/// A missing code or the OK code (0) means the device produced a payload
/// and the ceremony proceeds; a known non-OK code short-circuits it. When a
/// response carries both a non-OK code and payload fields, the error code
/// wins and the payload is ignored. A code outside the wire enumeration is
/// an invalid argument, never an outcome.
fn reported_device_error(error_code: Option<u32>) -> Result<Option<DeviceErrorCode>, U2fError> {
    match error_code {
        None => Ok(None),
        Some(raw) => {
            let code = DeviceErrorCode::try_from(raw)?;
            if code == DeviceErrorCode::Ok {
                Ok(None)
            } else {
                Ok(Some(code))
            }
        }
    }
}

fn unexpected_verifier_error(code: u32, error: VerifierError) -> U2fError {
    tracing::error!("Verifier failed with unmapped code {}: {}", code, error.message);
    U2fError::UnexpectedVerifierError {
        code,
        message: error.message,
    }
}
