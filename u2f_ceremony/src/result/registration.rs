use crate::types::{DeviceErrorCode, Registration};

/// Outcome of verifying a registration ceremony.
///
/// Exactly one variant describes each verification; callers either match
/// exhaustively or use the per-variant predicates. The payload accessors
/// panic when called on the wrong variant: reading registration data off a
/// failed verification is a bug in the caller, not a verification failure,
/// and must fail fast rather than hand out a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationVerificationResult {
    /// The device registered successfully
    Success { registration: Registration },
    /// The response challenge did not match the request challenge
    RequestResponseMismatch,
    /// The response was signed by another party than the device, indicating
    /// it was tampered with
    ResponseNotSignedByDevice,
    /// The attestation certificate did not verify; the device cannot be
    /// trusted
    DeviceNotTrusted,
    /// The device's public key could not be decoded
    PublicKeyDecodeFailed,
    /// The app IDs of the server and the request did not match
    AppIdMismatch,
    /// The U2F device reported an error instead of a registration payload
    DeviceError { code: DeviceErrorCode },
}

impl RegistrationVerificationResult {
    pub fn was_successful(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the registered device.
    ///
    /// # Panics
    ///
    /// Panics when the registration was not successful.
    pub fn registration(&self) -> &Registration {
        match self {
            Self::Success { registration } => registration,
            _ => panic!(
                "the registration was unsuccessful and the registration data is not available"
            ),
        }
    }

    /// Returns the error code the device reported.
    ///
    /// # Panics
    ///
    /// Panics when the device did not report an error.
    pub fn device_error_code(&self) -> DeviceErrorCode {
        match self {
            Self::DeviceError { code } => *code,
            _ => panic!("the device did not report an error and no error code is available"),
        }
    }

    pub fn did_device_report_any_error(&self) -> bool {
        matches!(self, Self::DeviceError { .. })
    }

    pub fn did_device_report_a_bad_request(&self) -> bool {
        self.did_device_report(DeviceErrorCode::BadRequest)
    }

    pub fn was_client_configuration_unsupported(&self) -> bool {
        self.did_device_report(DeviceErrorCode::ConfigurationUnsupported)
    }

    /// DEVICE_INELIGIBLE during registration means the device was already
    /// registered with this relying party.
    pub fn was_device_already_registered(&self) -> bool {
        self.did_device_report(DeviceErrorCode::DeviceIneligible)
    }

    pub fn did_device_time_out(&self) -> bool {
        self.did_device_report(DeviceErrorCode::Timeout)
    }

    pub fn did_device_report_an_unknown_error(&self) -> bool {
        self.did_device_report(DeviceErrorCode::OtherError)
    }

    pub fn did_response_challenge_not_match_request_challenge(&self) -> bool {
        matches!(self, Self::RequestResponseMismatch)
    }

    pub fn was_response_not_signed_by_device(&self) -> bool {
        matches!(self, Self::ResponseNotSignedByDevice)
    }

    pub fn was_device_not_trusted(&self) -> bool {
        matches!(self, Self::DeviceNotTrusted)
    }

    pub fn did_public_key_decoding_fail(&self) -> bool {
        matches!(self, Self::PublicKeyDecodeFailed)
    }

    pub fn did_app_ids_mismatch(&self) -> bool {
        matches!(self, Self::AppIdMismatch)
    }

    fn did_device_report(&self, expected: DeviceErrorCode) -> bool {
        matches!(self, Self::DeviceError { code } if *code == expected)
    }
}
