use crate::types::{DeviceErrorCode, Registration};

/// Outcome of verifying an authentication ceremony.
///
/// Same contract as [`crate::RegistrationVerificationResult`]: exactly one
/// variant per verification, and payload accessors panic on the wrong
/// variant instead of returning a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationVerificationResult {
    /// The device authenticated; the carried registration holds the updated
    /// sign counter and is what the caller must persist
    Success { registration: Registration },
    /// The response challenge did not match the request challenge
    RequestResponseMismatch,
    /// The response was not for the given registration
    ResponseRegistrationMismatch,
    /// The response was signed by another party than the device, indicating
    /// it was tampered with
    ResponseNotSignedByDevice,
    /// The device's public key could not be decoded
    PublicKeyDecodeFailed,
    /// The app IDs of the server and the request did not match
    AppIdMismatch,
    /// The reported sign counter did not increase; the device may have been
    /// cloned
    SignCounterTooLow,
    /// The U2F device reported an error instead of a signature payload
    DeviceError { code: DeviceErrorCode },
}

impl AuthenticationVerificationResult {
    pub fn was_successful(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the registration with the updated sign counter.
    ///
    /// # Panics
    ///
    /// Panics when the authentication was not successful.
    pub fn registration(&self) -> &Registration {
        match self {
            Self::Success { registration } => registration,
            _ => panic!(
                "the authentication was unsuccessful and the registration data is not available"
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

    /// DEVICE_INELIGIBLE during authentication means the device did not
    /// recognize the key handle it was asked to sign with.
    pub fn was_key_handle_unknown_to_device(&self) -> bool {
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

    pub fn did_response_not_match_registration(&self) -> bool {
        matches!(self, Self::ResponseRegistrationMismatch)
    }

    pub fn was_response_not_signed_by_device(&self) -> bool {
        matches!(self, Self::ResponseNotSignedByDevice)
    }

    pub fn did_public_key_decoding_fail(&self) -> bool {
        matches!(self, Self::PublicKeyDecodeFailed)
    }

    pub fn did_app_ids_mismatch(&self) -> bool {
        matches!(self, Self::AppIdMismatch)
    }

    pub fn was_sign_counter_too_low(&self) -> bool {
        matches!(self, Self::SignCounterTooLow)
    }

    fn did_device_report(&self, expected: DeviceErrorCode) -> bool {
        matches!(self, Self::DeviceError { code } if *code == expected)
    }
}
