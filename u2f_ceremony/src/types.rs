use serde::{Deserialize, Serialize};

use crate::errors::U2fError;

/// Protocol version this library speaks; fixed into every request it builds.
pub const U2F_VERSION: &str = "U2F_V2";

/// Error codes a U2F device (via the client API) can report.
///
/// These are wire integers defined by the FIDO U2F JavaScript API; the
/// enumeration is closed and converting any other integer fails, so the
/// outcome space of a ceremony can be enumerated exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceErrorCode {
    /// No error occurred
    Ok = 0,
    /// An error occurred that cannot be classified more precisely
    OtherError = 1,
    /// The request was malformed
    BadRequest = 2,
    /// The client configuration does not support U2F
    ConfigurationUnsupported = 3,
    /// The device is not eligible for this request: during registration it
    /// was already registered, during authentication it did not know the
    /// key handle
    DeviceIneligible = 4,
    /// The user failed to interact with the device within the timeout
    Timeout = 5,
}

impl DeviceErrorCode {
    /// Returns the wire integer for this error code.
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for DeviceErrorCode {
    type Error = U2fError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Ok),
            1 => Ok(Self::OtherError),
            2 => Ok(Self::BadRequest),
            3 => Ok(Self::ConfigurationUnsupported),
            4 => Ok(Self::DeviceIneligible),
            5 => Ok(Self::Timeout),
            unknown => Err(U2fError::UnknownDeviceErrorCode(unknown)),
        }
    }
}

/// Challenge sent to the client to register a new U2F device.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub version: String,
    pub challenge: String,
    pub app_id: String,
}

/// The device's answer to a [`RegisterRequest`].
///
/// On the wire either the payload fields or `errorCode` are present, never
/// both; a missing payload deserializes to empty strings.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub registration_data: String,
    #[serde(default)]
    pub client_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
}

/// Challenge sent to the client to authenticate with a registered device.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub version: String,
    pub challenge: String,
    pub app_id: String,
    pub key_handle: String,
}

/// The device's answer to a [`SignRequest`].
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    #[serde(default)]
    pub key_handle: String,
    #[serde(default)]
    pub signature_data: String,
    #[serde(default)]
    pub client_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
}

/// A registered U2F device as the caller persists it.
///
/// The service never stores this itself: it produces one with `sign_counter`
/// 0 when a registration verifies, reads one during authentication, and
/// returns a copy with the updated counter for the caller to persist.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Registration {
    /// Opaque identifier the device issued for its private key
    pub key_handle: String,
    /// Public key the device signs authentication responses with
    pub public_key: String,
    /// Last sign counter the device reported; used to detect cloned devices
    pub sign_counter: u32,
}
