use std::fmt;

use url::Url;

use crate::errors::U2fError;

/// Validated application identifier of the relying party.
///
/// U2F scopes every credential to an app ID, which must be an https URL.
/// The value is validated once at construction and is immutable afterwards.
/// Equality is byte-for-byte on the configured string; no normalization of
/// case, path or trailing slash is performed, because the app ID must match
/// the value the device signed over exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    /// Creates an `AppId` from the configured relying-party URL.
    ///
    /// Fails with [`U2fError::InvalidAppId`] when the value is empty, does
    /// not parse as a URL, or uses a scheme other than `https`.
    pub fn new(value: impl Into<String>) -> Result<Self, U2fError> {
        let value = value.into();

        if value.is_empty() {
            return Err(U2fError::InvalidAppId("app ID must not be empty".into()));
        }

        let parsed = Url::parse(&value)
            .map_err(|e| U2fError::InvalidAppId(format!("Failed to parse '{value}': {e}")))?;

        if parsed.scheme() != "https" {
            return Err(U2fError::InvalidAppId(format!(
                "Expected an https URL, got scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self(value))
    }

    /// Returns the app ID exactly as configured.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
