use std::string::FromUtf8Error;

/// All error types that can occur when talking to a Wiz light.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// A network socket operation failed while communicating with a bulb.
    #[error("socket {action} error: {err:?}")]
    Socket { action: String, err: std::io::Error },

    /// The bulb host name did not resolve to any address.
    #[error("could not resolve light host {host}")]
    Resolve { host: String },

    /// The UDP response from a bulb contained invalid UTF-8.
    #[error("utf8 decoding error: {0:?}")]
    Utf8Decode(FromUtf8Error),

    /// The bulb answered with an error object.
    #[error("light rejected {method}: {message}")]
    Device { method: String, message: String },

    /// Attempted to send a [`crate::Payload`] with no attributes set.
    #[error("invalid payload; no attributes set")]
    NoAttribute,
}

impl Error {
    /// Create a new socket error
    pub fn socket(action: &str, err: std::io::Error) -> Self {
        Error::Socket {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new resolve error
    pub fn resolve(host: &str) -> Self {
        Error::Resolve {
            host: host.to_string(),
        }
    }
}

/// Reasons a light state request body is rejected.
///
/// The display strings are the messages returned to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is missing or is not a JSON object.
    #[error("Invalid JSON Payload")]
    InvalidPayload,

    /// `on` is not a boolean or `wiz_scene` is not a known scene.
    #[error("Missing key fields in request")]
    MissingOrInvalidField,

    /// `bri` is not a number in 0-255.
    #[error("Invalid Brightness Value")]
    InvalidBrightness,

    /// None of the recognised fields were present.
    #[error("No state changes provided")]
    NoChangesProvided,
}

/// Failures while a device session is talking to a bulb.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The command or the state refresh did not finish in time.
    #[error("timed out after {0:?} waiting for light")]
    Timeout(std::time::Duration),

    /// The protocol client could not reach the light.
    #[error("light unreachable: {0}")]
    Connectivity(#[from] Error),
}

impl SessionError {
    /// The message shown to HTTP clients for any session failure.
    pub const CLIENT_MESSAGE: &'static str = "Timeout while attempting to communicate with light.";
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
