// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Variants carry plain strings so the error stays `Clone` and can travel
/// inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Network(NetworkError),
    Decode(String),
}

/// Failure modes of an image download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request could not be sent or the connection dropped.
    Transport(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The response body exceeded the download size limit.
    TooLarge { limit_bytes: u64 },
}

impl NetworkError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NetworkError::Transport(_) => "error-image-network",
            NetworkError::Status(_) => "error-image-status",
            NetworkError::Timeout => "error-image-timeout",
            NetworkError::TooLarge { .. } => "error-image-too-large",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Transport(msg) => write!(f, "transport failure: {}", msg),
            NetworkError::Status(code) => write!(f, "HTTP status {}", code),
            NetworkError::Timeout => write!(f, "request timed out"),
            NetworkError::TooLarge { limit_bytes } => {
                write!(f, "response larger than {} bytes", limit_bytes)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network(NetworkError::Timeout)
        } else if let Some(status) = err.status() {
            Error::Network(NetworkError::Status(status.as_u16()))
        } else {
            Error::Network(NetworkError::Transport(err.to_string()))
        }
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn network_error_wraps_status() {
        let err: Error = NetworkError::Status(404).into();
        assert_eq!(format!("{}", err), "Network Error: HTTP status 404");
    }

    #[test]
    fn network_error_i18n_keys() {
        assert_eq!(NetworkError::Timeout.i18n_key(), "error-image-timeout");
        assert_eq!(NetworkError::Status(500).i18n_key(), "error-image-status");
        assert_eq!(
            NetworkError::TooLarge { limit_bytes: 1 }.i18n_key(),
            "error-image-too-large"
        );
    }

    #[test]
    fn toml_parse_failure_becomes_config_error() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
