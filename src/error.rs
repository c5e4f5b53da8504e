// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Failures in this crate are either absorbed with a safe fallback
//! (storage, config) or surfaced once to the user (playback). Nothing
//! here is retried automatically.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    /// Fatal-for-this-item playback failure reported by the backend.
    /// The shell shows it as a global error banner; the user picks
    /// another item.
    #[error("playback error: {0}")]
    Playback(String),
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O error: disk failure");
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
    fn from_json_error_produces_storage_variant() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn playback_error_formats_properly() {
        let err = Error::Playback("bad stream".into());
        assert_eq!(format!("{}", err), "playback error: bad stream");
    }
}
