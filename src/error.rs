// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `matter_entities` library.
//!
//! Errors fall into three groups: caller mistakes surfaced verbatim to the
//! user ([`Error::MissingArgument`], [`Error::UnsupportedMode`]), transport
//! failures propagated unmodified from the Matter client
//! ([`ProtocolError`]), and parsing failures for configuration and attribute
//! paths ([`ParseError`]).
//!
//! Unrecognized values reported by a device are never errors. They resolve
//! to safe defaults in [`crate::mapping`].

use thiserror::Error;

use crate::types::HvacMode;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was not supplied for the current HVAC mode.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// The HVAC mode has no representation in the thermostat `SystemMode` attribute.
    #[error("unsupported hvac mode in Matter: {0}")]
    UnsupportedMode(HvacMode),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the Matter client.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing configuration or identifiers.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// The string is not a known HVAC mode name.
    #[error("unknown hvac mode: {0}")]
    UnknownHvacMode(String),

    /// A temperature bound is not finite or is inverted.
    #[error("invalid temperature bounds: min {min} must be below max {max}")]
    InvalidTemperatureBounds {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

/// Errors reported by the Matter client collaborator.
///
/// These are produced by [`Protocol`](crate::protocol::Protocol)
/// implementations and passed through to the caller untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Connection to the Matter server failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The node is not known to the Matter server.
    #[error("node {0} not found")]
    NodeNotFound(u64),

    /// The device answered with a non-success interaction model status.
    #[error("command rejected with status {status}")]
    CommandRejected {
        /// Interaction model status code.
        status: u16,
    },

    /// Internal channel was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// Errors related to parsing configuration and identifiers.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An attribute path string is malformed.
    #[error("invalid attribute path: {0}")]
    InvalidAttributePath(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::UnknownHvacMode("auto".to_string());
        assert_eq!(err.to_string(), "unknown hvac mode: auto");

        let err = ValueError::InvalidTemperatureBounds { min: 30.0, max: 10.0 };
        assert_eq!(
            err.to_string(),
            "invalid temperature bounds: min 30 must be below max 10"
        );
    }

    #[test]
    fn unsupported_mode_display() {
        let err = Error::UnsupportedMode(HvacMode::Dry);
        assert_eq!(err.to_string(), "unsupported hvac mode in Matter: dry");
    }

    #[test]
    fn missing_argument_display() {
        let err = Error::MissingArgument("temperature");
        assert_eq!(err.to_string(), "missing argument: temperature");
    }

    #[test]
    fn error_from_protocol_error() {
        let err: Error = ProtocolError::NodeNotFound(7).into();
        assert!(matches!(err, Error::Protocol(ProtocolError::NodeNotFound(7))));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::InvalidAttributePath("1/x".to_string());
        assert_eq!(err.to_string(), "invalid attribute path: 1/x");
    }
}
