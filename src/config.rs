// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Adapter configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::command::DEFAULT_TIMED_REQUEST_TIMEOUT;
use crate::error::{ParseError, Result, ValueError};

/// Lowest target temperature offered when the device reports no limit.
pub const DEFAULT_MIN_TEMP: f64 = 7.0;

/// Highest target temperature offered when the device reports no limit.
pub const DEFAULT_MAX_TEMP: f64 = 35.0;

/// Configuration shared by all entities of a [`Platform`](crate::Platform).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use matter_entities::AdapterConfig;
///
/// let config = AdapterConfig::default()
///     .with_temperature_bounds(5.0, 30.0)
///     .unwrap()
///     .with_cover_command_timeout(Duration::from_millis(2000));
///
/// assert_eq!(config.default_min_temp, 5.0);
///
/// // Or loaded from JSON; omitted fields keep their defaults
/// let config = AdapterConfig::from_json(r#"{"default_max_temp": 32.0}"#).unwrap();
/// assert_eq!(config.default_max_temp, 32.0);
/// assert_eq!(config.default_min_temp, 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Fallback minimum target temperature in degrees.
    pub default_min_temp: f64,
    /// Fallback maximum target temperature in degrees.
    pub default_max_temp: f64,
    /// Timed-request timeout for window covering commands, in milliseconds.
    pub cover_command_timeout_ms: u64,
    /// Capacity of the entity event channel.
    pub event_capacity: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            default_min_temp: DEFAULT_MIN_TEMP,
            default_max_temp: DEFAULT_MAX_TEMP,
            cover_command_timeout_ms: duration_millis(DEFAULT_TIMED_REQUEST_TIMEOUT),
            event_capacity: 256,
        }
    }
}

impl AdapterConfig {
    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if the document is malformed and
    /// [`ValueError`] if the temperature bounds are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ParseError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the fallback temperature bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidTemperatureBounds`] if either bound is not
    /// finite or `min` is not below `max`.
    pub fn with_temperature_bounds(mut self, min: f64, max: f64) -> Result<Self> {
        self.default_min_temp = min;
        self.default_max_temp = max;
        self.validate()?;
        Ok(self)
    }

    /// Sets the timed-request timeout for window covering commands.
    #[must_use]
    pub fn with_cover_command_timeout(mut self, timeout: Duration) -> Self {
        self.cover_command_timeout_ms = duration_millis(timeout);
        self
    }

    /// Sets the capacity of the entity event channel.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Returns the timed-request timeout for window covering commands.
    #[must_use]
    pub fn cover_command_timeout(&self) -> Duration {
        Duration::from_millis(self.cover_command_timeout_ms)
    }

    /// Checks the temperature bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidTemperatureBounds`] if either bound is not
    /// finite or `min` is not below `max`.
    pub fn validate(&self) -> std::result::Result<(), ValueError> {
        let (min, max) = (self.default_min_temp, self.default_max_temp);
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ValueError::InvalidTemperatureBounds { min, max });
        }
        Ok(())
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults() {
        let config = AdapterConfig::default();
        assert!((config.default_min_temp - 7.0).abs() < f64::EPSILON);
        assert!((config.default_max_temp - 35.0).abs() < f64::EPSILON);
        assert_eq!(config.cover_command_timeout(), Duration::from_millis(1000));
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = AdapterConfig::default().with_temperature_bounds(30.0, 10.0);
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::InvalidTemperatureBounds { .. }))
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(
            AdapterConfig::default()
                .with_temperature_bounds(f64::NAN, 10.0)
                .is_err()
        );
    }

    #[test]
    fn from_json_partial() {
        let config = AdapterConfig::from_json(r#"{"cover_command_timeout_ms": 250}"#).unwrap();
        assert_eq!(config.cover_command_timeout(), Duration::from_millis(250));
        assert!((config.default_max_temp - DEFAULT_MAX_TEMP).abs() < f64::EPSILON);
    }

    #[test]
    fn from_json_malformed() {
        let result = AdapterConfig::from_json("{not json");
        assert!(matches!(result, Err(Error::Parse(ParseError::Json(_)))));
    }

    #[test]
    fn from_json_validates_bounds() {
        let result = AdapterConfig::from_json(r#"{"default_min_temp": 40.0}"#);
        assert!(matches!(result, Err(Error::Value(_))));
    }

    #[test]
    fn event_capacity_is_at_least_one() {
        assert_eq!(AdapterConfig::default().with_event_capacity(0).event_capacity, 1);
    }
}
