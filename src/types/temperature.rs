// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion between Matter fixed-point temperatures and degrees.
//!
//! Matter encodes temperatures as signed integers in hundredths of a degree
//! Celsius, so `2150` on the wire is 21.5 °C.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of wire units per degree.
pub const TEMPERATURE_SCALING_FACTOR: f64 = 100.0;

/// Converts a raw wire temperature to degrees.
///
/// An unknown raw value stays unknown. Zero is a real reading (0.00 °C) and
/// is never confused with absence.
///
/// # Examples
///
/// ```
/// use matter_entities::types::to_degrees;
///
/// assert_eq!(to_degrees(Some(2150)), Some(21.5));
/// assert_eq!(to_degrees(Some(0)), Some(0.0));
/// assert_eq!(to_degrees(None), None);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_degrees(raw: Option<i64>) -> Option<f64> {
    raw.map(|value| value as f64 / TEMPERATURE_SCALING_FACTOR)
}

/// Converts degrees to the raw wire representation, rounding to the nearest
/// hundredth.
///
/// # Examples
///
/// ```
/// use matter_entities::types::to_raw;
///
/// assert_eq!(to_raw(21.5), 2150);
/// assert_eq!(to_raw(-4.25), -425);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_raw(degrees: f64) -> i64 {
    (degrees * TEMPERATURE_SCALING_FACTOR).round() as i64
}

/// Unit in which an entity reports temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    /// Degrees Celsius, the only unit Matter uses on the wire.
    #[default]
    Celsius,
}

impl TemperatureUnit {
    /// Returns the unit symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
