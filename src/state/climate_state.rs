// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity state.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_TEMP, DEFAULT_MIN_TEMP};
use crate::types::{HvacAction, HvacMode, HvacModes};

/// Derived state of a climate entity.
///
/// Setpoints and limits are captured at update time, so a device-side
/// setpoint change alone is enough to produce a new state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateState {
    /// Measured temperature in degrees, if reported.
    pub current_temperature: Option<f64>,
    /// Current operating mode.
    pub hvac_mode: HvacMode,
    /// What the device is doing right now, if reported.
    pub hvac_action: Option<HvacAction>,
    /// Modes the device supports. Always contains [`HvacMode::Off`].
    pub hvac_modes: HvacModes,
    /// Setpoint that applies in the current mode.
    pub target_temperature: Option<f64>,
    /// Occupied heating setpoint.
    pub target_temperature_low: Option<f64>,
    /// Occupied cooling setpoint.
    pub target_temperature_high: Option<f64>,
    /// Lowest settable temperature for the current mode.
    pub min_temp: f64,
    /// Highest settable temperature for the current mode.
    pub max_temp: f64,
}

impl Default for ClimateState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimateState {
    /// Creates the state of an entity that has not been updated yet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MIN_TEMP, DEFAULT_MAX_TEMP)
    }

    /// Creates the state of an entity that has not been updated yet, with
    /// the given fallback limits.
    #[must_use]
    pub fn with_limits(min_temp: f64, max_temp: f64) -> Self {
        Self {
            current_temperature: None,
            hvac_mode: HvacMode::Off,
            hvac_action: None,
            hvac_modes: HvacModes::new(),
            target_temperature: None,
            target_temperature_low: None,
            target_temperature_high: None,
            min_temp,
            max_temp,
        }
    }

    /// Returns `true` if the device reports doing something other than idling.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self.hvac_action,
            Some(HvacAction::Heating | HvacAction::Cooling | HvacAction::Fan)
        )
    }
}
