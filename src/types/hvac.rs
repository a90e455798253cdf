// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-side HVAC enums.
//!
//! These are the values a climate entity exposes to the home-automation
//! host. They are derived from thermostat attributes by the functions in
//! [`crate::mapping`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Operating mode of a climate entity.
///
/// # Examples
///
/// ```
/// use matter_entities::types::HvacMode;
///
/// assert_eq!(HvacMode::HeatCool.as_str(), "heat_cool");
/// assert_eq!("fan_only".parse::<HvacMode>(), Ok(HvacMode::FanOnly));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    /// The device is off.
    #[default]
    Off,
    /// Heating to a single setpoint.
    Heat,
    /// Cooling to a single setpoint.
    Cool,
    /// Keeping the temperature between a low and a high setpoint.
    HeatCool,
    /// Dehumidifying.
    Dry,
    /// Running the fan only.
    FanOnly,
}

impl HvacMode {
    /// Returns the host string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::HeatCool => "heat_cool",
            Self::Dry => "dry",
            Self::FanOnly => "fan_only",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "heat" => Ok(Self::Heat),
            "cool" => Ok(Self::Cool),
            "heat_cool" => Ok(Self::HeatCool),
            "dry" => Ok(Self::Dry),
            "fan_only" => Ok(Self::FanOnly),
            other => Err(ValueError::UnknownHvacMode(other.to_string())),
        }
    }
}

/// What the thermostat is physically doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacAction {
    /// Idle.
    Off,
    /// A heating stage is active.
    Heating,
    /// A cooling stage is active.
    Cooling,
    /// Only a fan stage is active.
    Fan,
}

impl HvacAction {
    /// Returns the host string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Heating => "heating",
            Self::Cooling => "cooling",
            Self::Fan => "fan",
        }
    }
}

impl fmt::Display for HvacAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of operating modes a climate entity accepts.
///
/// Always contains [`HvacMode::Off`]. Iteration follows the declaration
/// order of [`HvacMode`], so the set renders the same way no matter in
/// which order modes were inserted.
///
/// # Examples
///
/// ```
/// use matter_entities::types::{HvacMode, HvacModes};
///
/// let mut modes = HvacModes::new();
/// modes.insert(HvacMode::Cool);
/// modes.insert(HvacMode::Heat);
/// modes.insert(HvacMode::Cool);
///
/// let listed: Vec<_> = modes.iter().collect();
/// assert_eq!(listed, [HvacMode::Off, HvacMode::Heat, HvacMode::Cool]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HvacMode>", into = "Vec<HvacMode>")]
pub struct HvacModes(BTreeSet<HvacMode>);

impl HvacModes {
    /// Creates a set containing only [`HvacMode::Off`].
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::from([HvacMode::Off]))
    }

    /// Adds a mode. Adding a mode twice has no effect.
    pub fn insert(&mut self, mode: HvacMode) {
        self.0.insert(mode);
    }

    /// Returns `true` if the mode is in the set.
    #[must_use]
    pub fn contains(&self, mode: HvacMode) -> bool {
        self.0.contains(&mode)
    }

    /// Returns the number of modes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: the set contains at least [`HvacMode::Off`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the modes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = HvacMode> + '_ {
        self.0.iter().copied()
    }
}

impl Default for HvacModes {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<HvacMode> for HvacModes {
    fn from_iter<I: IntoIterator<Item = HvacMode>>(iter: I) -> Self {
        let mut modes = Self::new();
        for mode in iter {
            modes.insert(mode);
        }
        modes
    }
}

impl From<Vec<HvacMode>> for HvacModes {
    fn from(modes: Vec<HvacMode>) -> Self {
        modes.into_iter().collect()
    }
}

impl From<HvacModes> for Vec<HvacMode> {
    fn from(modes: HvacModes) -> Self {
        modes.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hvac_mode_round_trips_through_str() {
        for mode in [
            HvacMode::Off,
            HvacMode::Heat,
            HvacMode::Cool,
            HvacMode::HeatCool,
            HvacMode::Dry,
            HvacMode::FanOnly,
        ] {
            assert_eq!(mode.as_str().parse::<HvacMode>(), Ok(mode));
        }
    }

    #[test]
    fn hvac_mode_rejects_unknown() {
        assert_eq!(
            "auto".parse::<HvacMode>(),
            Err(ValueError::UnknownHvacMode("auto".to_string()))
        );
    }

    #[test]
    fn hvac_mode_serde_uses_snake_case() {
        let json = serde_json::to_string(&HvacMode::HeatCool).unwrap();
        assert_eq!(json, "\"heat_cool\"");
    }

    #[test]
    fn hvac_action_display() {
        assert_eq!(HvacAction::Heating.to_string(), "heating");
        assert_eq!(HvacAction::Fan.to_string(), "fan");
    }

    #[test]
    fn modes_always_contain_off() {
        let modes = HvacModes::new();
        assert!(modes.contains(HvacMode::Off));
        assert_eq!(modes.len(), 1);
        assert!(!modes.is_empty());

        let collected: HvacModes = std::iter::empty().collect();
        assert!(collected.contains(HvacMode::Off));
    }

    #[test]
    fn modes_do_not_duplicate() {
        let modes: HvacModes = [HvacMode::Heat, HvacMode::Heat, HvacMode::Off]
            .into_iter()
            .collect();
        assert_eq!(modes.len(), 2);
    }

    #[test]
    fn modes_deserialize_keeps_off() {
        let modes: HvacModes = serde_json::from_str("[\"cool\"]").unwrap();
        assert!(modes.contains(HvacMode::Off));
        assert!(modes.contains(HvacMode::Cool));
        assert_eq!(
            serde_json::to_string(&modes).unwrap(),
            "[\"off\",\"cool\"]"
        );
    }
}
