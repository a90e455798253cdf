// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation between thermostat attribute codes and host HVAC values.
//!
//! All functions are pure. Codes a device reports that have no host
//! counterpart map to a safe default instead of an error: unknown system
//! modes become [`HvacMode::Off`] and unset feature bits leave only
//! [`HvacMode::Off`] in the supported set.

use crate::capabilities::ThermostatFeatures;
use crate::cluster::thermostat::{SystemMode, running_state};
use crate::error::{Error, Result};
use crate::types::{HvacAction, HvacMode, HvacModes};

/// Maps a `SystemMode` attribute value to an HVAC mode.
///
/// # Examples
///
/// ```
/// use matter_entities::mapping::system_mode_to_hvac_mode;
/// use matter_entities::types::HvacMode;
///
/// assert_eq!(system_mode_to_hvac_mode(1), HvacMode::HeatCool);
/// assert_eq!(system_mode_to_hvac_mode(6), HvacMode::Cool);
/// assert_eq!(system_mode_to_hvac_mode(200), HvacMode::Off);
/// ```
#[must_use]
pub const fn system_mode_to_hvac_mode(code: u8) -> HvacMode {
    match SystemMode::from_code(code) {
        Some(SystemMode::Auto) => HvacMode::HeatCool,
        Some(SystemMode::Dry) => HvacMode::Dry,
        Some(SystemMode::FanOnly) => HvacMode::FanOnly,
        Some(SystemMode::Cool | SystemMode::Precooling) => HvacMode::Cool,
        Some(SystemMode::Heat | SystemMode::EmergencyHeat) => HvacMode::Heat,
        // Off, Sleep and anything the device made up
        Some(SystemMode::Off | SystemMode::Sleep) | None => HvacMode::Off,
    }
}

/// Maps the optional `ThermostatRunningState` bitmap to an HVAC action.
///
/// A missing attribute means the action is unknown, which is different from
/// a reported idle state. Heating wins over cooling, cooling over fan.
///
/// # Examples
///
/// ```
/// use matter_entities::mapping::running_state_to_action;
/// use matter_entities::types::HvacAction;
///
/// assert_eq!(running_state_to_action(None), None);
/// assert_eq!(running_state_to_action(Some(0)), Some(HvacAction::Off));
/// assert_eq!(running_state_to_action(Some(8)), Some(HvacAction::Heating));
/// ```
#[must_use]
pub const fn running_state_to_action(state: Option<u16>) -> Option<HvacAction> {
    let Some(bits) = state else {
        return None;
    };

    let action = if bits & running_state::ANY_HEAT != 0 {
        HvacAction::Heating
    } else if bits & running_state::ANY_COOL != 0 {
        HvacAction::Cooling
    } else if bits & running_state::ANY_FAN != 0 {
        HvacAction::Fan
    } else {
        HvacAction::Off
    };
    Some(action)
}

/// Derives the supported HVAC modes from a thermostat feature map.
///
/// # Examples
///
/// ```
/// use matter_entities::mapping::feature_map_to_hvac_modes;
/// use matter_entities::types::HvacMode;
///
/// let modes = feature_map_to_hvac_modes(0);
/// assert!(modes.contains(HvacMode::Off));
/// assert_eq!(modes.len(), 1);
/// ```
#[must_use]
pub fn feature_map_to_hvac_modes(feature_map: u32) -> HvacModes {
    ThermostatFeatures::from_feature_map(feature_map).supported_modes()
}

/// Maps an HVAC mode to the `SystemMode` value written to the device.
///
/// # Errors
///
/// Returns [`Error::UnsupportedMode`] for modes that cannot be requested
/// remotely ([`HvacMode::Dry`], [`HvacMode::FanOnly`]).
///
/// # Examples
///
/// ```
/// use matter_entities::mapping::hvac_mode_to_system_mode;
/// use matter_entities::types::HvacMode;
///
/// assert_eq!(hvac_mode_to_system_mode(HvacMode::Heat).unwrap(), 4);
/// assert!(hvac_mode_to_system_mode(HvacMode::Dry).is_err());
/// ```
pub fn hvac_mode_to_system_mode(mode: HvacMode) -> Result<u8> {
    let system_mode = match mode {
        HvacMode::Off => SystemMode::Off,
        HvacMode::HeatCool => SystemMode::Auto,
        HvacMode::Cool => SystemMode::Cool,
        HvacMode::Heat => SystemMode::Heat,
        HvacMode::Dry | HvacMode::FanOnly => return Err(Error::UnsupportedMode(mode)),
    };
    Ok(system_mode.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::thermostat::feature;

    #[test]
    fn system_mode_table() {
        let cases = [
            (0, HvacMode::Off),
            (1, HvacMode::HeatCool),
            (2, HvacMode::Off),
            (3, HvacMode::Cool),
            (4, HvacMode::Heat),
            (5, HvacMode::Heat),
            (6, HvacMode::Cool),
            (7, HvacMode::FanOnly),
            (8, HvacMode::Dry),
            (9, HvacMode::Off),
            (42, HvacMode::Off),
        ];
        for (code, expected) in cases {
            assert_eq!(system_mode_to_hvac_mode(code), expected, "code {code}");
        }
    }

    #[test]
    fn running_state_absent_is_unknown() {
        assert_eq!(running_state_to_action(None), None);
    }

    #[test]
    fn running_state_idle_is_off() {
        assert_eq!(running_state_to_action(Some(0)), Some(HvacAction::Off));
        // bit 7 and above are reserved
        assert_eq!(running_state_to_action(Some(0x80)), Some(HvacAction::Off));
    }

    #[test]
    fn running_state_stages() {
        assert_eq!(running_state_to_action(Some(running_state::HEAT)), Some(HvacAction::Heating));
        assert_eq!(
            running_state_to_action(Some(running_state::HEAT_STAGE_2)),
            Some(HvacAction::Heating)
        );
        assert_eq!(running_state_to_action(Some(running_state::COOL)), Some(HvacAction::Cooling));
        assert_eq!(
            running_state_to_action(Some(running_state::COOL_STAGE_2)),
            Some(HvacAction::Cooling)
        );
        for fan in [running_state::FAN, running_state::FAN_STAGE_2, running_state::FAN_STAGE_3] {
            assert_eq!(running_state_to_action(Some(fan)), Some(HvacAction::Fan));
        }
    }

    #[test]
    fn running_state_priority() {
        let heat_and_cool = running_state::HEAT | running_state::COOL;
        assert_eq!(running_state_to_action(Some(heat_and_cool)), Some(HvacAction::Heating));

        let cool_and_fan = running_state::COOL_STAGE_2 | running_state::FAN;
        assert_eq!(running_state_to_action(Some(cool_and_fan)), Some(HvacAction::Cooling));
    }

    #[test]
    fn feature_map_always_contains_off() {
        for map in [0, feature::HEAT, feature::COOL, feature::AUTO_MODE, 0xFFFF_FFFF] {
            assert!(feature_map_to_hvac_modes(map).contains(HvacMode::Off));
        }
    }

    #[test]
    fn feature_map_full() {
        let modes = feature_map_to_hvac_modes(feature::HEAT | feature::COOL | feature::AUTO_MODE);
        let listed: Vec<_> = modes.iter().collect();
        assert_eq!(
            listed,
            [HvacMode::Off, HvacMode::Heat, HvacMode::Cool, HvacMode::HeatCool]
        );
    }

    #[test]
    fn reverse_table() {
        assert_eq!(hvac_mode_to_system_mode(HvacMode::Off).unwrap(), 0);
        assert_eq!(hvac_mode_to_system_mode(HvacMode::HeatCool).unwrap(), 1);
        assert_eq!(hvac_mode_to_system_mode(HvacMode::Cool).unwrap(), 3);
        assert_eq!(hvac_mode_to_system_mode(HvacMode::Heat).unwrap(), 4);
    }

    #[test]
    fn reverse_table_rejects_local_only_modes() {
        assert!(matches!(
            hvac_mode_to_system_mode(HvacMode::Dry),
            Err(Error::UnsupportedMode(HvacMode::Dry))
        ));
        assert!(matches!(
            hvac_mode_to_system_mode(HvacMode::FanOnly),
            Err(Error::UnsupportedMode(HvacMode::FanOnly))
        ));
    }

    #[test]
    fn forward_and_reverse_agree() {
        for mode in [HvacMode::Off, HvacMode::Heat, HvacMode::Cool, HvacMode::HeatCool] {
            let code = hvac_mode_to_system_mode(mode).unwrap();
            assert_eq!(system_mode_to_hvac_mode(code), mode);
        }
    }
}
