// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat capability detection.
//!
//! A thermostat announces its optional features through the cluster's
//! feature map. The bits are static for a device, but the climate entity
//! decodes them again on every update and derives the supported HVAC modes
//! from scratch.

use crate::cluster::thermostat::feature;
use crate::types::{HvacMode, HvacModes};

/// Features announced by a thermostat's feature map.
///
/// # Examples
///
/// ```
/// use matter_entities::ThermostatFeatures;
///
/// // Heat + Cool + Auto
/// let features = ThermostatFeatures::from_feature_map(0b10_0011);
/// assert!(features.heating);
/// assert!(features.cooling);
/// assert!(features.auto_mode);
/// assert!(!features.occupancy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
// Each boolean mirrors one independent bit of the feature map.
#[allow(clippy::struct_excessive_bools)]
pub struct ThermostatFeatures {
    /// Heating is supported.
    pub heating: bool,

    /// Cooling is supported.
    pub cooling: bool,

    /// Occupancy sensing is supported.
    pub occupancy: bool,

    /// Weekly schedules are supported.
    pub schedule_configuration: bool,

    /// Setback is supported.
    pub setback: bool,

    /// Automatic switching between heating and cooling is supported.
    pub auto_mode: bool,

    /// The local temperature is not exposed to clients.
    pub local_temperature_not_exposed: bool,
}

impl ThermostatFeatures {
    /// Decodes a feature map. Unknown bits are ignored.
    #[must_use]
    pub const fn from_feature_map(map: u32) -> Self {
        Self {
            heating: map & feature::HEAT != 0,
            cooling: map & feature::COOL != 0,
            occupancy: map & feature::OCCUPANCY != 0,
            schedule_configuration: map & feature::SCHEDULE_CONFIGURATION != 0,
            setback: map & feature::SETBACK != 0,
            auto_mode: map & feature::AUTO_MODE != 0,
            local_temperature_not_exposed: map & feature::LOCAL_TEMPERATURE_NOT_EXPOSED != 0,
        }
    }

    /// Encodes the features back into a feature map.
    #[must_use]
    pub const fn to_feature_map(&self) -> u32 {
        let mut map = 0;
        if self.heating {
            map |= feature::HEAT;
        }
        if self.cooling {
            map |= feature::COOL;
        }
        if self.occupancy {
            map |= feature::OCCUPANCY;
        }
        if self.schedule_configuration {
            map |= feature::SCHEDULE_CONFIGURATION;
        }
        if self.setback {
            map |= feature::SETBACK;
        }
        if self.auto_mode {
            map |= feature::AUTO_MODE;
        }
        if self.local_temperature_not_exposed {
            map |= feature::LOCAL_TEMPERATURE_NOT_EXPOSED;
        }
        map
    }

    /// Returns the HVAC modes these features allow.
    ///
    /// Always contains [`HvacMode::Off`].
    #[must_use]
    pub fn supported_modes(&self) -> HvacModes {
        let mut modes = HvacModes::new();
        if self.heating {
            modes.insert(HvacMode::Heat);
        }
        if self.cooling {
            modes.insert(HvacMode::Cool);
        }
        if self.auto_mode {
            modes.insert(HvacMode::HeatCool);
        }
        modes
    }
}

/// Builder for thermostat features, mainly for simulated devices.
#[derive(Debug, Default)]
pub struct ThermostatFeaturesBuilder {
    inner: ThermostatFeatures,
}

impl ThermostatFeaturesBuilder {
    /// Creates a new builder with no features.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables heating.
    #[must_use]
    pub fn with_heating(mut self) -> Self {
        self.inner.heating = true;
        self
    }

    /// Enables cooling.
    #[must_use]
    pub fn with_cooling(mut self) -> Self {
        self.inner.cooling = true;
        self
    }

    /// Enables automatic heat/cool switching.
    #[must_use]
    pub fn with_auto_mode(mut self) -> Self {
        self.inner.auto_mode = true;
        self
    }

    /// Enables occupancy sensing.
    #[must_use]
    pub fn with_occupancy(mut self) -> Self {
        self.inner.occupancy = true;
        self
    }

    /// Builds the features.
    #[must_use]
    pub fn build(self) -> ThermostatFeatures {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_feature_map() {
        let features = ThermostatFeatures::from_feature_map(0);
        assert_eq!(features, ThermostatFeatures::default());
        assert_eq!(features.supported_modes(), HvacModes::new());
    }

    #[test]
    fn all_bits_decode() {
        let features = ThermostatFeatures::from_feature_map(0x7F);
        assert!(features.heating);
        assert!(features.cooling);
        assert!(features.occupancy);
        assert!(features.schedule_configuration);
        assert!(features.setback);
        assert!(features.auto_mode);
        assert!(features.local_temperature_not_exposed);
        assert_eq!(features.to_feature_map(), 0x7F);
    }

    #[test]
    fn unknown_bits_are_ignored() {
        let features = ThermostatFeatures::from_feature_map(0xFFFF_FF80);
        assert_eq!(features, ThermostatFeatures::default());
    }

    #[test]
    fn heat_only_modes() {
        let modes = ThermostatFeatures::from_feature_map(feature::HEAT).supported_modes();
        let listed: Vec<_> = modes.iter().collect();
        assert_eq!(listed, [HvacMode::Off, HvacMode::Heat]);
    }

    #[test]
    fn occupancy_does_not_add_modes() {
        let modes = ThermostatFeatures::from_feature_map(feature::OCCUPANCY).supported_modes();
        assert_eq!(modes.len(), 1);
    }

    #[test]
    fn builder_pattern() {
        let features = ThermostatFeaturesBuilder::new()
            .with_heating()
            .with_cooling()
            .with_auto_mode()
            .build();
        assert_eq!(features.to_feature_map(), 0b10_0011);
        assert!(features.supported_modes().contains(HvacMode::HeatCool));
    }
}
