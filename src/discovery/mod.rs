// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity discovery for Matter endpoints.
//!
//! When the Matter client reports a new endpoint, the platform checks it
//! against every [`DiscoverySchema`] in [`DISCOVERY_SCHEMAS`] and creates one
//! entity per matching schema.
//!
//! # Matching Rules
//!
//! A schema matches an endpoint when:
//!
//! - the endpoint has one of the schema's device types (or the schema lists
//!   none), and
//! - every required attribute is present on the endpoint.
//!
//! Optional attributes never affect matching. They are the other attributes
//! the entity reads, so a host knows which ones to subscribe to.
//!
//! # Examples
//!
//! ```
//! use matter_entities::cluster::{DeviceType, thermostat};
//! use matter_entities::discovery::{PlatformKind, discover};
//!
//! let attributes = [thermostat::attributes::LOCAL_TEMPERATURE];
//! let schemas = discover(&[DeviceType::THERMOSTAT], &attributes);
//!
//! assert_eq!(schemas.len(), 1);
//! assert_eq!(schemas[0].platform, PlatformKind::Climate);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cluster::{DeviceType, thermostat, window_covering};
use crate::types::AttributeId;

/// Kind of host entity a schema produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    /// A climate entity backed by a thermostat.
    Climate,
    /// A cover entity backed by a window covering.
    Cover,
}

impl PlatformKind {
    /// Returns the host platform name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Cover => "cover",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes when an entity is created for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoverySchema {
    /// Kind of entity created.
    pub platform: PlatformKind,
    /// Stable key identifying the entity description.
    pub key: &'static str,
    /// Device types that qualify. Empty means any device type.
    pub device_types: &'static [DeviceType],
    /// Attributes that must be present.
    pub required_attributes: &'static [AttributeId],
    /// Attributes read when present.
    pub optional_attributes: &'static [AttributeId],
}

impl DiscoverySchema {
    /// Returns `true` if an endpoint with the given device types and
    /// attributes qualifies for this schema.
    #[must_use]
    pub fn matches(&self, device_types: &[DeviceType], attributes: &[AttributeId]) -> bool {
        let type_matches = self.device_types.is_empty()
            || self.device_types.iter().any(|t| device_types.contains(t));

        type_matches
            && self
                .required_attributes
                .iter()
                .all(|required| attributes.contains(required))
    }

    /// Returns every attribute the entity reads, required first.
    pub fn attributes(&self) -> impl Iterator<Item = AttributeId> + '_ {
        self.required_attributes
            .iter()
            .chain(self.optional_attributes)
            .copied()
    }
}

/// Schema for thermostats.
pub const THERMOSTAT_SCHEMA: DiscoverySchema = DiscoverySchema {
    platform: PlatformKind::Climate,
    key: "MatterThermostat",
    device_types: &[DeviceType::THERMOSTAT],
    required_attributes: &[thermostat::attributes::LOCAL_TEMPERATURE],
    optional_attributes: &[
        thermostat::attributes::FEATURE_MAP,
        thermostat::attributes::CONTROL_SEQUENCE_OF_OPERATION,
        thermostat::attributes::OCCUPANCY,
        thermostat::attributes::OCCUPIED_COOLING_SETPOINT,
        thermostat::attributes::OCCUPIED_HEATING_SETPOINT,
        thermostat::attributes::SYSTEM_MODE,
        thermostat::attributes::THERMOSTAT_RUNNING_MODE,
        thermostat::attributes::THERMOSTAT_RUNNING_STATE,
        thermostat::attributes::TEMPERATURE_SETPOINT_HOLD,
        thermostat::attributes::UNOCCUPIED_COOLING_SETPOINT,
        thermostat::attributes::UNOCCUPIED_HEATING_SETPOINT,
    ],
};

/// Schema for window coverings.
pub const WINDOW_COVERING_SCHEMA: DiscoverySchema = DiscoverySchema {
    platform: PlatformKind::Cover,
    key: "MatterCover",
    device_types: &[DeviceType::WINDOW_COVERING],
    required_attributes: &[window_covering::attributes::CURRENT_POSITION_LIFT_PERCENTAGE],
    optional_attributes: &[
        window_covering::attributes::OPERATIONAL_STATUS,
        window_covering::attributes::FEATURE_MAP,
    ],
};

/// All known schemas.
pub const DISCOVERY_SCHEMAS: &[DiscoverySchema] = &[THERMOSTAT_SCHEMA, WINDOW_COVERING_SCHEMA];

/// Returns the schemas an endpoint qualifies for.
#[must_use]
pub fn discover(
    device_types: &[DeviceType],
    attributes: &[AttributeId],
) -> Vec<&'static DiscoverySchema> {
    DISCOVERY_SCHEMAS
        .iter()
        .filter(|schema| schema.matches(device_types, attributes))
        .collect()
}
