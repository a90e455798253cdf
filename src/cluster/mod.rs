// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Matter cluster and device type identifiers used by the entities.
//!
//! Only the attributes, commands and enum values that the climate and cover
//! entities read or send are listed here.

pub mod thermostat;
pub mod window_covering;

/// Global attribute present on every cluster: the feature bitmap.
pub const FEATURE_MAP_ATTRIBUTE_ID: u32 = 0xFFFC;

/// Matter device type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DeviceType(pub u32);

impl DeviceType {
    /// Thermostat device type.
    pub const THERMOSTAT: Self = Self(0x0301);

    /// Window covering device type.
    pub const WINDOW_COVERING: Self = Self(0x0202);

    /// Returns the numeric device type identifier.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
