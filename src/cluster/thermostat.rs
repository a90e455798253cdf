// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat cluster (0x0201).

use crate::types::AttributeId;

use super::FEATURE_MAP_ATTRIBUTE_ID;

/// Cluster identifier.
pub const ID: u32 = 0x0201;

/// Attributes read or written by the climate entity.
pub mod attributes {
    use super::{AttributeId, FEATURE_MAP_ATTRIBUTE_ID, ID};

    /// Measured temperature, hundredths of a degree.
    pub const LOCAL_TEMPERATURE: AttributeId = AttributeId::new(ID, 0x0000);
    /// Occupancy bitmap.
    pub const OCCUPANCY: AttributeId = AttributeId::new(ID, 0x0002);
    /// Lowest heating setpoint the device accepts.
    pub const ABS_MIN_HEAT_SETPOINT_LIMIT: AttributeId = AttributeId::new(ID, 0x0003);
    /// Highest heating setpoint the device accepts.
    pub const ABS_MAX_HEAT_SETPOINT_LIMIT: AttributeId = AttributeId::new(ID, 0x0004);
    /// Lowest cooling setpoint the device accepts.
    pub const ABS_MIN_COOL_SETPOINT_LIMIT: AttributeId = AttributeId::new(ID, 0x0005);
    /// Highest cooling setpoint the device accepts.
    pub const ABS_MAX_COOL_SETPOINT_LIMIT: AttributeId = AttributeId::new(ID, 0x0006);
    /// Cooling setpoint while occupied.
    pub const OCCUPIED_COOLING_SETPOINT: AttributeId = AttributeId::new(ID, 0x0011);
    /// Heating setpoint while occupied.
    pub const OCCUPIED_HEATING_SETPOINT: AttributeId = AttributeId::new(ID, 0x0012);
    /// Cooling setpoint while unoccupied.
    pub const UNOCCUPIED_COOLING_SETPOINT: AttributeId = AttributeId::new(ID, 0x0013);
    /// Heating setpoint while unoccupied.
    pub const UNOCCUPIED_HEATING_SETPOINT: AttributeId = AttributeId::new(ID, 0x0014);
    /// Which modes the hardware can run in.
    pub const CONTROL_SEQUENCE_OF_OPERATION: AttributeId = AttributeId::new(ID, 0x001B);
    /// Requested operating mode, see [`SystemMode`](super::SystemMode).
    pub const SYSTEM_MODE: AttributeId = AttributeId::new(ID, 0x001C);
    /// Mode the thermostat is currently running in.
    pub const THERMOSTAT_RUNNING_MODE: AttributeId = AttributeId::new(ID, 0x001E);
    /// Setpoint hold status.
    pub const TEMPERATURE_SETPOINT_HOLD: AttributeId = AttributeId::new(ID, 0x0023);
    /// Active actuation stages, see [`running_state`](super::running_state).
    pub const THERMOSTAT_RUNNING_STATE: AttributeId = AttributeId::new(ID, 0x0029);
    /// Feature bitmap, see [`feature`](super::feature).
    pub const FEATURE_MAP: AttributeId = AttributeId::new(ID, FEATURE_MAP_ATTRIBUTE_ID);
}

/// Commands sent by the climate entity.
pub mod commands {
    /// Raise or lower a setpoint by a signed amount of tenths of a degree.
    pub const SETPOINT_RAISE_LOWER: u32 = 0x00;
}

/// Feature map bits.
pub mod feature {
    /// Heating supported.
    pub const HEAT: u32 = 1 << 0;
    /// Cooling supported.
    pub const COOL: u32 = 1 << 1;
    /// Occupancy sensing.
    pub const OCCUPANCY: u32 = 1 << 2;
    /// Weekly schedules.
    pub const SCHEDULE_CONFIGURATION: u32 = 1 << 3;
    /// Setback.
    pub const SETBACK: u32 = 1 << 4;
    /// Automatic heat/cool switching.
    pub const AUTO_MODE: u32 = 1 << 5;
    /// The device does not expose its local temperature.
    pub const LOCAL_TEMPERATURE_NOT_EXPOSED: u32 = 1 << 6;
}

/// `ThermostatRunningState` bits.
pub mod running_state {
    /// Heat stage 1.
    pub const HEAT: u16 = 1 << 0;
    /// Cool stage 1.
    pub const COOL: u16 = 1 << 1;
    /// Fan stage 1.
    pub const FAN: u16 = 1 << 2;
    /// Heat stage 2.
    pub const HEAT_STAGE_2: u16 = 1 << 3;
    /// Cool stage 2.
    pub const COOL_STAGE_2: u16 = 1 << 4;
    /// Fan stage 2.
    pub const FAN_STAGE_2: u16 = 1 << 5;
    /// Fan stage 3.
    pub const FAN_STAGE_3: u16 = 1 << 6;

    /// Any heating stage.
    pub const ANY_HEAT: u16 = HEAT | HEAT_STAGE_2;
    /// Any cooling stage.
    pub const ANY_COOL: u16 = COOL | COOL_STAGE_2;
    /// Any fan stage.
    pub const ANY_FAN: u16 = FAN | FAN_STAGE_2 | FAN_STAGE_3;
}

/// Values of the `SystemMode` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SystemMode {
    /// Off.
    Off = 0,
    /// Automatic heating and cooling.
    Auto = 1,
    /// Cooling.
    Cool = 3,
    /// Heating.
    Heat = 4,
    /// Emergency (auxiliary) heating.
    EmergencyHeat = 5,
    /// Cooling ahead of an occupancy change.
    Precooling = 6,
    /// Fan only.
    FanOnly = 7,
    /// Dehumidifying.
    Dry = 8,
    /// Sleep.
    Sleep = 9,
}

impl SystemMode {
    /// Decodes a wire value. Reserved and unknown codes return `None`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Off),
            1 => Some(Self::Auto),
            3 => Some(Self::Cool),
            4 => Some(Self::Heat),
            5 => Some(Self::EmergencyHeat),
            6 => Some(Self::Precooling),
            7 => Some(Self::FanOnly),
            8 => Some(Self::Dry),
            9 => Some(Self::Sleep),
            _ => None,
        }
    }

    /// Returns the wire value.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Values of the `SetpointRaiseLower` mode field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum SetpointAdjustMode {
    /// Adjust the heating setpoint.
    Heat = 0,
    /// Adjust the cooling setpoint.
    Cool = 1,
    /// Adjust both setpoints.
    Both = 2,
}

impl SetpointAdjustMode {
    /// Returns the wire value.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}
