// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entity backed by a thermostat endpoint.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::MatterEntity;
use crate::cluster::thermostat::{SetpointAdjustMode, attributes};
use crate::command::SetpointRaiseLower;
use crate::config::AdapterConfig;
use crate::discovery::PlatformKind;
use crate::error::{Error, Result};
use crate::mapping::{
    feature_map_to_hvac_modes, hvac_mode_to_system_mode, running_state_to_action,
    system_mode_to_hvac_mode,
};
use crate::protocol::Protocol;
use crate::state::{ClimateState, EntityState};
use crate::types::{
    AttributeId, EndpointRef, HvacAction, HvacMode, HvacModes, TemperatureUnit, to_degrees,
};

/// Optional features a climate entity offers the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateEntityFeature {
    /// A single target temperature can be set.
    TargetTemperature,
    /// A low/high target range can be set.
    TargetTemperatureRange,
}

const SUPPORTED_FEATURES: &[ClimateEntityFeature] = &[
    ClimateEntityFeature::TargetTemperature,
    ClimateEntityFeature::TargetTemperatureRange,
];

/// A host request to change temperatures, optionally together with the mode.
///
/// Which fields are needed depends on the mode the thermostat is in once the
/// optional mode change has been written: `temperature` for heat or cool, at
/// least one of `target_temp_low` and `target_temp_high` for heat/cool.
///
/// # Examples
///
/// ```
/// use matter_entities::entity::SetTemperature;
/// use matter_entities::types::HvacMode;
///
/// let request = SetTemperature::new()
///     .with_hvac_mode(HvacMode::HeatCool)
///     .with_range(19.0, 24.0);
///
/// assert_eq!(request.target_temp_low, Some(19.0));
///
/// // Host service data deserializes directly
/// let request: SetTemperature = serde_json::from_str(r#"{"temperature": 21.5}"#).unwrap();
/// assert_eq!(request.temperature, Some(21.5));
/// assert_eq!(request.hvac_mode, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetTemperature {
    /// Mode to switch to before adjusting setpoints.
    pub hvac_mode: Option<HvacMode>,
    /// Target for heat or cool mode.
    pub temperature: Option<f64>,
    /// Heating setpoint for heat/cool mode.
    pub target_temp_low: Option<f64>,
    /// Cooling setpoint for heat/cool mode.
    pub target_temp_high: Option<f64>,
}

impl SetTemperature {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches mode first.
    #[must_use]
    pub fn with_hvac_mode(mut self, mode: HvacMode) -> Self {
        self.hvac_mode = Some(mode);
        self
    }

    /// Sets the single target temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the heating setpoint of the range.
    #[must_use]
    pub fn with_target_temp_low(mut self, low: f64) -> Self {
        self.target_temp_low = Some(low);
        self
    }

    /// Sets the cooling setpoint of the range.
    #[must_use]
    pub fn with_target_temp_high(mut self, high: f64) -> Self {
        self.target_temp_high = Some(high);
        self
    }

    /// Sets both setpoints of the range.
    #[must_use]
    pub fn with_range(self, low: f64, high: f64) -> Self {
        self.with_target_temp_low(low).with_target_temp_high(high)
    }
}

/// Climate capability: temperatures, HVAC mode and action.
#[allow(async_fn_in_trait)]
pub trait ClimateEntity: MatterEntity {
    /// Returns the derived climate state.
    fn climate_state(&self) -> ClimateState;

    /// Returns the measured temperature in degrees.
    fn current_temperature(&self) -> Option<f64> {
        self.climate_state().current_temperature
    }

    /// Returns the current operating mode.
    fn hvac_mode(&self) -> HvacMode {
        self.climate_state().hvac_mode
    }

    /// Returns what the device is doing, if it reports it.
    fn hvac_action(&self) -> Option<HvacAction> {
        self.climate_state().hvac_action
    }

    /// Returns the modes the device supports.
    fn hvac_modes(&self) -> HvacModes {
        self.climate_state().hvac_modes
    }

    /// Returns the setpoint for the current mode.
    fn target_temperature(&self) -> Option<f64> {
        self.climate_state().target_temperature
    }

    /// Returns the setpoint the device currently holds for `mode`: the
    /// cooling setpoint in cool mode, the heating setpoint otherwise.
    ///
    /// Unlike the other properties this reads the attribute cache directly.
    fn get_target_temperature(&self, mode: HvacMode) -> Option<f64>;

    /// Returns the heating setpoint.
    fn target_temperature_low(&self) -> Option<f64> {
        self.climate_state().target_temperature_low
    }

    /// Returns the cooling setpoint.
    fn target_temperature_high(&self) -> Option<f64> {
        self.climate_state().target_temperature_high
    }

    /// Returns the lowest settable temperature for the current mode.
    fn min_temp(&self) -> f64 {
        self.climate_state().min_temp
    }

    /// Returns the highest settable temperature for the current mode.
    fn max_temp(&self) -> f64 {
        self.climate_state().max_temp
    }

    /// Returns the features offered to the host.
    fn supported_features(&self) -> &'static [ClimateEntityFeature] {
        SUPPORTED_FEATURES
    }

    /// Returns the unit of every temperature this entity reports.
    fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::Celsius
    }

    /// Changes the mode and/or setpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if the request lacks the values the
    /// mode needs, [`Error::UnsupportedMode`] if the requested mode cannot be
    /// written, and [`Error::Protocol`] if the client fails.
    async fn set_temperature(&self, request: SetTemperature) -> Result<()>;

    /// Writes a new operating mode to the device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMode`] for modes the device cannot be set
    /// to remotely, and [`Error::Protocol`] if the write fails.
    async fn set_hvac_mode(&self, mode: HvacMode) -> Result<()>;
}

/// A climate entity for a thermostat endpoint.
#[derive(Debug)]
pub struct MatterClimate<P: Protocol> {
    protocol: Arc<P>,
    endpoint: EndpointRef,
    default_min_temp: f64,
    default_max_temp: f64,
    state: RwLock<ClimateState>,
}

impl<P: Protocol> MatterClimate<P> {
    /// Creates an entity with no derived state.
    ///
    /// Call [`MatterEntity::update_from_device`] before reading properties.
    #[must_use]
    pub fn new(protocol: Arc<P>, endpoint: EndpointRef, config: &AdapterConfig) -> Self {
        Self {
            protocol,
            endpoint,
            default_min_temp: config.default_min_temp,
            default_max_temp: config.default_max_temp,
            state: RwLock::new(ClimateState::with_limits(
                config.default_min_temp,
                config.default_max_temp,
            )),
        }
    }

    fn degrees(&self, attribute: AttributeId) -> Option<f64> {
        to_degrees(self.protocol.read::<i64>(self.endpoint, attribute))
    }

    fn heating_setpoint(&self) -> Option<f64> {
        self.degrees(attributes::OCCUPIED_HEATING_SETPOINT)
    }

    fn cooling_setpoint(&self) -> Option<f64> {
        self.degrees(attributes::OCCUPIED_COOLING_SETPOINT)
    }

    /// Settable range for `mode`, from the absolute setpoint limits when
    /// the device reports them.
    fn limits(&self, mode: HvacMode) -> (f64, f64) {
        let (min, max) = match mode {
            HvacMode::Heat => (
                attributes::ABS_MIN_HEAT_SETPOINT_LIMIT,
                attributes::ABS_MAX_HEAT_SETPOINT_LIMIT,
            ),
            HvacMode::Cool => (
                attributes::ABS_MIN_COOL_SETPOINT_LIMIT,
                attributes::ABS_MAX_COOL_SETPOINT_LIMIT,
            ),
            HvacMode::HeatCool => (
                attributes::ABS_MIN_HEAT_SETPOINT_LIMIT,
                attributes::ABS_MAX_COOL_SETPOINT_LIMIT,
            ),
            HvacMode::Off | HvacMode::Dry | HvacMode::FanOnly => {
                return (self.default_min_temp, self.default_max_temp);
            }
        };
        (
            self.degrees(min).unwrap_or(self.default_min_temp),
            self.degrees(max).unwrap_or(self.default_max_temp),
        )
    }

    /// Mode as currently held in the client's cache, which may be newer than
    /// the derived state.
    fn reported_hvac_mode(&self) -> HvacMode {
        self.protocol
            .read::<u8>(self.endpoint, attributes::SYSTEM_MODE)
            .map_or(HvacMode::Off, system_mode_to_hvac_mode)
    }

    fn setpoint_command(&self, request: &SetTemperature) -> Result<Option<SetpointRaiseLower>> {
        let command = match self.reported_hvac_mode() {
            mode @ (HvacMode::Heat | HvacMode::Cool) => {
                let temperature = request
                    .temperature
                    .ok_or(Error::MissingArgument("temperature"))?;
                let adjust = if mode == HvacMode::Cool {
                    SetpointAdjustMode::Cool
                } else {
                    SetpointAdjustMode::Heat
                };
                SetpointRaiseLower::from_delta(
                    adjust,
                    Some(temperature),
                    self.get_target_temperature(mode),
                )
            }
            HvacMode::HeatCool => {
                if request.target_temp_low.is_none() && request.target_temp_high.is_none() {
                    return Err(Error::MissingArgument("target_temp_low or target_temp_high"));
                }
                // Hosts send both bounds, so only the one that moved produces a command
                SetpointRaiseLower::from_delta(
                    SetpointAdjustMode::Heat,
                    request.target_temp_low,
                    self.heating_setpoint(),
                )
                .or_else(|| {
                    SetpointRaiseLower::from_delta(
                        SetpointAdjustMode::Cool,
                        request.target_temp_high,
                        self.cooling_setpoint(),
                    )
                })
            }
            HvacMode::Off | HvacMode::Dry | HvacMode::FanOnly => None,
        };
        Ok(command)
    }
}

impl<P: Protocol> MatterEntity for MatterClimate<P> {
    fn endpoint(&self) -> EndpointRef {
        self.endpoint
    }

    fn platform(&self) -> PlatformKind {
        PlatformKind::Climate
    }

    fn update_from_device(&self) -> EntityState {
        let running_state = self
            .protocol
            .read::<u16>(self.endpoint, attributes::THERMOSTAT_RUNNING_STATE);
        let feature_map = self
            .protocol
            .read::<u32>(self.endpoint, attributes::FEATURE_MAP)
            .unwrap_or_default();

        let hvac_mode = self.reported_hvac_mode();
        let (min_temp, max_temp) = self.limits(hvac_mode);

        let state = ClimateState {
            current_temperature: self.degrees(attributes::LOCAL_TEMPERATURE),
            hvac_mode,
            hvac_action: running_state_to_action(running_state),
            hvac_modes: feature_map_to_hvac_modes(feature_map),
            target_temperature: self.get_target_temperature(hvac_mode),
            target_temperature_low: self.heating_setpoint(),
            target_temperature_high: self.cooling_setpoint(),
            min_temp,
            max_temp,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            hvac_mode = %state.hvac_mode,
            current_temperature = ?state.current_temperature,
            target_temperature = ?state.target_temperature,
            "Updated climate entity from device"
        );

        *self.state.write() = state.clone();
        EntityState::Climate(state)
    }

    fn state(&self) -> EntityState {
        EntityState::Climate(self.climate_state())
    }
}

impl<P: Protocol> ClimateEntity for MatterClimate<P> {
    fn climate_state(&self) -> ClimateState {
        self.state.read().clone()
    }

    fn current_temperature(&self) -> Option<f64> {
        self.state.read().current_temperature
    }

    fn hvac_mode(&self) -> HvacMode {
        self.state.read().hvac_mode
    }

    fn hvac_action(&self) -> Option<HvacAction> {
        self.state.read().hvac_action
    }

    fn get_target_temperature(&self, mode: HvacMode) -> Option<f64> {
        if mode == HvacMode::Cool {
            self.cooling_setpoint()
        } else {
            self.heating_setpoint()
        }
    }

    fn target_temperature(&self) -> Option<f64> {
        self.state.read().target_temperature
    }

    fn min_temp(&self) -> f64 {
        self.state.read().min_temp
    }

    fn max_temp(&self) -> f64 {
        self.state.read().max_temp
    }

    async fn set_temperature(&self, request: SetTemperature) -> Result<()> {
        if let Some(mode) = request.hvac_mode {
            self.set_hvac_mode(mode).await?;
        }

        let Some(command) = self.setpoint_command(&request)? else {
            tracing::debug!(endpoint = %self.endpoint, "Setpoints already at target");
            return Ok(());
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            mode = ?command.mode(),
            amount = command.amount(),
            "Adjusting setpoint"
        );
        self.protocol.send_command(self.endpoint, &command).await?;
        Ok(())
    }

    async fn set_hvac_mode(&self, mode: HvacMode) -> Result<()> {
        let system_mode = hvac_mode_to_system_mode(mode)?;
        let path = self.endpoint.attribute_path(attributes::SYSTEM_MODE);

        tracing::debug!(endpoint = %self.endpoint, hvac_mode = %mode, "Writing system mode");
        self.protocol
            .write_attribute(self.endpoint.node_id, &path, system_mode.into())
            .await?;
        Ok(())
    }
}
