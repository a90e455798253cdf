// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `matter_entities` - Climate and cover entities for Matter devices.
//!
//! This library turns Matter thermostat and window covering endpoints into
//! home-automation entities. It derives host-facing state from the attribute
//! values a Matter client caches, and translates host requests into cluster
//! commands and attribute writes.
//!
//! # Supported Features
//!
//! - **Climate**: Current temperature, HVAC mode and action, supported modes,
//!   setpoints and limits, setpoint adjustment, mode changes
//! - **Cover**: Lift position, open/closing/closed status, open, close, stop
//! - **Discovery**: Entity creation from an endpoint's device types and attributes
//! - **Events**: Broadcast of entity lifecycle and state changes
//!
//! The Matter client itself (commissioning, subscriptions, sessions) is not
//! part of this library. It plugs in through the [`Protocol`](protocol::Protocol)
//! trait.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use matter_entities::cluster::{DeviceType, thermostat::attributes};
//! use matter_entities::entity::{ClimateEntity, SetTemperature};
//! use matter_entities::protocol::InMemoryClient;
//! use matter_entities::types::{EndpointRef, HvacMode};
//! use matter_entities::{AdapterConfig, Platform};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> matter_entities::Result<()> {
//! let endpoint = EndpointRef::new(1, 1);
//! let client = Arc::new(InMemoryClient::new());
//! client.set_attribute(endpoint, attributes::LOCAL_TEMPERATURE, 2000);
//! client.set_attribute(endpoint, attributes::SYSTEM_MODE, 4);
//! client.set_attribute(endpoint, attributes::OCCUPIED_HEATING_SETPOINT, 2000);
//!
//! let platform = Platform::new(Arc::clone(&client), AdapterConfig::default());
//! let attrs = client.available_attributes(endpoint);
//! platform.add_endpoint(endpoint, &[DeviceType::THERMOSTAT], &attrs);
//!
//! let climate = platform.climate(endpoint).unwrap();
//! assert_eq!(climate.hvac_mode(), HvacMode::Heat);
//!
//! // Raise the heating setpoint by half a degree
//! climate
//!     .set_temperature(SetTemperature::new().with_temperature(20.5))
//!     .await?;
//! assert_eq!(client.sent_commands()[0].payload["amount"], 5);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Operations return [`Result`]. Missing request arguments and unsupported
//! modes are reported to the caller as-is; client failures are wrapped in
//! [`Error::Protocol`] without retry. Unexpected values reported by a device
//! never produce errors.

pub mod cache;
mod capabilities;
pub mod cluster;
pub mod command;
mod config;
pub mod discovery;
pub mod entity;
pub mod error;
pub mod event;
pub mod mapping;
mod platform;
pub mod protocol;
pub mod state;
pub mod types;

pub use capabilities::{ThermostatFeatures, ThermostatFeaturesBuilder};
pub use command::{Command, SetpointRaiseLower, Timed, WindowCoveringCommand};
pub use config::{AdapterConfig, DEFAULT_MAX_TEMP, DEFAULT_MIN_TEMP};
pub use entity::{
    ClimateEntity, ClimateEntityFeature, CoverEntity, MatterClimate, MatterCover, MatterEntity,
    SetTemperature,
};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use event::{EntityEvent, EntityId, EventBus};
pub use platform::Platform;
pub use state::{ClimateState, CoverState, EntityState};
pub use types::{
    AttributeId, AttributePath, CoverStatus, EndpointRef, HvacAction, HvacMode, HvacModes,
    TemperatureUnit,
};
