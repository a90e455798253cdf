// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host entities backed by Matter endpoints.
//!
//! An entity wraps one endpoint and exposes it the way a home-automation
//! host expects: read-only properties derived from the device's attributes,
//! and operations that translate host requests into cluster commands or
//! attribute writes.
//!
//! # Capabilities
//!
//! | Trait | Implemented by | Purpose |
//! |-------|----------------|---------|
//! | [`MatterEntity`] | every entity | Endpoint, kind, recompute from device |
//! | [`ClimateEntity`] | [`MatterClimate`] | Temperatures, HVAC mode and action |
//! | [`CoverEntity`] | [`MatterCover`] | Lift position, open/close/stop |
//!
//! # State Model
//!
//! Derived state changes only in [`MatterEntity::update_from_device`], which
//! the platform calls whenever the endpoint reports new attribute values.
//! Operations never touch derived state: after `set_hvac_mode` the entity
//! keeps reporting the old mode until the device confirms the new one.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use matter_entities::AdapterConfig;
//! use matter_entities::cluster::thermostat::attributes;
//! use matter_entities::entity::{ClimateEntity, MatterClimate, MatterEntity};
//! use matter_entities::protocol::InMemoryClient;
//! use matter_entities::types::{EndpointRef, HvacMode};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> matter_entities::Result<()> {
//! let endpoint = EndpointRef::new(1, 1);
//! let client = Arc::new(InMemoryClient::new());
//! client.set_attribute(endpoint, attributes::LOCAL_TEMPERATURE, 2150);
//! client.set_attribute(endpoint, attributes::SYSTEM_MODE, 4);
//!
//! let climate = MatterClimate::new(client, endpoint, &AdapterConfig::default());
//! climate.update_from_device();
//!
//! assert_eq!(climate.current_temperature(), Some(21.5));
//! assert_eq!(climate.hvac_mode(), HvacMode::Heat);
//! # Ok(())
//! # }
//! ```

mod climate;
mod cover;

pub use climate::{ClimateEntity, ClimateEntityFeature, MatterClimate, SetTemperature};
pub use cover::{CoverEntity, MatterCover};

use crate::discovery::PlatformKind;
use crate::state::EntityState;
use crate::types::EndpointRef;

/// Behavior shared by all entities.
pub trait MatterEntity {
    /// Returns the endpoint backing this entity.
    fn endpoint(&self) -> EndpointRef;

    /// Returns the kind of entity.
    fn platform(&self) -> PlatformKind;

    /// Recomputes the derived state from the attribute cache and returns it.
    ///
    /// Every derived field is replaced; nothing from the previous update
    /// survives.
    fn update_from_device(&self) -> EntityState;

    /// Returns the state computed by the last update.
    fn state(&self) -> EntityState;
}
