// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the entities.
//!
//! # Types
//!
//! - [`EndpointRef`] - A node/endpoint pair addressing one device function
//! - [`AttributeId`] / [`AttributePath`] - Cluster attribute addressing
//! - [`HvacMode`] / [`HvacAction`] / [`HvacModes`] - Climate entity values
//! - [`CoverStatus`] - Cover entity motion status
//! - [`to_degrees`] / [`to_raw`] - Fixed-point temperature conversion

mod cover;
mod endpoint;
mod hvac;
mod temperature;

pub use cover::CoverStatus;
pub use endpoint::{AttributeId, AttributePath, EndpointRef};
pub use hvac::{HvacAction, HvacMode, HvacModes};
pub use temperature::{TEMPERATURE_SCALING_FACTOR, TemperatureUnit, to_degrees, to_raw};
