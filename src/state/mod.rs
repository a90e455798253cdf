// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derived entity state.
//!
//! Entities recompute their state from the attribute cache on every device
//! update. The types here hold the result so the host can read it without
//! touching the cache, and so the platform can tell whether an update
//! actually changed anything.
//!
//! # Examples
//!
//! ```
//! use matter_entities::state::{ClimateState, EntityState};
//! use matter_entities::types::HvacMode;
//!
//! let mut state = EntityState::Climate(ClimateState::default());
//!
//! let mut heating = ClimateState::default();
//! heating.hvac_mode = HvacMode::Heat;
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(EntityState::Climate(heating.clone())));
//! assert!(!state.apply(EntityState::Climate(heating)));
//! ```

mod climate_state;
mod cover_state;
mod entity_state;

pub use climate_state::ClimateState;
pub use cover_state::CoverState;
pub use entity_state::EntityState;
