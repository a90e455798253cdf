// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State of any entity kind.

use serde::{Deserialize, Serialize};

use super::{ClimateState, CoverState};
use crate::discovery::PlatformKind;

/// State of an entity, tagged by entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "snake_case")]
pub enum EntityState {
    /// State of a climate entity.
    Climate(ClimateState),
    /// State of a window covering entity.
    Cover(CoverState),
}

impl EntityState {
    /// Returns the kind of entity this state belongs to.
    #[must_use]
    pub const fn platform(&self) -> PlatformKind {
        match self {
            Self::Climate(_) => PlatformKind::Climate,
            Self::Cover(_) => PlatformKind::Cover,
        }
    }

    /// Returns the climate state, if this is one.
    #[must_use]
    pub const fn as_climate(&self) -> Option<&ClimateState> {
        match self {
            Self::Climate(state) => Some(state),
            Self::Cover(_) => None,
        }
    }

    /// Returns the cover state, if this is one.
    #[must_use]
    pub const fn as_cover(&self) -> Option<&CoverState> {
        match self {
            Self::Cover(state) => Some(state),
            Self::Climate(_) => None,
        }
    }

    /// Replaces the state and returns whether it actually changed.
    pub fn apply(&mut self, new: Self) -> bool {
        if *self == new {
            false
        } else {
            *self = new;
            true
        }
    }
}

impl From<ClimateState> for EntityState {
    fn from(state: ClimateState) -> Self {
        Self::Climate(state)
    }
}

impl From<CoverState> for EntityState {
    fn from(state: CoverState) -> Self {
        Self::Cover(state)
    }
}
