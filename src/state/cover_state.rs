// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover entity state.

use serde::{Deserialize, Serialize};

use crate::types::CoverStatus;

/// Derived state of a window covering entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverState {
    /// Lift position in percent, 0 = closed and 100 = fully open.
    pub position: Option<u8>,
    /// Motion status derived from successive positions.
    pub status: CoverStatus,
}

impl CoverState {
    /// Creates the state for a first position report.
    ///
    /// A known position starts out as open (or closed at 0), an unknown one
    /// as unknown.
    #[must_use]
    pub fn new(position: Option<u8>) -> Self {
        Self {
            position,
            status: CoverStatus::next(None, position),
        }
    }

    /// Returns the state after a new position report.
    #[must_use]
    pub fn advance(&self, position: Option<u8>) -> Self {
        Self {
            position,
            status: CoverStatus::next(self.position, position),
        }
    }

    /// Returns `true` if the cover reports being fully closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status == CoverStatus::Closed
    }
}

impl Default for CoverState {
    fn default() -> Self {
        Self::new(None)
    }
}
