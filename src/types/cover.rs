// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Window covering status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Motion status of a cover as seen by the host.
///
/// Derived from successive lift position reports: a falling position means
/// the cover is closing, a rising one means it is opening.
///
/// # Examples
///
/// ```
/// use matter_entities::types::CoverStatus;
///
/// assert_eq!(CoverStatus::next(Some(100), Some(50)), CoverStatus::Closing);
/// assert_eq!(CoverStatus::next(Some(50), Some(0)), CoverStatus::Closed);
/// assert_eq!(CoverStatus::next(Some(0), Some(50)), CoverStatus::Opening);
/// assert_eq!(CoverStatus::next(Some(50), None), CoverStatus::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverStatus {
    /// At rest and at least partially open.
    Open,
    /// Moving towards open.
    Opening,
    /// Moving towards closed.
    Closing,
    /// Fully closed.
    Closed,
    /// No position reported.
    Unknown,
}

impl CoverStatus {
    /// Derives the status from the previous and the current lift position
    /// (0 = closed).
    #[must_use]
    pub fn next(previous: Option<u8>, current: Option<u8>) -> Self {
        match (previous, current) {
            (_, None) => Self::Unknown,
            (_, Some(0)) => Self::Closed,
            (Some(before), Some(now)) if now < before => Self::Closing,
            (Some(before), Some(now)) if now > before => Self::Opening,
            (_, Some(_)) => Self::Open,
        }
    }

    /// Returns the host string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` while the cover is moving.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

impl fmt::Display for CoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
