// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat setpoint commands.
//!
//! Setpoints are never written as absolute values. The climate entity sends
//! `SetpointRaiseLower` with the difference between the requested and the
//! currently reported setpoint, in tenths of a degree.

use crate::cluster::thermostat::{self, SetpointAdjustMode};
use crate::command::Command;

/// Setpoint resolution of the command: one unit is a tenth of a degree.
const TENTHS_PER_DEGREE: f64 = 10.0;

/// Command to shift a setpoint by a signed amount.
///
/// # Examples
///
/// ```
/// use matter_entities::cluster::thermostat::SetpointAdjustMode;
/// use matter_entities::command::SetpointRaiseLower;
///
/// // Already at target: nothing to send
/// assert!(SetpointRaiseLower::from_delta(SetpointAdjustMode::Heat, Some(21.0), Some(21.0)).is_none());
///
/// // Unknown current setpoint: nothing to send
/// assert!(SetpointRaiseLower::from_delta(SetpointAdjustMode::Heat, Some(21.0), None).is_none());
///
/// // Lower the cooling setpoint by 1.5 degrees
/// let cmd = SetpointRaiseLower::from_delta(SetpointAdjustMode::Cool, Some(23.5), Some(25.0)).unwrap();
/// assert_eq!(cmd.amount(), -15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetpointRaiseLower {
    mode: SetpointAdjustMode,
    amount: i8,
}

impl SetpointRaiseLower {
    /// Creates a command with an explicit amount in tenths of a degree.
    #[must_use]
    pub const fn new(mode: SetpointAdjustMode, amount: i8) -> Self {
        Self { mode, amount }
    }

    /// Builds the command that moves `current` to `target`.
    ///
    /// Returns `None` when either value is unknown or when the difference
    /// rounds to zero tenths of a degree. Differences beyond the range of the
    /// wire field (about ±12.7 degrees) are clamped; the next update will report
    /// the intermediate setpoint and a further call closes the gap.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_delta(
        mode: SetpointAdjustMode,
        target: Option<f64>,
        current: Option<f64>,
    ) -> Option<Self> {
        let (target, current) = (target?, current?);
        let tenths = ((target - current) * TENTHS_PER_DEGREE).round();

        if tenths == 0.0 || !tenths.is_finite() {
            return None;
        }

        let (min, max) = (f64::from(i8::MIN), f64::from(i8::MAX));
        if !(min..=max).contains(&tenths) {
            tracing::debug!(requested = tenths, "Clamping setpoint delta to the wire range");
        }
        let amount = tenths.clamp(min, max) as i8;

        Some(Self { mode, amount })
    }

    /// Returns which setpoint is adjusted.
    #[must_use]
    pub const fn mode(&self) -> SetpointAdjustMode {
        self.mode
    }

    /// Returns the signed adjustment in tenths of a degree.
    #[must_use]
    pub const fn amount(&self) -> i8 {
        self.amount
    }
}

impl Command for SetpointRaiseLower {
    fn name(&self) -> &'static str {
        "SetpointRaiseLower"
    }

    fn cluster_id(&self) -> u32 {
        thermostat::ID
    }

    fn command_id(&self) -> u32 {
        thermostat::commands::SETPOINT_RAISE_LOWER
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "mode": self.mode.code(),
            "amount": self.amount,
        })
    }
}
