// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Matter cluster command definitions.
//!
//! This module provides typed representations of the cluster commands the
//! entities invoke through the [`Protocol`](crate::protocol::Protocol).
//!
//! # Available Commands
//!
//! | Command Type | Cluster | Purpose |
//! |-------------|---------|---------|
//! | [`SetpointRaiseLower`] | Thermostat | Shift a setpoint by tenths of a degree |
//! | [`WindowCoveringCommand`] | Window covering | Open, close or stop |
//!
//! [`Timed`] overrides the timed-request timeout of any command.
//!
//! # Command Structure
//!
//! Each command consists of:
//! - The cluster identifier
//! - The command identifier within the cluster
//! - A JSON payload with the command fields (empty object when there are none)
//! - An optional timed-request timeout for commands that require a timed
//!   interaction
//!
//! # Examples
//!
//! ```
//! use matter_entities::cluster::thermostat::SetpointAdjustMode;
//! use matter_entities::command::{Command, SetpointRaiseLower};
//!
//! let cmd = SetpointRaiseLower::from_delta(SetpointAdjustMode::Heat, Some(21.3), Some(21.0))
//!     .unwrap();
//!
//! assert_eq!(cmd.name(), "SetpointRaiseLower");
//! assert_eq!(cmd.payload(), serde_json::json!({"mode": 0, "amount": 3}));
//! ```

mod thermostat;
mod window_covering;

use std::time::Duration;

pub use thermostat::SetpointRaiseLower;
pub use window_covering::{DEFAULT_TIMED_REQUEST_TIMEOUT, WindowCoveringCommand};

/// A cluster command that can be sent to a Matter endpoint.
pub trait Command {
    /// Returns the command name as listed in the cluster specification.
    fn name(&self) -> &'static str;

    /// Returns the cluster the command belongs to.
    fn cluster_id(&self) -> u32;

    /// Returns the command identifier within the cluster.
    fn command_id(&self) -> u32;

    /// Returns the command fields.
    ///
    /// Commands without fields return an empty JSON object.
    fn payload(&self) -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::new())
    }

    /// Returns the timed-request timeout, if the command must be sent as a
    /// timed interaction.
    fn timed_request_timeout(&self) -> Option<Duration> {
        None
    }
}

/// A command sent with an explicit timed-request timeout.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use matter_entities::command::{Command, Timed, WindowCoveringCommand};
///
/// let cmd = Timed::new(WindowCoveringCommand::UpOrOpen, Duration::from_millis(2500));
/// assert_eq!(cmd.name(), "UpOrOpen");
/// assert_eq!(cmd.timed_request_timeout(), Some(Duration::from_millis(2500)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<C> {
    command: C,
    timeout: Duration,
}

impl<C: Command> Timed<C> {
    /// Wraps `command` so it is sent as a timed interaction.
    #[must_use]
    pub const fn new(command: C, timeout: Duration) -> Self {
        Self { command, timeout }
    }

    /// Returns the wrapped command.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.command
    }
}

impl<C: Command> Command for Timed<C> {
    fn name(&self) -> &'static str {
        self.command.name()
    }

    fn cluster_id(&self) -> u32 {
        self.command.cluster_id()
    }

    fn command_id(&self) -> u32 {
        self.command.command_id()
    }

    fn payload(&self) -> serde_json::Value {
        self.command.payload()
    }

    fn timed_request_timeout(&self) -> Option<Duration> {
        Some(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::thermostat::SetpointAdjustMode;

    #[test]
    fn default_payload_is_empty_object() {
        let cmd = WindowCoveringCommand::StopMotion;
        assert_eq!(cmd.payload(), serde_json::json!({}));
    }

    #[test]
    fn setpoint_command_has_no_timed_request() {
        let cmd = SetpointRaiseLower::new(SetpointAdjustMode::Cool, -5);
        assert_eq!(cmd.timed_request_timeout(), None);
    }

    #[test]
    fn timed_wrapper_keeps_payload() {
        let inner = SetpointRaiseLower::new(SetpointAdjustMode::Heat, 4);
        let cmd = Timed::new(inner, Duration::from_secs(2));
        assert_eq!(cmd.payload(), inner.payload());
        assert_eq!(cmd.command_id(), inner.command_id());
        assert_eq!(cmd.inner(), &inner);
    }
}
