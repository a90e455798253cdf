// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Window covering motion commands.

use std::time::Duration;

use crate::cluster::window_covering;
use crate::command::Command;

/// Default timed-request timeout for window covering commands.
pub const DEFAULT_TIMED_REQUEST_TIMEOUT: Duration = Duration::from_millis(1000);

/// Command to move or stop a window covering.
///
/// Window covering commands are sent as timed interactions.
///
/// # Examples
///
/// ```
/// use matter_entities::command::{Command, WindowCoveringCommand};
///
/// let close = WindowCoveringCommand::DownOrClose;
/// assert_eq!(close.name(), "DownOrClose");
/// assert_eq!(close.command_id(), 0x01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowCoveringCommand {
    /// Move to the fully open position.
    UpOrOpen,
    /// Move to the fully closed position.
    DownOrClose,
    /// Stop any motion.
    StopMotion,
}

impl Command for WindowCoveringCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::UpOrOpen => "UpOrOpen",
            Self::DownOrClose => "DownOrClose",
            Self::StopMotion => "StopMotion",
        }
    }

    fn cluster_id(&self) -> u32 {
        window_covering::ID
    }

    fn command_id(&self) -> u32 {
        match self {
            Self::UpOrOpen => window_covering::commands::UP_OR_OPEN,
            Self::DownOrClose => window_covering::commands::DOWN_OR_CLOSE,
            Self::StopMotion => window_covering::commands::STOP_MOTION,
        }
    }

    fn timed_request_timeout(&self) -> Option<Duration> {
        Some(DEFAULT_TIMED_REQUEST_TIMEOUT)
    }
}
