// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover entity backed by a window covering endpoint.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use super::MatterEntity;
use crate::cluster::window_covering::attributes;
use crate::command::{Command, Timed, WindowCoveringCommand};
use crate::config::AdapterConfig;
use crate::discovery::PlatformKind;
use crate::error::Result;
use crate::protocol::Protocol;
use crate::state::{CoverState, EntityState};
use crate::types::{CoverStatus, EndpointRef};

/// Cover capability: lift position and motion commands.
#[allow(async_fn_in_trait)]
pub trait CoverEntity: MatterEntity {
    /// Returns the derived cover state.
    fn cover_state(&self) -> CoverState;

    /// Returns the lift position in percent, if reported.
    fn current_cover_position(&self) -> Option<u8> {
        self.cover_state().position
    }

    /// Returns the motion status.
    fn status(&self) -> CoverStatus {
        self.cover_state().status
    }

    /// Returns `true` if the cover is fully closed.
    fn is_closed(&self) -> bool {
        self.cover_state().is_closed()
    }

    /// Starts opening the cover.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`](crate::Error::Protocol) if the command fails.
    async fn open_cover(&self) -> Result<()>;

    /// Starts closing the cover.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`](crate::Error::Protocol) if the command fails.
    async fn close_cover(&self) -> Result<()>;

    /// Stops any motion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`](crate::Error::Protocol) if the command fails.
    async fn stop_cover(&self) -> Result<()>;
}

/// A cover entity for a window covering endpoint.
#[derive(Debug)]
pub struct MatterCover<P: Protocol> {
    protocol: Arc<P>,
    endpoint: EndpointRef,
    command_timeout: Duration,
    state: RwLock<CoverState>,
}

impl<P: Protocol> MatterCover<P> {
    /// Creates an entity with no derived state.
    #[must_use]
    pub fn new(protocol: Arc<P>, endpoint: EndpointRef, config: &AdapterConfig) -> Self {
        Self {
            protocol,
            endpoint,
            command_timeout: config.cover_command_timeout(),
            state: RwLock::new(CoverState::default()),
        }
    }

    async fn send(&self, command: WindowCoveringCommand) -> Result<()> {
        let command = Timed::new(command, self.command_timeout);
        tracing::debug!(
            endpoint = %self.endpoint,
            command = command.inner().name(),
            "Sending window covering command"
        );
        self.protocol.send_command(self.endpoint, &command).await?;
        Ok(())
    }
}

impl<P: Protocol> MatterEntity for MatterCover<P> {
    fn endpoint(&self) -> EndpointRef {
        self.endpoint
    }

    fn platform(&self) -> PlatformKind {
        PlatformKind::Cover
    }

    fn update_from_device(&self) -> EntityState {
        let position = self
            .protocol
            .read::<u8>(self.endpoint, attributes::CURRENT_POSITION_LIFT_PERCENTAGE);

        let state = {
            let mut state = self.state.write();
            *state = state.advance(position);
            *state
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            position = ?state.position,
            status = %state.status,
            "Updated cover entity from device"
        );
        EntityState::Cover(state)
    }

    fn state(&self) -> EntityState {
        EntityState::Cover(self.cover_state())
    }
}

impl<P: Protocol> CoverEntity for MatterCover<P> {
    fn cover_state(&self) -> CoverState {
        *self.state.read()
    }

    async fn open_cover(&self) -> Result<()> {
        self.send(WindowCoveringCommand::UpOrOpen).await
    }

    async fn close_cover(&self) -> Result<()> {
        self.send(WindowCoveringCommand::DownOrClose).await
    }

    async fn stop_cover(&self) -> Result<()> {
        self.send(WindowCoveringCommand::StopMotion).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::window_covering;
    use crate::protocol::InMemoryClient;

    fn endpoint() -> EndpointRef {
        EndpointRef::new(4, 1)
    }

    #[tokio::test]
    async fn commands_use_configured_timeout() {
        let client = Arc::new(InMemoryClient::new());
        let config =
            AdapterConfig::default().with_cover_command_timeout(Duration::from_millis(250));
        let cover = MatterCover::new(Arc::clone(&client), endpoint(), &config);

        cover.open_cover().await.unwrap();

        let sent = client.sent_commands();
        assert_eq!(sent[0].cluster_id, window_covering::ID);
        assert_eq!(sent[0].command_id, window_covering::commands::UP_OR_OPEN);
        assert_eq!(sent[0].timed_request_timeout, Some(Duration::from_millis(250)));
    }

    #[tokio::test]
    async fn commands_do_not_change_state() {
        let client = Arc::new(InMemoryClient::new());
        client.set_attribute(endpoint(), attributes::CURRENT_POSITION_LIFT_PERCENTAGE, 100);
        let cover = MatterCover::new(Arc::clone(&client), endpoint(), &AdapterConfig::default());
        cover.update_from_device();

        cover.close_cover().await.unwrap();

        assert_eq!(cover.status(), CoverStatus::Open);
        assert_eq!(cover.current_cover_position(), Some(100));
    }

    #[test]
    fn before_first_update_status_is_unknown() {
        let client = Arc::new(InMemoryClient::new());
        let cover = MatterCover::new(client, endpoint(), &AdapterConfig::default());
        assert_eq!(cover.status(), CoverStatus::Unknown);
        assert!(!cover.is_closed());
    }
}
