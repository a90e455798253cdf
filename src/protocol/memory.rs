// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-process Matter client.

use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;

use crate::cache::AttributeSnapshot;
use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::Protocol;
use crate::types::{AttributeId, AttributePath, EndpointRef};

/// A command recorded by [`InMemoryClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentCommand {
    /// Target endpoint.
    pub endpoint: EndpointRef,
    /// Command name.
    pub name: &'static str,
    /// Cluster identifier.
    pub cluster_id: u32,
    /// Command identifier.
    pub command_id: u32,
    /// Command fields.
    pub payload: Value,
    /// Timed-request timeout, if the command was sent as a timed interaction.
    pub timed_request_timeout: Option<Duration>,
}

/// An attribute write recorded by [`InMemoryClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeWrite {
    /// Node the write was addressed to.
    pub node_id: u64,
    /// Written attribute.
    pub path: AttributePath,
    /// Written value.
    pub value: Value,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: AttributeSnapshot,
    sent: Vec<SentCommand>,
    writes: Vec<AttributeWrite>,
    fail_next: Option<ProtocolError>,
}

/// A Matter client that keeps every attribute in memory.
///
/// Commands are recorded and acknowledged immediately. Attribute writes are
/// recorded and applied to the snapshot, as a device confirming the write
/// through its subscription would. Device reports are simulated with
/// [`set_attribute`](Self::set_attribute).
///
/// # Examples
///
/// ```
/// use matter_entities::cluster::thermostat::attributes;
/// use matter_entities::protocol::{InMemoryClient, Protocol};
/// use matter_entities::types::EndpointRef;
///
/// let client = InMemoryClient::new();
/// let endpoint = EndpointRef::new(1, 1);
///
/// client.set_attribute(endpoint, attributes::LOCAL_TEMPERATURE, 2150);
/// assert_eq!(client.read::<i64>(endpoint, attributes::LOCAL_TEMPERATURE), Some(2150));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryClient {
    inner: Mutex<Inner>,
}

impl InMemoryClient {
    /// Creates a client with an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client over an existing snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: AttributeSnapshot) -> Self {
        Self {
            inner: Mutex::new(Inner {
                snapshot,
                ..Inner::default()
            }),
        }
    }

    /// Simulates a device report.
    pub fn set_attribute(
        &self,
        endpoint: EndpointRef,
        attribute: AttributeId,
        value: impl Into<Value>,
    ) {
        self.inner.lock().snapshot.set(endpoint, attribute, value);
    }

    /// Removes a reported value.
    pub fn remove_attribute(&self, endpoint: EndpointRef, attribute: AttributeId) {
        self.inner.lock().snapshot.remove(endpoint, attribute);
    }

    /// Returns the attributes currently known for an endpoint.
    #[must_use]
    pub fn available_attributes(&self, endpoint: EndpointRef) -> Vec<AttributeId> {
        self.inner.lock().snapshot.attributes(endpoint)
    }

    /// Makes the next command or attribute write fail with `error`.
    pub fn fail_next(&self, error: ProtocolError) {
        self.inner.lock().fail_next = Some(error);
    }

    /// Returns the commands sent so far, oldest first.
    #[must_use]
    pub fn sent_commands(&self) -> Vec<SentCommand> {
        self.inner.lock().sent.clone()
    }

    /// Returns the attribute writes so far, oldest first.
    #[must_use]
    pub fn written_attributes(&self) -> Vec<AttributeWrite> {
        self.inner.lock().writes.clone()
    }

    /// Forgets recorded commands and writes, keeping the snapshot.
    pub fn clear_history(&self) {
        let mut inner = self.inner.lock();
        inner.sent.clear();
        inner.writes.clear();
    }
}

impl Protocol for InMemoryClient {
    async fn send_command<C: Command + Sync>(
        &self,
        endpoint: EndpointRef,
        command: &C,
    ) -> Result<(), ProtocolError> {
        let mut inner = self.inner.lock();
        if let Some(error) = inner.fail_next.take() {
            tracing::debug!(endpoint = %endpoint, error = %error, "Failing command");
            return Err(error);
        }

        tracing::debug!(
            endpoint = %endpoint,
            command = command.name(),
            "Recording command"
        );
        inner.sent.push(SentCommand {
            endpoint,
            name: command.name(),
            cluster_id: command.cluster_id(),
            command_id: command.command_id(),
            payload: command.payload(),
            timed_request_timeout: command.timed_request_timeout(),
        });
        Ok(())
    }

    async fn write_attribute(
        &self,
        node_id: u64,
        path: &AttributePath,
        value: Value,
    ) -> Result<(), ProtocolError> {
        let mut inner = self.inner.lock();
        if let Some(error) = inner.fail_next.take() {
            tracing::debug!(path = %path, error = %error, "Failing attribute write");
            return Err(error);
        }

        tracing::debug!(node_id, path = %path, value = %value, "Applying attribute write");
        let endpoint = EndpointRef::new(node_id, path.endpoint_id);
        inner
            .snapshot
            .set(endpoint, path.attribute(), value.clone());
        inner.writes.push(AttributeWrite {
            node_id,
            path: *path,
            value,
        });
        Ok(())
    }

    fn read_attribute(&self, endpoint: EndpointRef, attribute: AttributeId) -> Option<Value> {
        self.inner.lock().snapshot.get(endpoint, attribute).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::thermostat::{SetpointAdjustMode, attributes};
    use crate::command::{SetpointRaiseLower, WindowCoveringCommand};

    fn endpoint() -> EndpointRef {
        EndpointRef::new(3, 1)
    }

    #[tokio::test]
    async fn records_commands() {
        let client = InMemoryClient::new();
        let cmd = SetpointRaiseLower::new(SetpointAdjustMode::Heat, 5);

        client.send_command(endpoint(), &cmd).await.unwrap();

        let sent = client.sent_commands();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].endpoint, endpoint());
        assert_eq!(sent[0].name, "SetpointRaiseLower");
        assert_eq!(sent[0].payload, serde_json::json!({"mode": 0, "amount": 5}));
        assert_eq!(sent[0].timed_request_timeout, None);
    }

    #[tokio::test]
    async fn records_timed_request_timeout() {
        let client = InMemoryClient::new();
        client
            .send_command(endpoint(), &WindowCoveringCommand::StopMotion)
            .await
            .unwrap();

        assert_eq!(
            client.sent_commands()[0].timed_request_timeout,
            Some(Duration::from_millis(1000))
        );
    }

    #[tokio::test]
    async fn write_updates_snapshot() {
        let client = InMemoryClient::new();
        let path = endpoint().attribute_path(attributes::SYSTEM_MODE);

        client
            .write_attribute(3, &path, Value::from(4))
            .await
            .unwrap();

        assert_eq!(client.read::<u8>(endpoint(), attributes::SYSTEM_MODE), Some(4));
        assert_eq!(client.written_attributes()[0].path.to_string(), "1/513/28");
    }

    #[tokio::test]
    async fn fail_next_applies_once() {
        let client = InMemoryClient::new();
        client.fail_next(ProtocolError::Timeout(500));

        let err = client
            .send_command(endpoint(), &WindowCoveringCommand::UpOrOpen)
            .await
            .unwrap_err();
        assert_eq!(err, ProtocolError::Timeout(500));
        assert!(client.sent_commands().is_empty());

        client
            .send_command(endpoint(), &WindowCoveringCommand::UpOrOpen)
            .await
            .unwrap();
        assert_eq!(client.sent_commands().len(), 1);
    }

    #[tokio::test]
    async fn failed_write_leaves_snapshot_untouched() {
        let client = InMemoryClient::new();
        client.set_attribute(endpoint(), attributes::SYSTEM_MODE, 0);
        client.fail_next(ProtocolError::NodeNotFound(3));

        let path = endpoint().attribute_path(attributes::SYSTEM_MODE);
        let result = client.write_attribute(3, &path, Value::from(4)).await;

        assert!(result.is_err());
        assert_eq!(client.read::<u8>(endpoint(), attributes::SYSTEM_MODE), Some(0));
        assert!(client.written_attributes().is_empty());
    }

    #[test]
    fn clear_history_keeps_snapshot() {
        let client = InMemoryClient::new();
        client.set_attribute(endpoint(), attributes::LOCAL_TEMPERATURE, 2000);
        client.clear_history();
        assert_eq!(
            client.available_attributes(endpoint()),
            [attributes::LOCAL_TEMPERATURE]
        );
    }
}
