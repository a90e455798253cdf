// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The seam between entities and the Matter client.
//!
//! Entities never talk to the network themselves. They invoke cluster
//! commands, write attributes and read the client's attribute cache through
//! a [`Protocol`] implementation.
//!
//! # Implementations
//!
//! - [`InMemoryClient`]: A client backed by an in-process
//!   [`AttributeSnapshot`](crate::cache::AttributeSnapshot), for tests and
//!   simulated devices
//!
//! A binding to a real Matter controller implements the same trait.

mod memory;

pub use memory::{AttributeWrite, InMemoryClient, SentCommand};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache;
use crate::command::Command;
use crate::error::ProtocolError;
use crate::types::{AttributeId, AttributePath, EndpointRef};

/// Trait for Matter clients that entities use to reach their devices.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Invokes a cluster command on an endpoint.
    ///
    /// Completes once the device has acknowledged the command.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command cannot be delivered or the
    /// device rejects it.
    async fn send_command<C: Command + Sync>(
        &self,
        endpoint: EndpointRef,
        command: &C,
    ) -> Result<(), ProtocolError>;

    /// Writes an attribute on a node.
    ///
    /// # Arguments
    ///
    /// * `node_id` - The node owning the attribute
    /// * `path` - Endpoint, cluster and attribute to write
    /// * `value` - The new value
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the write fails.
    async fn write_attribute(
        &self,
        node_id: u64,
        path: &AttributePath,
        value: Value,
    ) -> Result<(), ProtocolError>;

    /// Returns the last reported value of an attribute, if any.
    fn read_attribute(&self, endpoint: EndpointRef, attribute: AttributeId) -> Option<Value>;

    /// Returns the last reported value of an attribute decoded as `T`.
    ///
    /// Absent, `null` and mistyped values all read as `None`.
    fn read<T: DeserializeOwned>(&self, endpoint: EndpointRef, attribute: AttributeId) -> Option<T> {
        cache::decode(endpoint, attribute, self.read_attribute(endpoint, attribute))
    }
}
