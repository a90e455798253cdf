// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for entity lifecycle and state changes.
//!
//! The [`Platform`](crate::Platform) publishes an [`EntityEvent`] whenever it
//! creates or removes an entity, and whenever a device update changes an
//! entity's derived state. The [`EventBus`] uses tokio's broadcast channel to
//! allow multiple subscribers to receive events.
//!
//! # Examples
//!
//! ```
//! use matter_entities::discovery::PlatformKind;
//! use matter_entities::event::{EntityEvent, EntityId, EventBus};
//! use matter_entities::types::EndpointRef;
//!
//! let bus = EventBus::new();
//!
//! // Subscribe to events
//! let mut rx = bus.subscribe();
//!
//! // Publish an event
//! let entity_id = EntityId::new();
//! let endpoint = EndpointRef::new(1, 1);
//! bus.publish(EntityEvent::entity_added(entity_id, endpoint, PlatformKind::Climate));
//! ```

mod entity_event;
mod entity_id;
mod event_bus;

pub use entity_event::EntityEvent;
pub use entity_id::EntityId;
pub use event_bus::EventBus;
