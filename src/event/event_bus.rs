// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting entity events.

use tokio::sync::broadcast;

use super::EntityEvent;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Event bus for broadcasting entity events to multiple subscribers.
///
/// Every subscriber gets its own copy of each event published after it
/// subscribed.
///
/// # Capacity
///
/// The channel capacity is fixed at creation (default 256). A subscriber that
/// falls behind by more than that loses the oldest events and receives
/// `RecvError::Lagged`. Since every `StateChanged` event carries the complete
/// state, a lagging host only loses intermediate states.
///
/// # Examples
///
/// ```
/// use matter_entities::event::{EntityEvent, EntityId, EventBus};
/// use matter_entities::types::EndpointRef;
///
/// let bus = EventBus::with_capacity(16);
/// let _rx = bus.subscribe();
///
/// let delivered =
///     bus.publish_counted(EntityEvent::entity_removed(EntityId::new(), EndpointRef::new(1, 1)));
/// assert_eq!(delivered, 1);
/// ```
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<EntityEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus buffering at most `capacity` events.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribes to entity events.
    ///
    /// Returns a receiver that will receive all events published after
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EntityEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to all subscribers.
    ///
    /// Without subscribers the event is discarded.
    pub fn publish(&self, event: EntityEvent) {
        // no subscribers
        let _ = self.sender.send(event);
    }

    /// Publishes an event and returns the number of receivers that received it.
    ///
    /// Returns 0 if there are no subscribers.
    #[must_use]
    pub fn publish_counted(&self, event: EntityEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
