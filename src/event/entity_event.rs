// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::discovery::PlatformKind;
use crate::state::EntityState;
use crate::types::EndpointRef;

/// Events emitted by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EntityEvent {
    /// An entity was created for a discovered endpoint.
    EntityAdded {
        /// The new entity.
        entity_id: EntityId,
        /// The endpoint backing it.
        endpoint: EndpointRef,
        /// Kind of entity.
        platform: PlatformKind,
    },

    /// An entity was removed together with its endpoint.
    EntityRemoved {
        /// The removed entity.
        entity_id: EntityId,
        /// The endpoint that backed it.
        endpoint: EndpointRef,
    },

    /// A device update changed the derived state of an entity.
    StateChanged {
        /// The entity.
        entity_id: EntityId,
        /// The endpoint backing it.
        endpoint: EndpointRef,
        /// The complete new state.
        new_state: EntityState,
        /// When the change was observed.
        timestamp: DateTime<Utc>,
    },
}

impl EntityEvent {
    /// Returns the entity ID associated with this event.
    #[must_use]
    pub const fn entity_id(&self) -> EntityId {
        match self {
            Self::EntityAdded { entity_id, .. }
            | Self::EntityRemoved { entity_id, .. }
            | Self::StateChanged { entity_id, .. } => *entity_id,
        }
    }

    /// Returns the endpoint associated with this event.
    #[must_use]
    pub const fn endpoint(&self) -> EndpointRef {
        match self {
            Self::EntityAdded { endpoint, .. }
            | Self::EntityRemoved { endpoint, .. }
            | Self::StateChanged { endpoint, .. } => *endpoint,
        }
    }

    /// Returns `true` if this is an entity lifecycle event (added/removed).
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(self, Self::EntityAdded { .. } | Self::EntityRemoved { .. })
    }

    /// Returns `true` if this is a state change event.
    #[must_use]
    pub const fn is_state_change(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }

    /// Creates an entity added event.
    #[must_use]
    pub const fn entity_added(
        entity_id: EntityId,
        endpoint: EndpointRef,
        platform: PlatformKind,
    ) -> Self {
        Self::EntityAdded {
            entity_id,
            endpoint,
            platform,
        }
    }

    /// Creates an entity removed event.
    #[must_use]
    pub const fn entity_removed(entity_id: EntityId, endpoint: EndpointRef) -> Self {
        Self::EntityRemoved {
            entity_id,
            endpoint,
        }
    }

    /// Creates a state changed event stamped with the current time.
    #[must_use]
    pub fn state_changed(
        entity_id: EntityId,
        endpoint: EndpointRef,
        new_state: EntityState,
    ) -> Self {
        Self::StateChanged {
            entity_id,
            endpoint,
            new_state,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CoverState;

    fn endpoint() -> EndpointRef {
        EndpointRef::new(9, 2)
    }

    #[test]
    fn accessors() {
        let id = EntityId::new();

        let added = EntityEvent::entity_added(id, endpoint(), PlatformKind::Cover);
        assert_eq!(added.entity_id(), id);
        assert_eq!(added.endpoint(), endpoint());

        let removed = EntityEvent::entity_removed(id, endpoint());
        assert_eq!(removed.entity_id(), id);
    }

    #[test]
    fn event_kinds() {
        let id = EntityId::new();
        let added = EntityEvent::entity_added(id, endpoint(), PlatformKind::Climate);
        let changed = EntityEvent::state_changed(id, endpoint(), CoverState::new(Some(3)).into());

        assert!(added.is_lifecycle());
        assert!(!added.is_state_change());
        assert!(changed.is_state_change());
        assert!(!changed.is_lifecycle());
    }

    #[test]
    fn state_changed_is_timestamped() {
        let before = Utc::now();
        let event =
            EntityEvent::state_changed(EntityId::new(), endpoint(), CoverState::default().into());
        let EntityEvent::StateChanged { timestamp, .. } = event else {
            panic!("expected StateChanged");
        };
        assert!(timestamp >= before);
    }

    #[test]
    fn serializes_with_event_tag() {
        let event = EntityEvent::entity_removed(EntityId::new(), endpoint());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "entity_removed");
        assert_eq!(json["endpoint"], serde_json::json!({"node_id": 9, "endpoint_id": 2}));
    }
}
