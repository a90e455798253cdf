// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform owning the entities of all discovered endpoints.
//!
//! The [`Platform`] is the glue between a Matter client and the host:
//!
//! - **Discovery**: [`add_endpoint`](Platform::add_endpoint) creates one entity
//!   per matching [`DiscoverySchema`](crate::discovery::DiscoverySchema)
//! - **Updates**: [`handle_attribute_change`](Platform::handle_attribute_change)
//!   recomputes the entities of an endpoint when its attributes change
//! - **Event system**: Lifecycle and state changes are broadcast as
//!   [`EntityEvent`]s
//! - **Access**: [`climate`](Platform::climate) and [`cover`](Platform::cover)
//!   hand out the entities for host-issued operations
//!
//! The client must deliver attribute changes for one endpoint one at a time.
//! Different endpoints may be handled concurrently.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use matter_entities::cluster::{DeviceType, window_covering::attributes};
//! use matter_entities::entity::CoverEntity;
//! use matter_entities::event::EntityEvent;
//! use matter_entities::protocol::InMemoryClient;
//! use matter_entities::types::{CoverStatus, EndpointRef};
//! use matter_entities::{AdapterConfig, Platform};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> matter_entities::Result<()> {
//! let endpoint = EndpointRef::new(7, 1);
//! let client = Arc::new(InMemoryClient::new());
//! client.set_attribute(endpoint, attributes::CURRENT_POSITION_LIFT_PERCENTAGE, 100);
//!
//! let platform = Platform::new(Arc::clone(&client), AdapterConfig::default());
//! let mut events = platform.subscribe();
//!
//! let attrs = client.available_attributes(endpoint);
//! let ids = platform.add_endpoint(endpoint, &[DeviceType::WINDOW_COVERING], &attrs);
//! assert_eq!(ids.len(), 1);
//! assert!(matches!(events.recv().await, Ok(EntityEvent::EntityAdded { .. })));
//!
//! // Device reports a new position
//! client.set_attribute(endpoint, attributes::CURRENT_POSITION_LIFT_PERCENTAGE, 40);
//! platform.handle_attribute_change(endpoint);
//!
//! let cover = platform.cover(endpoint).unwrap();
//! assert_eq!(cover.status(), CoverStatus::Closing);
//! # Ok(())
//! # }
//! ```

mod managed_entity;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{broadcast, watch};

use crate::cluster::DeviceType;
use crate::config::AdapterConfig;
use crate::discovery::{self, PlatformKind};
use crate::entity::{MatterClimate, MatterCover};
use crate::event::{EntityEvent, EntityId, EventBus};
use crate::protocol::Protocol;
use crate::state::EntityState;
use crate::types::{AttributeId, EndpointRef};

use managed_entity::{EntityHandle, ManagedEntity};

/// Owner of every entity created from discovered endpoints.
#[derive(Debug)]
pub struct Platform<P: Protocol> {
    /// Client shared by all entities.
    protocol: Arc<P>,
    /// Configuration handed to new entities.
    config: AdapterConfig,
    /// Entities, keyed by the endpoint backing them.
    endpoints: RwLock<HashMap<EndpointRef, Vec<ManagedEntity<P>>>>,
    /// Event bus for broadcasting entity events.
    event_bus: EventBus,
}

impl<P: Protocol> Platform<P> {
    /// Creates a platform with no entities.
    #[must_use]
    pub fn new(protocol: Arc<P>, config: AdapterConfig) -> Self {
        let event_bus = EventBus::with_capacity(config.event_capacity);
        Self {
            protocol,
            config,
            endpoints: RwLock::new(HashMap::new()),
            event_bus,
        }
    }

    /// Returns the configuration used for new entities.
    #[must_use]
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribes to entity events.
    ///
    /// Returns a receiver that will receive all events published after the
    /// subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EntityEvent> {
        self.event_bus.subscribe()
    }

    /// Returns the number of active event subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.event_bus.subscriber_count()
    }

    // =========================================================================
    // Endpoint Lifecycle
    // =========================================================================

    /// Creates the entities for a newly reported endpoint.
    ///
    /// Each entity runs its first update before an `EntityAdded` event is
    /// published. Adding an endpoint that is already known creates nothing and
    /// returns the existing entity IDs.
    ///
    /// Returns the IDs of the endpoint's entities, empty if no schema matched.
    pub fn add_endpoint(
        &self,
        endpoint: EndpointRef,
        device_types: &[DeviceType],
        attributes: &[AttributeId],
    ) -> Vec<EntityId> {
        let mut endpoints = self.endpoints.write();
        if let Some(existing) = endpoints.get(&endpoint) {
            tracing::debug!(endpoint = %endpoint, "Endpoint already added");
            return existing.iter().map(|e| e.id).collect();
        }

        let entities: Vec<_> = discovery::discover(device_types, attributes)
            .into_iter()
            .map(|schema| {
                ManagedEntity::create(schema, &self.protocol, endpoint, &self.config)
            })
            .collect();

        if entities.is_empty() {
            tracing::debug!(endpoint = %endpoint, "No entity schema matches endpoint");
            return Vec::new();
        }

        tracing::info!(endpoint = %endpoint, count = entities.len(), "Discovered entities");

        let ids = entities.iter().map(|e| e.id).collect();
        for entity in &entities {
            self.event_bus
                .publish(EntityEvent::entity_added(entity.id, endpoint, entity.platform()));
        }
        endpoints.insert(endpoint, entities);
        ids
    }

    /// Removes an endpoint together with its entities.
    ///
    /// # Returns
    ///
    /// Returns `true` if the endpoint was known.
    pub fn remove_endpoint(&self, endpoint: EndpointRef) -> bool {
        let Some(entities) = self.endpoints.write().remove(&endpoint) else {
            return false;
        };

        tracing::info!(endpoint = %endpoint, count = entities.len(), "Removing entities");
        for entity in &entities {
            self.event_bus
                .publish(EntityEvent::entity_removed(entity.id, endpoint));
        }
        true
    }

    // =========================================================================
    // Device Updates
    // =========================================================================

    /// Recomputes every entity of an endpoint after an attribute change.
    ///
    /// A `StateChanged` event is published for each entity whose state
    /// differs from the previous one. Unknown endpoints are ignored.
    ///
    /// Returns the number of entities that changed.
    pub fn handle_attribute_change(&self, endpoint: EndpointRef) -> usize {
        let endpoints = self.endpoints.read();
        let Some(entities) = endpoints.get(&endpoint) else {
            tracing::debug!(endpoint = %endpoint, "Ignoring update for unknown endpoint");
            return 0;
        };

        let mut changed = 0;
        for entity in entities {
            if let Some(new_state) = entity.refresh() {
                changed += 1;
                self.event_bus
                    .publish(EntityEvent::state_changed(entity.id, endpoint, new_state));
            }
        }
        changed
    }

    // =========================================================================
    // Entity Access
    // =========================================================================

    /// Returns the climate entity of an endpoint.
    #[must_use]
    pub fn climate(&self, endpoint: EndpointRef) -> Option<Arc<MatterClimate<P>>> {
        self.endpoints
            .read()
            .get(&endpoint)?
            .iter()
            .find_map(|entity| match &entity.handle {
                EntityHandle::Climate(climate) => Some(Arc::clone(climate)),
                EntityHandle::Cover(_) => None,
            })
    }

    /// Returns the cover entity of an endpoint.
    #[must_use]
    pub fn cover(&self, endpoint: EndpointRef) -> Option<Arc<MatterCover<P>>> {
        self.endpoints
            .read()
            .get(&endpoint)?
            .iter()
            .find_map(|entity| match &entity.handle {
                EntityHandle::Cover(cover) => Some(Arc::clone(cover)),
                EntityHandle::Climate(_) => None,
            })
    }

    /// Returns the IDs and kinds of the entities of an endpoint.
    #[must_use]
    pub fn entities(&self, endpoint: EndpointRef) -> Vec<(EntityId, PlatformKind)> {
        self.endpoints
            .read()
            .get(&endpoint)
            .map(|entities| entities.iter().map(|e| (e.id, e.platform())).collect())
            .unwrap_or_default()
    }

    /// Returns every known endpoint.
    #[must_use]
    pub fn endpoints(&self) -> Vec<EndpointRef> {
        let mut endpoints: Vec<_> = self.endpoints.read().keys().copied().collect();
        endpoints.sort_unstable();
        endpoints
    }

    /// Returns the number of entities across all endpoints.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.endpoints.read().values().map(Vec::len).sum()
    }

    // =========================================================================
    // State Management
    // =========================================================================

    /// Returns the last published state of an entity.
    #[must_use]
    pub fn state(&self, entity_id: EntityId) -> Option<EntityState> {
        self.with_entity(entity_id, ManagedEntity::state)
    }

    /// Creates a watch receiver for an entity's state.
    ///
    /// The receiver is notified whenever a device update changes the state.
    #[must_use]
    pub fn watch_entity(&self, entity_id: EntityId) -> Option<watch::Receiver<EntityState>> {
        self.with_entity(entity_id, ManagedEntity::watch_state)
    }

    fn with_entity<T>(
        &self,
        entity_id: EntityId,
        f: impl FnOnce(&ManagedEntity<P>) -> T,
    ) -> Option<T> {
        self.endpoints
            .read()
            .values()
            .flatten()
            .find(|entity| entity.id == entity_id)
            .map(f)
    }
}
