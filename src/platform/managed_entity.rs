// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Internal entity wrapper for the platform.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::AdapterConfig;
use crate::discovery::{DiscoverySchema, PlatformKind};
use crate::entity::{MatterClimate, MatterCover, MatterEntity};
use crate::event::EntityId;
use crate::protocol::Protocol;
use crate::state::EntityState;
use crate::types::EndpointRef;

/// A typed entity, so hosts can get back the concrete façade.
#[derive(Debug)]
pub(crate) enum EntityHandle<P: Protocol> {
    Climate(Arc<MatterClimate<P>>),
    Cover(Arc<MatterCover<P>>),
}

impl<P: Protocol> EntityHandle<P> {
    fn for_schema(
        schema: &DiscoverySchema,
        protocol: &Arc<P>,
        endpoint: EndpointRef,
        config: &AdapterConfig,
    ) -> Self {
        let protocol = Arc::clone(protocol);
        match schema.platform {
            PlatformKind::Climate => {
                Self::Climate(Arc::new(MatterClimate::new(protocol, endpoint, config)))
            }
            PlatformKind::Cover => {
                Self::Cover(Arc::new(MatterCover::new(protocol, endpoint, config)))
            }
        }
    }

    fn as_entity(&self) -> &dyn MatterEntity {
        match self {
            Self::Climate(climate) => &**climate,
            Self::Cover(cover) => &**cover,
        }
    }
}

/// Internal representation of an entity in the platform.
#[derive(Debug)]
pub(crate) struct ManagedEntity<P: Protocol> {
    /// Unique entity identifier.
    pub id: EntityId,
    /// The entity itself.
    pub handle: EntityHandle<P>,
    /// Watch channel sender holding the last published state.
    state_tx: watch::Sender<EntityState>,
}

impl<P: Protocol> ManagedEntity<P> {
    /// Creates the entity for a matched schema and runs its first update.
    pub fn create(
        schema: &DiscoverySchema,
        protocol: &Arc<P>,
        endpoint: EndpointRef,
        config: &AdapterConfig,
    ) -> Self {
        let handle = EntityHandle::for_schema(schema, protocol, endpoint, config);
        let initial = handle.as_entity().update_from_device();
        let (state_tx, _) = watch::channel(initial);

        Self {
            id: EntityId::new(),
            handle,
            state_tx,
        }
    }

    pub fn platform(&self) -> PlatformKind {
        self.handle.as_entity().platform()
    }

    pub fn state(&self) -> EntityState {
        self.state_tx.borrow().clone()
    }

    pub fn watch_state(&self) -> watch::Receiver<EntityState> {
        self.state_tx.subscribe()
    }

    /// Recomputes the entity and notifies watchers.
    ///
    /// Returns the new state if it differs from the last one.
    pub fn refresh(&self) -> Option<EntityState> {
        let new_state = self.handle.as_entity().update_from_device();
        let changed = self
            .state_tx
            .send_if_modified(|current| current.apply(new_state.clone()));
        changed.then_some(new_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::window_covering::attributes::CURRENT_POSITION_LIFT_PERCENTAGE;
    use crate::discovery::WINDOW_COVERING_SCHEMA;
    use crate::protocol::InMemoryClient;
    use crate::types::CoverStatus;

    #[test]
    fn refresh_reports_only_changes() {
        let endpoint = EndpointRef::new(1, 1);
        let client = Arc::new(InMemoryClient::new());
        client.set_attribute(endpoint, CURRENT_POSITION_LIFT_PERCENTAGE, 100);

        let entity = ManagedEntity::create(
            &WINDOW_COVERING_SCHEMA,
            &client,
            endpoint,
            &AdapterConfig::default(),
        );
        assert_eq!(entity.platform(), PlatformKind::Cover);
        assert!(entity.refresh().is_none());

        client.set_attribute(endpoint, CURRENT_POSITION_LIFT_PERCENTAGE, 60);
        let state = entity.refresh().unwrap();
        assert_eq!(state.as_cover().map(|c| c.status), Some(CoverStatus::Closing));
    }

    #[tokio::test]
    async fn watchers_see_new_state() {
        let endpoint = EndpointRef::new(1, 1);
        let client = Arc::new(InMemoryClient::new());
        client.set_attribute(endpoint, CURRENT_POSITION_LIFT_PERCENTAGE, 100);
        let entity = ManagedEntity::create(
            &WINDOW_COVERING_SCHEMA,
            &client,
            endpoint,
            &AdapterConfig::default(),
        );
        let mut rx = entity.watch_state();

        client.set_attribute(endpoint, CURRENT_POSITION_LIFT_PERCENTAGE, 0);
        entity.refresh();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_cover().map(|c| c.is_closed()), Some(true));
    }
}
