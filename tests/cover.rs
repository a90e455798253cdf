// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for cover entities backed by a simulated window covering.

use std::sync::Arc;
use std::time::Duration;

use matter_entities::cluster::DeviceType;
use matter_entities::cluster::window_covering::{self, attributes, commands};
use matter_entities::protocol::InMemoryClient;
use matter_entities::types::{CoverStatus, EndpointRef};
use matter_entities::{AdapterConfig, CoverEntity, EntityEvent, Platform};
use serde_json::Value;

const ENDPOINT: EndpointRef = EndpointRef::new(7, 1);

fn window_covering(position: u8) -> Arc<InMemoryClient> {
    let client = Arc::new(InMemoryClient::new());
    client.set_attribute(ENDPOINT, attributes::CURRENT_POSITION_LIFT_PERCENTAGE, position);
    client.set_attribute(ENDPOINT, attributes::OPERATIONAL_STATUS, 0);
    client
}

fn platform(client: &Arc<InMemoryClient>) -> Platform<InMemoryClient> {
    let platform = Platform::new(Arc::clone(client), AdapterConfig::default());
    platform.add_endpoint(
        ENDPOINT,
        &[DeviceType::WINDOW_COVERING],
        &client.available_attributes(ENDPOINT),
    );
    platform
}

// ============================================================================
// Commands
// ============================================================================

mod commands_sent {
    use super::*;

    #[tokio::test]
    async fn close_stop_open() {
        let client = window_covering(100);
        let platform = platform(&client);
        let cover = platform.cover(ENDPOINT).unwrap();

        cover.close_cover().await.unwrap();
        cover.stop_cover().await.unwrap();
        cover.open_cover().await.unwrap();

        let sent = client.sent_commands();
        let ids: Vec<_> = sent.iter().map(|c| c.command_id).collect();
        assert_eq!(
            ids,
            [commands::DOWN_OR_CLOSE, commands::STOP_MOTION, commands::UP_OR_OPEN]
        );

        for command in &sent {
            assert_eq!(command.endpoint, ENDPOINT);
            assert_eq!(command.cluster_id, window_covering::ID);
            assert_eq!(command.timed_request_timeout, Some(Duration::from_millis(1000)));
            assert_eq!(command.payload, serde_json::json!({}));
        }
    }

    #[tokio::test]
    async fn state_is_unchanged_by_commands() {
        let client = window_covering(100);
        let platform = platform(&client);
        let cover = platform.cover(ENDPOINT).unwrap();

        cover.close_cover().await.unwrap();

        assert_eq!(cover.status(), CoverStatus::Open);
        assert_eq!(cover.current_cover_position(), Some(100));
    }

    #[tokio::test]
    async fn failure_is_reported() {
        let client = window_covering(100);
        let platform = platform(&client);
        let cover = platform.cover(ENDPOINT).unwrap();
        client.fail_next(matter_entities::ProtocolError::ConnectionFailed(
            "socket closed".to_string(),
        ));

        let result = cover.open_cover().await;

        assert!(matches!(result, Err(matter_entities::Error::Protocol(_))));
        assert!(client.sent_commands().is_empty());
    }
}

// ============================================================================
// Status Tracking
// ============================================================================

mod status_tracking {
    use super::*;

    #[tokio::test]
    async fn follows_position_reports() {
        let client = window_covering(100);
        let platform = platform(&client);
        let cover = platform.cover(ENDPOINT).unwrap();
        assert_eq!(cover.status(), CoverStatus::Open);

        let steps = [
            (Value::from(50), CoverStatus::Closing),
            (Value::from(0), CoverStatus::Closed),
            (Value::from(50), CoverStatus::Opening),
            (Value::Null, CoverStatus::Unknown),
        ];
        for (position, expected) in steps {
            client.set_attribute(
                ENDPOINT,
                attributes::CURRENT_POSITION_LIFT_PERCENTAGE,
                position.clone(),
            );
            platform.handle_attribute_change(ENDPOINT);
            assert_eq!(cover.status(), expected, "position {position}");
        }
        assert_eq!(cover.current_cover_position(), None);
    }

    #[tokio::test]
    async fn closed_at_discovery() {
        let client = window_covering(0);
        let platform = platform(&client);
        let cover = platform.cover(ENDPOINT).unwrap();

        assert_eq!(cover.status(), CoverStatus::Closed);
        assert!(cover.is_closed());
    }

    #[tokio::test]
    async fn unchanged_position_settles_to_open() {
        let client = window_covering(100);
        let platform = platform(&client);
        let cover = platform.cover(ENDPOINT).unwrap();

        client.set_attribute(ENDPOINT, attributes::CURRENT_POSITION_LIFT_PERCENTAGE, 60);
        platform.handle_attribute_change(ENDPOINT);
        assert_eq!(cover.status(), CoverStatus::Closing);

        platform.handle_attribute_change(ENDPOINT);
        assert_eq!(cover.status(), CoverStatus::Open);
        assert_eq!(cover.current_cover_position(), Some(60));
    }

    #[tokio::test]
    async fn publishes_state_changes() {
        let client = window_covering(100);
        let platform = platform(&client);
        let mut events = platform.subscribe();

        client.set_attribute(ENDPOINT, attributes::CURRENT_POSITION_LIFT_PERCENTAGE, 40);
        assert_eq!(platform.handle_attribute_change(ENDPOINT), 1);

        let event = events.recv().await.unwrap();
        let EntityEvent::StateChanged { new_state, .. } = event else {
            panic!("expected state change, got {event:?}");
        };
        let state = new_state.as_cover().copied().unwrap();
        assert_eq!(state.position, Some(40));
        assert_eq!(state.status, CoverStatus::Closing);
    }
}
