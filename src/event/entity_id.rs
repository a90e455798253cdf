// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of an entity created by the platform.
///
/// Several entities can live on the same endpoint, so the endpoint alone
/// does not identify an entity.
///
/// # Examples
///
/// ```
/// use matter_entities::event::EntityId;
///
/// let id = EntityId::new();
/// assert_ne!(id, EntityId::new());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a new unique entity identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an entity identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = &self.0.simple().to_string()[..8];
        write!(f, "EntityId({short}...)")
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_uuid_keeps_value() {
        let uuid = Uuid::new_v4();
        assert_eq!(EntityId::from_uuid(uuid).as_uuid(), uuid);
        assert_eq!(EntityId::from(uuid), EntityId::from_uuid(uuid));
    }

    #[test]
    fn debug_is_shortened() {
        let uuid = Uuid::parse_str("a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8").unwrap();
        assert_eq!(format!("{:?}", EntityId::from_uuid(uuid)), "EntityId(a1a2a3a4...)");
    }

    #[test]
    fn serializes_as_plain_uuid() {
        let uuid = Uuid::parse_str("a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8").unwrap();
        let json = serde_json::to_string(&EntityId::from_uuid(uuid)).unwrap();
        assert_eq!(json, "\"a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8\"");
    }
}
