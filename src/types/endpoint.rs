// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Addressing types for Matter nodes, endpoints and attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A single endpoint on a commissioned Matter node.
///
/// Endpoints are owned by the Matter client's node registry. Entities only
/// hold a copy of the reference for their whole lifetime.
///
/// # Examples
///
/// ```
/// use matter_entities::types::EndpointRef;
///
/// let endpoint = EndpointRef::new(5, 1);
/// assert_eq!(endpoint.to_string(), "5/1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EndpointRef {
    /// Node identifier assigned during commissioning.
    pub node_id: u64,
    /// Endpoint number on the node.
    pub endpoint_id: u16,
}

impl EndpointRef {
    /// Creates a new endpoint reference.
    #[must_use]
    pub const fn new(node_id: u64, endpoint_id: u16) -> Self {
        Self {
            node_id,
            endpoint_id,
        }
    }

    /// Returns the full path of an attribute on this endpoint.
    #[must_use]
    pub const fn attribute_path(&self, attribute: AttributeId) -> AttributePath {
        AttributePath {
            endpoint_id: self.endpoint_id,
            cluster_id: attribute.cluster_id,
            attribute_id: attribute.attribute_id,
        }
    }
}

impl fmt::Display for EndpointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.node_id, self.endpoint_id)
    }
}

/// An attribute within a cluster, independent of the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeId {
    /// Cluster identifier (e.g. `0x0201` for Thermostat).
    pub cluster_id: u32,
    /// Attribute identifier within the cluster.
    pub attribute_id: u32,
}

impl AttributeId {
    /// Creates a new attribute identifier.
    #[must_use]
    pub const fn new(cluster_id: u32, attribute_id: u32) -> Self {
        Self {
            cluster_id,
            attribute_id,
        }
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}/{:#06x}", self.cluster_id, self.attribute_id)
    }
}

/// Fully qualified attribute path as used by the Matter server.
///
/// The string form is `"{endpoint}/{cluster}/{attribute}"` with decimal
/// numbers, e.g. `"1/513/28"` for the thermostat `SystemMode` attribute on
/// endpoint 1.
///
/// # Examples
///
/// ```
/// use matter_entities::types::AttributePath;
///
/// let path: AttributePath = "1/513/28".parse().unwrap();
/// assert_eq!(path.cluster_id, 513);
/// assert_eq!(path.to_string(), "1/513/28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributePath {
    /// Endpoint number.
    pub endpoint_id: u16,
    /// Cluster identifier.
    pub cluster_id: u32,
    /// Attribute identifier.
    pub attribute_id: u32,
}

impl AttributePath {
    /// Returns the endpoint-independent attribute identifier.
    #[must_use]
    pub const fn attribute(&self) -> AttributeId {
        AttributeId::new(self.cluster_id, self.attribute_id)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.endpoint_id, self.cluster_id, self.attribute_id
        )
    }
}

impl FromStr for AttributePath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidAttributePath(s.to_string());

        let mut parts = s.split('/');
        let (Some(endpoint), Some(cluster), Some(attribute), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        Ok(Self {
            endpoint_id: endpoint.trim().parse().map_err(|_| invalid())?,
            cluster_id: cluster.trim().parse().map_err(|_| invalid())?,
            attribute_id: attribute.trim().parse().map_err(|_| invalid())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_display() {
        assert_eq!(EndpointRef::new(42, 3).to_string(), "42/3");
    }

    #[test]
    fn endpoint_builds_attribute_path() {
        let endpoint = EndpointRef::new(1, 2);
        let path = endpoint.attribute_path(AttributeId::new(0x0201, 0x001C));
        assert_eq!(path.to_string(), "2/513/28");
        assert_eq!(path.attribute(), AttributeId::new(0x0201, 0x001C));
    }

    #[test]
    fn attribute_id_display_is_hex() {
        assert_eq!(AttributeId::new(0x0201, 0x0012).to_string(), "0x0201/0x0012");
    }

    #[test]
    fn attribute_path_parse() {
        let path: AttributePath = "1/258/8".parse().unwrap();
        assert_eq!(path.endpoint_id, 1);
        assert_eq!(path.cluster_id, 258);
        assert_eq!(path.attribute_id, 8);
    }

    #[test]
    fn attribute_path_parse_rejects_malformed() {
        assert!("1/258".parse::<AttributePath>().is_err());
        assert!("1/258/8/4".parse::<AttributePath>().is_err());
        assert!("a/258/8".parse::<AttributePath>().is_err());
        assert!("".parse::<AttributePath>().is_err());
    }
}
