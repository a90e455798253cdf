// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute snapshot and typed reads.
//!
//! The Matter client keeps the last reported value of every subscribed
//! attribute. Entities never own these values; they read them on demand
//! through [`Protocol::read`](crate::protocol::Protocol::read), which decodes
//! with [`decode`].
//!
//! An attribute that was never reported, or that the device reports as
//! `null`, is absent. Absence is never the same as zero.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{AttributeId, EndpointRef};

/// Last known attribute values, keyed by endpoint and attribute.
///
/// # Examples
///
/// ```
/// use matter_entities::cache::AttributeSnapshot;
/// use matter_entities::cluster::thermostat::attributes;
/// use matter_entities::types::EndpointRef;
///
/// let endpoint = EndpointRef::new(1, 1);
/// let mut snapshot = AttributeSnapshot::new();
/// snapshot.set(endpoint, attributes::LOCAL_TEMPERATURE, 2150);
///
/// assert_eq!(
///     snapshot.get(endpoint, attributes::LOCAL_TEMPERATURE),
///     Some(&serde_json::json!(2150))
/// );
/// assert_eq!(snapshot.get(endpoint, attributes::SYSTEM_MODE), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttributeSnapshot {
    values: HashMap<(EndpointRef, AttributeId), Value>,
}

impl AttributeSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, returning the previous one.
    pub fn set(
        &mut self,
        endpoint: EndpointRef,
        attribute: AttributeId,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.values.insert((endpoint, attribute), value.into())
    }

    /// Forgets a value, returning it.
    pub fn remove(&mut self, endpoint: EndpointRef, attribute: AttributeId) -> Option<Value> {
        self.values.remove(&(endpoint, attribute))
    }

    /// Forgets every value of an endpoint.
    pub fn remove_endpoint(&mut self, endpoint: EndpointRef) {
        self.values.retain(|(ep, _), _| *ep != endpoint);
    }

    /// Returns the raw value of an attribute.
    #[must_use]
    pub fn get(&self, endpoint: EndpointRef, attribute: AttributeId) -> Option<&Value> {
        self.values.get(&(endpoint, attribute))
    }

    /// Returns the decoded value of an attribute.
    ///
    /// See [`decode`] for the absence rules.
    #[must_use]
    pub fn read<T: DeserializeOwned>(
        &self,
        endpoint: EndpointRef,
        attribute: AttributeId,
    ) -> Option<T> {
        decode(endpoint, attribute, self.get(endpoint, attribute).cloned())
    }

    /// Returns the attributes known for an endpoint, sorted.
    #[must_use]
    pub fn attributes(&self, endpoint: EndpointRef) -> Vec<AttributeId> {
        let mut attributes: Vec<_> = self
            .values
            .keys()
            .filter(|(ep, _)| *ep == endpoint)
            .map(|(_, attribute)| *attribute)
            .collect();
        attributes.sort_unstable();
        attributes
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Decodes a cached attribute value.
///
/// `None` and JSON `null` are absent. A value that does not fit `T` is
/// logged and treated as absent; a misbehaving device must not take the
/// entity down.
///
/// # Examples
///
/// ```
/// use matter_entities::cache::decode;
/// use matter_entities::cluster::thermostat::attributes;
/// use matter_entities::types::EndpointRef;
///
/// let endpoint = EndpointRef::new(1, 1);
/// let attr = attributes::SYSTEM_MODE;
///
/// assert_eq!(decode::<u8>(endpoint, attr, Some(4.into())), Some(4));
/// assert_eq!(decode::<u8>(endpoint, attr, Some(serde_json::Value::Null)), None);
/// assert_eq!(decode::<u8>(endpoint, attr, Some("heat".into())), None);
/// ```
#[must_use]
pub fn decode<T: DeserializeOwned>(
    endpoint: EndpointRef,
    attribute: AttributeId,
    value: Option<Value>,
) -> Option<T> {
    let value = value.filter(|v| !v.is_null())?;
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!(
                endpoint = %endpoint,
                attribute = %attribute,
                error = %e,
                "Ignoring attribute value of unexpected type"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::thermostat::attributes;
    use crate::cluster::window_covering;

    fn endpoint() -> EndpointRef {
        EndpointRef::new(1, 1)
    }

    #[test]
    fn zero_is_a_value() {
        let mut snapshot = AttributeSnapshot::new();
        snapshot.set(endpoint(), attributes::LOCAL_TEMPERATURE, 0);
        assert_eq!(
            snapshot.read::<i64>(endpoint(), attributes::LOCAL_TEMPERATURE),
            Some(0)
        );
    }

    #[test]
    fn null_is_absent() {
        let mut snapshot = AttributeSnapshot::new();
        snapshot.set(endpoint(), attributes::LOCAL_TEMPERATURE, Value::Null);
        assert_eq!(
            snapshot.read::<i64>(endpoint(), attributes::LOCAL_TEMPERATURE),
            None
        );
    }

    #[test]
    fn out_of_range_is_absent() {
        let mut snapshot = AttributeSnapshot::new();
        snapshot.set(endpoint(), attributes::SYSTEM_MODE, 300);
        assert_eq!(snapshot.read::<u8>(endpoint(), attributes::SYSTEM_MODE), None);
        assert_eq!(snapshot.read::<u16>(endpoint(), attributes::SYSTEM_MODE), Some(300));
    }

    #[test]
    fn negative_temperatures() {
        let mut snapshot = AttributeSnapshot::new();
        snapshot.set(endpoint(), attributes::LOCAL_TEMPERATURE, -450);
        assert_eq!(
            snapshot.read::<i64>(endpoint(), attributes::LOCAL_TEMPERATURE),
            Some(-450)
        );
    }

    #[test]
    fn endpoints_are_isolated() {
        let other = EndpointRef::new(1, 2);
        let mut snapshot = AttributeSnapshot::new();
        snapshot.set(endpoint(), attributes::SYSTEM_MODE, 4);

        assert_eq!(snapshot.get(other, attributes::SYSTEM_MODE), None);
        assert!(snapshot.attributes(other).is_empty());
    }

    #[test]
    fn set_returns_previous() {
        let mut snapshot = AttributeSnapshot::new();
        assert_eq!(snapshot.set(endpoint(), attributes::SYSTEM_MODE, 4), None);
        assert_eq!(
            snapshot.set(endpoint(), attributes::SYSTEM_MODE, 3),
            Some(Value::from(4))
        );
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn remove_endpoint_keeps_others() {
        let other = EndpointRef::new(2, 1);
        let mut snapshot = AttributeSnapshot::new();
        snapshot.set(endpoint(), attributes::SYSTEM_MODE, 4);
        snapshot.set(endpoint(), attributes::LOCAL_TEMPERATURE, 2000);
        snapshot.set(other, window_covering::attributes::CURRENT_POSITION_LIFT_PERCENTAGE, 50);

        snapshot.remove_endpoint(endpoint());

        assert_eq!(snapshot.len(), 1);
        assert_eq!(
            snapshot.attributes(other),
            [window_covering::attributes::CURRENT_POSITION_LIFT_PERCENTAGE]
        );
    }

    #[test]
    fn attributes_are_sorted() {
        let mut snapshot = AttributeSnapshot::new();
        snapshot.set(endpoint(), attributes::SYSTEM_MODE, 4);
        snapshot.set(endpoint(), attributes::LOCAL_TEMPERATURE, 2000);

        assert_eq!(
            snapshot.attributes(endpoint()),
            [attributes::LOCAL_TEMPERATURE, attributes::SYSTEM_MODE]
        );
    }
}
