// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Window covering cluster (0x0102).

use crate::types::AttributeId;

use super::FEATURE_MAP_ATTRIBUTE_ID;

/// Cluster identifier.
pub const ID: u32 = 0x0102;

/// Attributes read by the cover entity.
pub mod attributes {
    use super::{AttributeId, FEATURE_MAP_ATTRIBUTE_ID, ID};

    /// Lift position in percent, 0 meaning closed.
    pub const CURRENT_POSITION_LIFT_PERCENTAGE: AttributeId = AttributeId::new(ID, 0x0008);
    /// Motion status bitmap.
    pub const OPERATIONAL_STATUS: AttributeId = AttributeId::new(ID, 0x000A);
    /// Feature bitmap.
    pub const FEATURE_MAP: AttributeId = AttributeId::new(ID, FEATURE_MAP_ATTRIBUTE_ID);
}

/// Commands sent by the cover entity.
pub mod commands {
    /// Move to the fully open position.
    pub const UP_OR_OPEN: u32 = 0x00;
    /// Move to the fully closed position.
    pub const DOWN_OR_CLOSE: u32 = 0x01;
    /// Stop any motion.
    pub const STOP_MOTION: u32 = 0x02;
}
