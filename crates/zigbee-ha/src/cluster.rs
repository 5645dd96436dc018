//! ZCL (Zigbee Cluster Library) definitions

use serde::Serialize;

/// Common ZCL cluster IDs
pub use zcl_protocol::clusters as id;

/// Identity of a cluster as declared by a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClusterDescriptor {
    pub id: u16,
    pub name: &'static str,
}

impl ClusterDescriptor {
    #[must_use]
    pub const fn new(id: u16, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// Descriptors for the clusters a Home Automation light serves
pub mod descriptors {
    use super::{id, ClusterDescriptor};

    pub const BASIC: ClusterDescriptor = ClusterDescriptor::new(id::BASIC, "Basic");
    pub const IDENTIFY: ClusterDescriptor = ClusterDescriptor::new(id::IDENTIFY, "Identify");
    pub const GROUPS: ClusterDescriptor = ClusterDescriptor::new(id::GROUPS, "Groups");
    pub const SCENES: ClusterDescriptor = ClusterDescriptor::new(id::SCENES, "Scenes");
    pub const ON_OFF: ClusterDescriptor = ClusterDescriptor::new(id::ON_OFF, "On/Off");
    pub const LEVEL_CONTROL: ClusterDescriptor =
        ClusterDescriptor::new(id::LEVEL_CONTROL, "Level Control");
    pub const COLOR_CONTROL: ClusterDescriptor =
        ClusterDescriptor::new(id::COLOR_CONTROL, "Color Control");
}

/// Level Control "Move to Level" payload
///
/// ```text
/// [Level: 1 byte]
/// [Transition Time: 2 bytes LE] (1/10 s, optional here)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToLevel {
    pub level: u8,
    pub transition_time: Option<u16>,
}

impl MoveToLevel {
    /// Parse from a command payload; `None` if the level byte is missing
    #[must_use]
    pub fn parse(payload: &[u8]) -> Option<Self> {
        let (&level, rest) = payload.split_first()?;
        let transition_time = match rest {
            [lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
            _ => None,
        };
        Some(Self {
            level,
            transition_time,
        })
    }

    /// Level rescaled from 0..=0xFF to 0..=0xFFFF
    ///
    /// 0xFFFF / 0xFF == 257, so this is exact and matches
    /// `round(level / 255 * 65535)` for every input.
    #[must_use]
    pub fn level_u16(&self) -> u16 {
        u16::from(self.level) * 257
    }
}
