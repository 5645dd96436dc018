//! Endpoint abstraction

use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::any::Any;
use zcl_protocol::{clusters, ClusterLibraryFrame};

/// An addressable logical device hosted on this node
///
/// Each device type owns its runtime state and its cluster dispatch.
pub trait Endpoint: Any {
    /// Capability declaration (profile id and cluster lists)
    fn profile(&self) -> &dyn Profile;

    fn profile_id(&self) -> u16 {
        self.profile().profile_id()
    }

    /// Device ID within the profile
    fn device_id(&self) -> u16;

    fn device_version(&self) -> u8;

    /// Handle a frame already routed to this endpoint
    fn process_frame(&mut self, frame: &ClusterLibraryFrame);

    fn as_any(&self) -> &dyn Any;

    /// Describe this endpoint as it would appear in a ZDO simple descriptor
    fn simple_descriptor(&self, id: u8) -> SimpleDescriptor {
        let profile = self.profile();
        SimpleDescriptor {
            id,
            profile_id: self.profile_id(),
            device_id: self.device_id(),
            device_version: self.device_version(),
            in_clusters: profile.input_clusters().iter().map(|c| c.id).collect(),
            out_clusters: profile.output_clusters().iter().map(|c| c.id).collect(),
        }
    }
}

/// A device endpoint as advertised to the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleDescriptor {
    /// Endpoint ID
    pub id: u8,
    /// Profile ID (e.g., 0x0104 for Home Automation)
    pub profile_id: u16,
    /// Device ID within the profile
    pub device_id: u16,
    pub device_version: u8,
    /// Input (server) clusters
    pub in_clusters: Vec<u16>,
    /// Output (client) clusters
    pub out_clusters: Vec<u16>,
}

impl SimpleDescriptor {
    /// Check if endpoint has a specific cluster
    #[must_use]
    pub fn has_cluster(&self, cluster_id: u16) -> bool {
        self.in_clusters.contains(&cluster_id) || self.out_clusters.contains(&cluster_id)
    }

    /// Check if this is a light endpoint
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.has_cluster(clusters::ON_OFF) || self.has_cluster(clusters::LEVEL_CONTROL)
    }

    /// Check if this is a color light endpoint
    #[must_use]
    pub fn is_color_light(&self) -> bool {
        self.has_cluster(clusters::COLOR_CONTROL)
    }
}
