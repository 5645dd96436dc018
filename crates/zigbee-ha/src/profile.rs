//! Profile descriptors
//!
//! A profile declares which clusters an endpoint serves (input) and
//! drives (output). Used for introspection only; command routing inside an
//! endpoint does not consult it.

use crate::cluster::{descriptors, ClusterDescriptor};
use zcl_protocol::profiles;

/// Capability declaration of a profile
pub trait Profile {
    fn profile_id(&self) -> u16;

    /// Server-side clusters
    fn input_clusters(&self) -> &[ClusterDescriptor];

    /// Client-side clusters
    fn output_clusters(&self) -> &[ClusterDescriptor];

    fn input_cluster(&self, cluster_id: u16) -> Option<&ClusterDescriptor> {
        self.input_clusters().iter().find(|c| c.id == cluster_id)
    }

    fn output_cluster(&self, cluster_id: u16) -> Option<&ClusterDescriptor> {
        self.output_clusters().iter().find(|c| c.id == cluster_id)
    }
}

/// A profile whose cluster lists are fixed at build time
#[derive(Debug, Clone, Copy)]
pub struct StaticProfile {
    pub profile_id: u16,
    pub input: &'static [ClusterDescriptor],
    pub output: &'static [ClusterDescriptor],
}

impl Profile for StaticProfile {
    fn profile_id(&self) -> u16 {
        self.profile_id
    }

    fn input_clusters(&self) -> &[ClusterDescriptor] {
        self.input
    }

    fn output_clusters(&self) -> &[ClusterDescriptor] {
        self.output
    }
}

/// Home Automation profile as served by a color dimmable light
pub static HOME_AUTOMATION_LIGHT: StaticProfile = StaticProfile {
    profile_id: profiles::HOME_AUTOMATION,
    input: &[
        descriptors::BASIC,
        descriptors::IDENTIFY,
        descriptors::GROUPS,
        descriptors::SCENES,
        descriptors::ON_OFF,
        descriptors::LEVEL_CONTROL,
        descriptors::COLOR_CONTROL,
    ],
    output: &[],
};
