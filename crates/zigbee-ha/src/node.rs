//! Endpoint table and frame routing

use crate::endpoint::{Endpoint, SimpleDescriptor};
use zcl_protocol::ClusterLibraryFrame;

/// Number of endpoint slots on a node
pub const MAX_ENDPOINTS: usize = 16;

/// Outcome of routing a frame against the endpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Frame goes to the endpoint in this slot
    Delivered(usize),
    /// Destination endpoint is past the table
    NoSuchEndpoint,
    /// Nothing bound at the destination
    EmptySlot,
    /// Bound endpoint belongs to a different profile
    ProfileMismatch { endpoint: u16, frame: u16 },
}

/// The endpoints hosted on one radio node
///
/// Each slot exclusively owns the endpoint bound to it. Frames are handled
/// one at a time to completion; routing misses are dropped without reply.
pub struct ZigbeeNode<const N: usize = MAX_ENDPOINTS> {
    endpoints: [Option<Box<dyn Endpoint>>; N],
}

impl<const N: usize> Default for ZigbeeNode<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ZigbeeNode<N> {
    /// Create a node with every slot empty
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoints: std::array::from_fn(|_| None),
        }
    }

    /// Number of slots
    #[must_use]
    pub const fn endpoints_len(&self) -> usize {
        N
    }

    /// Get the endpoint bound at `index`, if any
    #[must_use]
    pub fn endpoint(&self, index: usize) -> Option<&dyn Endpoint> {
        self.endpoints.get(index)?.as_deref()
    }

    pub fn endpoint_mut(&mut self, index: usize) -> Option<&mut (dyn Endpoint + 'static)> {
        self.endpoints.get_mut(index)?.as_deref_mut()
    }

    /// Get the endpoint at `index` as a concrete device type
    #[must_use]
    pub fn endpoint_as<T: Endpoint>(&self, index: usize) -> Option<&T> {
        self.endpoint(index)?.as_any().downcast_ref::<T>()
    }

    /// Bind, rebind or clear (`None`) a slot
    ///
    /// Returns `false` without touching the table if `index` is out of range.
    pub fn set_endpoint(&mut self, index: usize, endpoint: Option<Box<dyn Endpoint>>) -> bool {
        let Some(slot) = self.endpoints.get_mut(index) else {
            tracing::debug!("Cannot bind endpoint {}: table holds {}", index, N);
            return false;
        };

        match &endpoint {
            Some(ep) => tracing::info!(
                "Binding endpoint {}: profile={:#06x} device={:#06x}",
                index,
                ep.profile_id(),
                ep.device_id()
            ),
            None => tracing::info!("Clearing endpoint {}", index),
        }

        *slot = endpoint;
        true
    }

    /// Decide where a frame would go without delivering it
    #[must_use]
    pub fn route(&self, frame: &ClusterLibraryFrame) -> Route {
        let index = usize::from(frame.destination_endpoint);
        if index >= N {
            return Route::NoSuchEndpoint;
        }

        match self.endpoint(index) {
            None => Route::EmptySlot,
            Some(ep) if ep.profile_id() != frame.profile_id => Route::ProfileMismatch {
                endpoint: ep.profile_id(),
                frame: frame.profile_id,
            },
            Some(_) => Route::Delivered(index),
        }
    }

    /// Route a frame to its endpoint and let it handle the command
    pub fn process_frame(&mut self, frame: &ClusterLibraryFrame) {
        match self.route(frame) {
            Route::Delivered(index) => {
                if let Some(ep) = self.endpoint_mut(index) {
                    ep.process_frame(frame);
                }
            }
            miss => {
                tracing::debug!(
                    "Dropping frame for endpoint {} cluster={:#06x}: {:?}",
                    frame.destination_endpoint,
                    frame.cluster_id,
                    miss
                );
            }
        }
    }

    /// Simple descriptors of every bound endpoint
    #[must_use]
    pub fn descriptors(&self) -> Vec<SimpleDescriptor> {
        self.endpoints
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let id = u8::try_from(index).ok()?;
                slot.as_deref().map(|ep| ep.simple_descriptor(id))
            })
            .collect()
    }
}
