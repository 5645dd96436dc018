//! Zigbee Home Automation application layer
//!
//! This crate routes decoded ZCL frames to the endpoints hosted on a node
//! and dispatches them to per-cluster command handlers.

pub mod cluster;
pub mod endpoint;
pub mod light;
pub mod node;
pub mod profile;

pub use endpoint::{Endpoint, SimpleDescriptor};
pub use light::{ColorDimmableLight, HueSaturationLight, LightSnapshot, XyColorLight};
pub use node::{Route, ZigbeeNode, MAX_ENDPOINTS};
pub use profile::{Profile, StaticProfile, HOME_AUTOMATION_LIGHT};
