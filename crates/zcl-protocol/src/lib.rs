//! ZigBee Cluster Library frame layer
//!
//! This crate holds the decoded ZCL frame handed over by the radio module,
//! the cluster/profile/command identifiers used by Home Automation lights,
//! and the ZCL header codec.

pub mod aps;
pub mod commands;
pub mod frame;
pub mod types;

pub use aps::ApsIndication;
pub use commands::{ColorControlCommand, LevelControlCommand, OnOffCommand};
pub use frame::{ClusterLibraryFrame, PAYLOAD_CAPACITY};
pub use types::*;
