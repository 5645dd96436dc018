//! Common types used throughout the protocol

use thiserror::Error;

/// Protocol errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Frame too short: {0} bytes")]
    FrameTooShort(usize),

    #[error("Payload too long: {len} bytes (capacity {capacity})")]
    PayloadTooLong { len: usize, capacity: usize },
}

/// ZCL frame types (frame control bits 0-1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FrameType {
    #[default]
    Global = 0x00,
    ClusterSpecific = 0x01,
}

impl FrameType {
    #[must_use]
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x03 {
            0x00 => Some(FrameType::Global),
            0x01 => Some(FrameType::ClusterSpecific),
            _ => None,
        }
    }
}

/// ZCL direction (frame control bit 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Direction {
    #[default]
    ClientToServer = 0x00,
    ServerToClient = 0x01,
}

/// Decoded ZCL frame control field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameControl {
    pub frame_type: FrameType,
    pub manufacturer_specific: bool,
    pub direction: Direction,
    pub disable_default_response: bool,
}

impl FrameControl {
    /// Parse the frame control byte
    #[allow(clippy::missing_errors_doc)]
    pub fn from_byte(byte: u8) -> Result<Self, ProtocolError> {
        let frame_type = FrameType::from_bits(byte).ok_or_else(|| {
            ProtocolError::InvalidFrame(format!("Reserved frame type: {:#04x}", byte & 0x03))
        })?;

        Ok(Self {
            frame_type,
            manufacturer_specific: (byte & 0x04) != 0,
            direction: if (byte & 0x08) != 0 {
                Direction::ServerToClient
            } else {
                Direction::ClientToServer
            },
            disable_default_response: (byte & 0x10) != 0,
        })
    }

    /// Pack into the frame control byte
    #[must_use]
    pub fn to_byte(&self) -> u8 {
        let mut byte = self.frame_type as u8;
        if self.manufacturer_specific {
            byte |= 0x04;
        }
        if self.direction == Direction::ServerToClient {
            byte |= 0x08;
        }
        if self.disable_default_response {
            byte |= 0x10;
        }
        byte
    }

    /// Check if this is a cluster-specific command (vs global)
    #[must_use]
    pub fn is_cluster_specific(&self) -> bool {
        self.frame_type == FrameType::ClusterSpecific
    }
}

/// ZCL cluster IDs
pub mod clusters {
    pub const BASIC: u16 = 0x0000;
    pub const IDENTIFY: u16 = 0x0003;
    pub const GROUPS: u16 = 0x0004;
    pub const SCENES: u16 = 0x0005;
    pub const ON_OFF: u16 = 0x0006;
    pub const LEVEL_CONTROL: u16 = 0x0008;
    pub const COLOR_CONTROL: u16 = 0x0300;
}

/// ZCL profile IDs
pub mod profiles {
    pub const ZDO: u16 = 0x0000;
    pub const HOME_AUTOMATION: u16 = 0x0104;
}

/// Home Automation device IDs
pub mod devices {
    pub const ON_OFF_LIGHT: u16 = 0x0100;
    pub const DIMMABLE_LIGHT: u16 = 0x0101;
    pub const COLOR_DIMMABLE_LIGHT: u16 = 0x0102;
}
