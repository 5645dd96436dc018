//! Decoded ZCL frame as delivered to the application layer

use crate::aps::ApsIndication;
use crate::types::{FrameControl, FrameType, ProtocolError};
use bytes::{Buf, BufMut, BytesMut};

/// Capacity of the payload buffer carried by every frame
pub const PAYLOAD_CAPACITY: usize = 128;

/// Minimum ZCL header size: `frame_control(1)` + tsn(1) + command(1) = 3
pub const MIN_HEADER_SIZE: usize = 3;

/// A ZCL frame together with the APS addressing it arrived with
///
/// ASDU layout:
/// ```text
/// [Frame Control: 1 byte]
/// [Manufacturer Code: 2 bytes LE] (only if manufacturer-specific bit set)
/// [Transaction Sequence: 1 byte]
/// [Command ID: 1 byte]
/// [Payload: variable]
/// ```
///
/// The payload lives in a fixed buffer; `payload()` only ever exposes the
/// first `payload_len` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLibraryFrame {
    // From APS frame
    pub long_source_address: u64,
    pub short_source_address: u16,
    pub source_endpoint: u8,
    pub destination_endpoint: u8,
    pub cluster_id: u16,
    pub profile_id: u16,

    // From ZCL frame
    pub frame_control: FrameControl,
    pub manufacturer_code: Option<u16>,
    pub transaction_sequence_number: u8,
    pub command_id: u8,
    payload: [u8; PAYLOAD_CAPACITY],
    payload_len: usize,
}

impl ClusterLibraryFrame {
    /// Create a cluster-specific command frame (client to server)
    #[allow(clippy::missing_errors_doc)]
    pub fn cluster_command(
        profile_id: u16,
        cluster_id: u16,
        destination_endpoint: u8,
        command_id: u8,
        payload: &[u8],
    ) -> Result<Self, ProtocolError> {
        let mut frame = Self {
            long_source_address: 0,
            short_source_address: 0,
            source_endpoint: 0x01,
            destination_endpoint,
            cluster_id,
            profile_id,
            frame_control: FrameControl {
                frame_type: FrameType::ClusterSpecific,
                ..FrameControl::default()
            },
            manufacturer_code: None,
            transaction_sequence_number: 0,
            command_id,
            payload: [0; PAYLOAD_CAPACITY],
            payload_len: 0,
        };
        frame.set_payload(payload)?;
        Ok(frame)
    }

    /// Decode the ZCL header and payload out of an APS indication
    #[allow(clippy::missing_errors_doc)]
    pub fn decode(indication: &ApsIndication) -> Result<Self, ProtocolError> {
        let total = indication.asdu.len();
        let mut buf = indication.asdu.as_slice();

        if buf.remaining() < MIN_HEADER_SIZE {
            return Err(ProtocolError::FrameTooShort(total));
        }

        let frame_control = FrameControl::from_byte(buf.get_u8())?;

        let manufacturer_code = if frame_control.manufacturer_specific {
            // Manufacturer code plus tsn and command still to come
            if buf.remaining() < 4 {
                return Err(ProtocolError::FrameTooShort(total));
            }
            Some(buf.get_u16_le())
        } else {
            None
        };

        let transaction_sequence_number = buf.get_u8();
        let command_id = buf.get_u8();

        let mut frame = Self {
            long_source_address: indication.long_source_address,
            short_source_address: indication.short_source_address,
            source_endpoint: indication.source_endpoint,
            destination_endpoint: indication.destination_endpoint,
            cluster_id: indication.cluster_id,
            profile_id: indication.profile_id,
            frame_control,
            manufacturer_code,
            transaction_sequence_number,
            command_id,
            payload: [0; PAYLOAD_CAPACITY],
            payload_len: 0,
        };
        frame.set_payload(buf)?;

        tracing::trace!(
            "Decoded ZCL frame: cluster={:#06x} cmd={:#04x} tsn={} len={}",
            frame.cluster_id,
            frame.command_id,
            frame.transaction_sequence_number,
            frame.payload_len
        );

        Ok(frame)
    }

    /// Replace the payload; fails without touching the frame if it does not fit
    #[allow(clippy::missing_errors_doc)]
    pub fn set_payload(&mut self, data: &[u8]) -> Result<(), ProtocolError> {
        if data.len() > PAYLOAD_CAPACITY {
            return Err(ProtocolError::PayloadTooLong {
                len: data.len(),
                capacity: PAYLOAD_CAPACITY,
            });
        }
        self.payload[..data.len()].copy_from_slice(data);
        self.payload_len = data.len();
        Ok(())
    }

    /// Get the payload
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload[..self.payload_len]
    }

    #[must_use]
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// Serialize the ZCL part back to ASDU bytes
    #[must_use]
    pub fn to_asdu(&self) -> Vec<u8> {
        let mut data = BytesMut::with_capacity(MIN_HEADER_SIZE + 2 + self.payload_len);

        let mut frame_control = self.frame_control;
        frame_control.manufacturer_specific = self.manufacturer_code.is_some();
        data.put_u8(frame_control.to_byte());
        if let Some(mfr) = self.manufacturer_code {
            data.put_u16_le(mfr);
        }
        data.put_u8(self.transaction_sequence_number);
        data.put_u8(self.command_id);
        data.put_slice(self.payload());

        data.to_vec()
    }
}
