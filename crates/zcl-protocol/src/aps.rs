//! APS data indication as handed over by the radio module

use serde::{Deserialize, Serialize};

/// APS Data Indication - addressing plus the raw ZCL ASDU
///
/// The radio module has already resolved MAC/NWK addressing and security;
/// only the fields needed above the APS layer are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApsIndication {
    /// Source IEEE address (EUI-64)
    #[serde(default)]
    pub long_source_address: u64,
    /// Source network short address
    #[serde(default)]
    pub short_source_address: u16,
    pub source_endpoint: u8,
    pub destination_endpoint: u8,
    pub profile_id: u16,
    pub cluster_id: u16,
    /// ZCL header and payload
    pub asdu: Vec<u8>,
}

impl ApsIndication {
    /// Format the long source address as string (colon-separated hex)
    #[must_use]
    pub fn format_ieee(&self) -> String {
        self.long_source_address
            .to_be_bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(":")
    }
}
