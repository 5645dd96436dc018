//! Frame ingestion: JSON-lines APS indications in, light state out

use crate::config::{ColorModelKind, HostConfig};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use zcl_protocol::{ApsIndication, ClusterLibraryFrame, ProtocolError};
use zigbee_ha::{HueSaturationLight, LightSnapshot, XyColorLight, ZigbeeNode};

/// Errors for a single input line
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Malformed indication: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// A node hosting one color dimmable light
pub struct Host {
    node: ZigbeeNode,
    config: HostConfig,
}

impl Host {
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        let mut node: ZigbeeNode = ZigbeeNode::new();
        let bound = match config.color_model {
            ColorModelKind::Xy => {
                node.set_endpoint(config.endpoint, Some(Box::new(XyColorLight::new())))
            }
            ColorModelKind::HueSaturation => {
                node.set_endpoint(config.endpoint, Some(Box::new(HueSaturationLight::new())))
            }
        };
        if !bound {
            tracing::warn!("Light endpoint {} could not be bound", config.endpoint);
        }
        Self { node, config }
    }

    /// Current state of the hosted light
    #[must_use]
    pub fn snapshot(&self) -> Option<LightSnapshot> {
        match self.config.color_model {
            ColorModelKind::Xy => self
                .node
                .endpoint_as::<XyColorLight>(self.config.endpoint)
                .map(XyColorLight::snapshot),
            ColorModelKind::HueSaturation => self
                .node
                .endpoint_as::<HueSaturationLight>(self.config.endpoint)
                .map(HueSaturationLight::snapshot),
        }
    }

    /// Decode one line and run it through the node; blank lines are skipped
    pub fn handle_line(&mut self, line: &str) -> Result<Option<LightSnapshot>, IngestError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let indication: ApsIndication = serde_json::from_str(line)?;
        let frame = ClusterLibraryFrame::decode(&indication)?;

        tracing::debug!(
            "Frame from {} ({:#06x}) ep{} -> ep{} cluster={:#06x} cmd={:#04x}",
            indication.format_ieee(),
            frame.short_source_address,
            frame.source_endpoint,
            frame.destination_endpoint,
            frame.cluster_id,
            frame.command_id
        );

        self.node.process_frame(&frame);
        Ok(self.snapshot())
    }
}

/// Feed every line from `reader` through the host, writing a state line per frame
///
/// Bad lines are logged and skipped. Returns the number of frames processed.
pub async fn run<R, W>(host: &mut Host, reader: R, mut writer: W) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut processed = 0;

    while let Some(line) = lines.next_line().await? {
        match host.handle_line(&line) {
            Ok(Some(snapshot)) => {
                processed += 1;
                let mut json = serde_json::to_vec(&snapshot)?;
                json.push(b'\n');
                writer.write_all(&json).await?;
                writer.flush().await?;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Skipping input line: {}", e),
        }
    }

    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cluster_id: u16, asdu: &[u8]) -> String {
        serde_json::json!({
            "long_source_address": 0x0017_8801_0203_0405_u64,
            "short_source_address": 0x1234,
            "source_endpoint": 1,
            "destination_endpoint": 1,
            "profile_id": 0x0104,
            "cluster_id": cluster_id,
            "asdu": asdu,
        })
        .to_string()
    }

    #[test]
    fn test_handle_line() {
        let mut host = Host::new(HostConfig::default());
        let snapshot = host.handle_line(&line(0x0006, &[0x01, 0x01, 0x01])).unwrap().unwrap();
        assert!(snapshot.on);
        assert_eq!(snapshot.level, 0xFFFF);

        let snapshot = host
            .handle_line(&line(0x0008, &[0x01, 0x02, 0x00, 0x80, 0x00, 0x00]))
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.level, 32896);

        assert!(host.handle_line("   ").unwrap().is_none());
    }

    #[test]
    fn test_handle_bad_lines() {
        let mut host = Host::new(HostConfig::default());
        assert!(matches!(host.handle_line("{not json"), Err(IngestError::Json(_))));
        assert!(matches!(
            host.handle_line(&line(0x0006, &[0x01])),
            Err(IngestError::Protocol(ProtocolError::FrameTooShort(1)))
        ));
        assert!(!host.snapshot().unwrap().on);
    }

    #[test]
    fn test_hue_saturation_host() {
        let config = HostConfig {
            endpoint: 3,
            color_model: ColorModelKind::HueSaturation,
        };
        let mut host = Host::new(config);
        let snapshot = host.snapshot().unwrap();
        assert_eq!(
            serde_json::to_value(snapshot.color).unwrap(),
            serde_json::json!({ "model": "hue_saturation", "hue": 0, "saturation": 0 })
        );

        // Frame addressed to endpoint 1 finds an empty slot
        let snapshot = host.handle_line(&line(0x0006, &[0x01, 0x01, 0x01])).unwrap().unwrap();
        assert!(!snapshot.on);
    }

    #[tokio::test]
    async fn test_run_writes_state_per_frame() {
        let input = format!(
            "{}\n\ngarbage\n{}\n{}\n",
            line(0x0006, &[0x01, 0x01, 0x01]),
            line(0x0006, &[0x01, 0x02, 0x00]),
            line(0x0006, &[0x01, 0x03, 0x02]),
        );
        let mut host = Host::new(HostConfig::default());
        let mut output = Vec::new();

        let processed = run(&mut host, input.as_bytes(), &mut output).await.unwrap();
        assert_eq!(processed, 3);

        let states: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0]["on"], true);
        assert_eq!(states[1]["on"], false);
        assert_eq!(states[1]["level"], 0);
        assert_eq!(states[2]["on"], true);
    }
}
