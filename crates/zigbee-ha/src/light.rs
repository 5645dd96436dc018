//! Color dimmable light endpoint (HA device 0x0102)
//!
//! State is three independent axes: power (On/Off cluster), level (Level
//! Control cluster) and color (Color Control cluster). The stored level
//! survives power toggles; `level()` reports zero while the light is off.

use crate::cluster::{id, MoveToLevel};
use crate::endpoint::Endpoint;
use crate::profile::{Profile, HOME_AUTOMATION_LIGHT};
use serde::Serialize;
use std::any::Any;
use std::fmt::Debug;
use zcl_protocol::{
    devices, ClusterLibraryFrame, ColorControlCommand, LevelControlCommand, OnOffCommand,
};

/// D65 white point x, `round(0.31271 * 0xFFFF)`
pub const D65_X: u16 = 20493;
/// D65 white point y, `round(0.32902 * 0xFFFF)`
pub const D65_Y: u16 = 21562;

/// Color representation held by a light
pub trait ColorModel: Debug + Default + Clone + Copy + 'static {
    fn snapshot(&self) -> ColorSnapshot;
}

/// CIE 1931 chromaticity, each axis scaled to 0..=0xFFFF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XyColor {
    pub x: u16,
    pub y: u16,
}

impl Default for XyColor {
    fn default() -> Self {
        Self { x: D65_X, y: D65_Y }
    }
}

impl ColorModel for XyColor {
    fn snapshot(&self) -> ColorSnapshot {
        ColorSnapshot::Xy {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HueSaturationColor {
    pub hue: u16,
    pub saturation: u16,
}

impl ColorModel for HueSaturationColor {
    fn snapshot(&self) -> ColorSnapshot {
        ColorSnapshot::HueSaturation {
            hue: self.hue,
            saturation: self.saturation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ColorSnapshot {
    Xy { x: u16, y: u16 },
    HueSaturation { hue: u16, saturation: u16 },
}

/// Point-in-time view of a light for the output driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightSnapshot {
    pub on: bool,
    /// Effective level (0 while off)
    pub level: u16,
    pub stored_level: u16,
    pub color: ColorSnapshot,
}

/// A color dimmable light
#[derive(Debug, Clone)]
pub struct ColorDimmableLight<C: ColorModel = XyColor> {
    light_is_on: bool,
    light_level: u16,
    color: C,
}

pub type XyColorLight = ColorDimmableLight<XyColor>;
pub type HueSaturationLight = ColorDimmableLight<HueSaturationColor>;

impl<C: ColorModel> Default for ColorDimmableLight<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ColorModel> ColorDimmableLight<C> {
    /// Create a light that is off, at full stored level, with the model's default color
    #[must_use]
    pub fn new() -> Self {
        Self {
            light_is_on: false,
            light_level: 0xFFFF,
            color: C::default(),
        }
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.light_is_on
    }

    /// Effective brightness: the stored level while on, 0 while off
    #[must_use]
    pub fn level(&self) -> u16 {
        if self.light_is_on {
            self.light_level
        } else {
            0x0000
        }
    }

    #[must_use]
    pub fn color(&self) -> &C {
        &self.color
    }

    #[must_use]
    pub fn snapshot(&self) -> LightSnapshot {
        LightSnapshot {
            on: self.light_is_on,
            level: self.level(),
            stored_level: self.light_level,
            color: self.color.snapshot(),
        }
    }

    fn process_on_off_command(&mut self, frame: &ClusterLibraryFrame) {
        match OnOffCommand::from_u8(frame.command_id) {
            Some(OnOffCommand::Off) => self.light_is_on = false,
            Some(OnOffCommand::On) => self.light_is_on = true,
            Some(OnOffCommand::Toggle) => self.light_is_on = !self.light_is_on,
            None => {
                tracing::debug!("Ignoring On/Off command {:#04x}", frame.command_id);
            }
        }
    }

    fn process_level_control_command(&mut self, frame: &ClusterLibraryFrame) {
        match LevelControlCommand::from_u8(frame.command_id) {
            Some(LevelControlCommand::MoveToLevel) => match MoveToLevel::parse(frame.payload()) {
                // TODO: honor transition_time once the light has a tick source to step on
                Some(cmd) => self.light_level = cmd.level_u16(),
                None => {
                    tracing::debug!(
                        "Dropping Move to Level with short payload ({} bytes)",
                        frame.payload_len()
                    );
                }
            },
            Some(cmd @ LevelControlCommand::Move) => not_implemented(cmd),
            Some(cmd @ LevelControlCommand::Step) => not_implemented(cmd),
            Some(cmd @ LevelControlCommand::Stop) => not_implemented(cmd),
            Some(cmd @ LevelControlCommand::MoveToLevelWithOnOff) => not_implemented(cmd),
            Some(cmd @ LevelControlCommand::MoveWithOnOff) => not_implemented(cmd),
            Some(cmd @ LevelControlCommand::StepWithOnOff) => not_implemented(cmd),
            Some(cmd @ LevelControlCommand::StopWithOnOff) => not_implemented(cmd),
            None => {
                tracing::debug!("Ignoring Level Control command {:#04x}", frame.command_id);
            }
        }
    }

    /// Color commands do not touch the stored color yet
    fn process_color_control_command(frame: &ClusterLibraryFrame) {
        match ColorControlCommand::from_u8(frame.command_id) {
            Some(cmd @ ColorControlCommand::MoveToHue) => not_implemented(cmd),
            Some(cmd @ ColorControlCommand::MoveHue) => not_implemented(cmd),
            Some(cmd @ ColorControlCommand::StepHue) => not_implemented(cmd),
            Some(cmd @ ColorControlCommand::MoveToSaturation) => not_implemented(cmd),
            Some(cmd @ ColorControlCommand::MoveSaturation) => not_implemented(cmd),
            Some(cmd @ ColorControlCommand::StepSaturation) => not_implemented(cmd),
            Some(cmd @ ColorControlCommand::MoveToHueAndSaturation) => not_implemented(cmd),
            Some(cmd @ ColorControlCommand::StopMoveStep) => not_implemented(cmd),
            None => {
                tracing::debug!("Ignoring Color Control command {:#04x}", frame.command_id);
            }
        }
    }
}

impl ColorDimmableLight<XyColor> {
    #[must_use]
    pub fn x(&self) -> u16 {
        self.color.x
    }

    #[must_use]
    pub fn y(&self) -> u16 {
        self.color.y
    }
}

impl ColorDimmableLight<HueSaturationColor> {
    #[must_use]
    pub fn hue(&self) -> u16 {
        self.color.hue
    }

    #[must_use]
    pub fn saturation(&self) -> u16 {
        self.color.saturation
    }
}

/// Recognized command with no behavior yet
fn not_implemented(command: impl Debug) {
    tracing::trace!("{:?} not implemented, ignoring", command);
}

impl<C: ColorModel> Endpoint for ColorDimmableLight<C> {
    fn profile(&self) -> &dyn Profile {
        &HOME_AUTOMATION_LIGHT
    }

    fn device_id(&self) -> u16 {
        devices::COLOR_DIMMABLE_LIGHT
    }

    fn device_version(&self) -> u8 {
        0x00
    }

    fn process_frame(&mut self, frame: &ClusterLibraryFrame) {
        match frame.cluster_id {
            id::GROUPS => {
                tracing::trace!("Groups cluster not implemented, ignoring");
            }
            id::SCENES => {
                tracing::trace!("Scenes cluster not implemented, ignoring");
            }
            id::ON_OFF => self.process_on_off_command(frame),
            id::LEVEL_CONTROL => self.process_level_control_command(frame),
            id::COLOR_CONTROL => Self::process_color_control_command(frame),
            other => {
                tracing::debug!("Ignoring frame for unsupported cluster {:#06x}", other);
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zcl_protocol::profiles;

    fn frame(cluster_id: u16, command_id: u8, payload: &[u8]) -> ClusterLibraryFrame {
        ClusterLibraryFrame::cluster_command(
            profiles::HOME_AUTOMATION,
            cluster_id,
            1,
            command_id,
            payload,
        )
        .unwrap()
    }

    fn on_off(light: &mut impl Endpoint, cmd: OnOffCommand) {
        light.process_frame(&frame(id::ON_OFF, cmd as u8, &[]));
    }

    fn move_to_level(light: &mut impl Endpoint, level: u8) {
        light.process_frame(&frame(
            id::LEVEL_CONTROL,
            LevelControlCommand::MoveToLevel as u8,
            &[level, 0x00, 0x00],
        ));
    }

    #[test]
    fn test_identity() {
        let light = XyColorLight::new();
        assert_eq!(light.profile_id(), 0x0104);
        assert_eq!(light.device_id(), 0x0102);
        assert_eq!(light.device_version(), 0x00);
    }

    #[test]
    fn test_defaults() {
        let light = XyColorLight::new();
        assert!(!light.is_on());
        assert_eq!(light.level(), 0);
        assert_eq!(light.x(), 20493);
        assert_eq!(light.y(), 21562);
        assert_eq!(light.snapshot().stored_level, 0xFFFF);

        let light = HueSaturationLight::default();
        assert_eq!(light.hue(), 0);
        assert_eq!(light.saturation(), 0);
    }

    #[test]
    fn test_on_off_sequence() {
        let mut light = XyColorLight::new();
        on_off(&mut light, OnOffCommand::On);
        on_off(&mut light, OnOffCommand::On);
        on_off(&mut light, OnOffCommand::Off);
        on_off(&mut light, OnOffCommand::Toggle);
        assert!(light.is_on());
    }

    #[test]
    fn test_toggle_from_construction_turns_on() {
        let mut light = HueSaturationLight::new();
        on_off(&mut light, OnOffCommand::Toggle);
        assert!(light.is_on());
        on_off(&mut light, OnOffCommand::Toggle);
        assert!(!light.is_on());
    }

    #[test]
    fn test_level_survives_off_cycle() {
        let mut light = XyColorLight::new();
        on_off(&mut light, OnOffCommand::On);
        move_to_level(&mut light, 255);
        assert_eq!(light.level(), 65535);

        on_off(&mut light, OnOffCommand::Off);
        assert_eq!(light.level(), 0);

        on_off(&mut light, OnOffCommand::On);
        assert_eq!(light.level(), 65535);
    }

    #[test]
    fn test_level_rescale_only_exposed_while_on() {
        let mut light = XyColorLight::new();
        move_to_level(&mut light, 128);
        assert_eq!(light.level(), 0);
        assert_eq!(light.snapshot().stored_level, 32896);

        on_off(&mut light, OnOffCommand::On);
        assert_eq!(light.level(), 32896);
    }

    #[test]
    fn test_move_to_level_without_transition_time() {
        let mut light = XyColorLight::new();
        on_off(&mut light, OnOffCommand::On);
        light.process_frame(&frame(id::LEVEL_CONTROL, 0x00, &[0x40]));
        assert_eq!(light.level(), 0x40 * 257);
    }

    #[test]
    fn test_short_level_payload_is_dropped() {
        let mut light = XyColorLight::new();
        on_off(&mut light, OnOffCommand::On);
        move_to_level(&mut light, 10);
        let before = light.snapshot();

        light.process_frame(&frame(id::LEVEL_CONTROL, 0x00, &[]));
        assert_eq!(light.snapshot(), before);
    }

    #[test]
    fn test_unimplemented_level_commands_are_no_ops() {
        let mut light = XyColorLight::new();
        on_off(&mut light, OnOffCommand::On);
        move_to_level(&mut light, 100);
        let before = light.snapshot();

        for cmd in 0x01..=0x07u8 {
            light.process_frame(&frame(id::LEVEL_CONTROL, cmd, &[0xFF, 0x01, 0x00, 0x00]));
            assert_eq!(light.snapshot(), before, "level command {cmd:#04x}");
        }
    }

    #[test]
    fn test_color_commands_are_no_ops() {
        let mut light = XyColorLight::new();
        let before = light.snapshot();
        for cmd in [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x47, 0x07, 0x0A] {
            light.process_frame(&frame(id::COLOR_CONTROL, cmd, &[0x10, 0x20, 0x00, 0x00]));
        }
        assert_eq!(light.snapshot(), before);

        let mut light = HueSaturationLight::new();
        let before = light.snapshot();
        light.process_frame(&frame(id::COLOR_CONTROL, 0x06, &[0x10, 0x20, 0x00, 0x00]));
        assert_eq!(light.snapshot(), before);
    }

    #[test]
    fn test_unknown_cluster_and_command_ignored() {
        let mut light = XyColorLight::new();
        on_off(&mut light, OnOffCommand::On);
        let before = light.snapshot();

        light.process_frame(&frame(0x9999, 0x01, &[0xFF]));
        light.process_frame(&frame(id::GROUPS, 0x00, &[0x01, 0x00]));
        light.process_frame(&frame(id::SCENES, 0x05, &[0x01, 0x00, 0x01]));
        light.process_frame(&frame(id::ON_OFF, 0x40, &[]));
        light.process_frame(&frame(id::LEVEL_CONTROL, 0x08, &[0x00]));
        assert_eq!(light.snapshot(), before);
    }

    #[test]
    fn test_simple_descriptor() {
        let light = XyColorLight::new();
        let desc = light.simple_descriptor(11);
        assert_eq!(desc.id, 11);
        assert_eq!(desc.device_id, 0x0102);
        assert!(desc.is_light());
        assert!(desc.is_color_light());
        assert!(desc.has_cluster(id::SCENES));
    }

    #[test]
    fn test_snapshot_json() {
        let mut light = XyColorLight::new();
        on_off(&mut light, OnOffCommand::On);
        let json = serde_json::to_value(light.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "on": true,
                "level": 65535,
                "stored_level": 65535,
                "color": { "model": "xy", "x": 20493, "y": 21562 }
            })
        );
    }
}
