//! ZCL cluster-specific command identifiers

/// On/Off cluster commands (0x0006)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OnOffCommand {
    Off = 0x00,
    On = 0x01,
    Toggle = 0x02,
}

impl OnOffCommand {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(OnOffCommand::Off),
            0x01 => Some(OnOffCommand::On),
            0x02 => Some(OnOffCommand::Toggle),
            _ => None,
        }
    }
}

/// Level Control cluster commands (0x0008)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LevelControlCommand {
    MoveToLevel = 0x00,
    Move = 0x01,
    Step = 0x02,
    Stop = 0x03,
    MoveToLevelWithOnOff = 0x04,
    MoveWithOnOff = 0x05,
    StepWithOnOff = 0x06,
    StopWithOnOff = 0x07,
}

impl LevelControlCommand {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(LevelControlCommand::MoveToLevel),
            0x01 => Some(LevelControlCommand::Move),
            0x02 => Some(LevelControlCommand::Step),
            0x03 => Some(LevelControlCommand::Stop),
            0x04 => Some(LevelControlCommand::MoveToLevelWithOnOff),
            0x05 => Some(LevelControlCommand::MoveWithOnOff),
            0x06 => Some(LevelControlCommand::StepWithOnOff),
            0x07 => Some(LevelControlCommand::StopWithOnOff),
            _ => None,
        }
    }
}

/// Color Control cluster commands (0x0300), hue/saturation subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorControlCommand {
    MoveToHue = 0x00,
    MoveHue = 0x01,
    StepHue = 0x02,
    MoveToSaturation = 0x03,
    MoveSaturation = 0x04,
    StepSaturation = 0x05,
    MoveToHueAndSaturation = 0x06,
    StopMoveStep = 0x47,
}

impl ColorControlCommand {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(ColorControlCommand::MoveToHue),
            0x01 => Some(ColorControlCommand::MoveHue),
            0x02 => Some(ColorControlCommand::StepHue),
            0x03 => Some(ColorControlCommand::MoveToSaturation),
            0x04 => Some(ColorControlCommand::MoveSaturation),
            0x05 => Some(ColorControlCommand::StepSaturation),
            0x06 => Some(ColorControlCommand::MoveToHueAndSaturation),
            0x47 => Some(ColorControlCommand::StopMoveStep),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_control_ids_are_distinct() {
        for id in 0x00..=0x07u8 {
            let cmd = LevelControlCommand::from_u8(id).unwrap();
            assert_eq!(cmd as u8, id);
        }
        assert_eq!(LevelControlCommand::from_u8(0x08), None);
    }

    #[test]
    fn test_color_control_stop_move_step() {
        assert_eq!(
            ColorControlCommand::from_u8(0x47),
            Some(ColorControlCommand::StopMoveStep)
        );
        assert_eq!(ColorControlCommand::from_u8(0x07), None);
    }

    #[test]
    fn test_on_off_unknown() {
        assert_eq!(OnOffCommand::from_u8(0x40), None);
    }
}
