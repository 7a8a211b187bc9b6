//! Motor rotation direction and stopping behavior.

use serde::{Deserialize, Serialize};

/// Which way the motor turns for positive speed or angle values.
#[repr(u8)]
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Clockwise as seen from the shaft end of the motor.
    #[default]
    Clockwise = 0,
    Counterclockwise = 1,
}

/// What a motor does when a command ends.
#[repr(u8)]
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stop {
    /// Cut power and let the motor spin out.
    #[default]
    Coast = 0,
    /// Short the windings for passive braking.
    Brake = 1,
    /// Keep correcting back to the stop angle with active feedback.
    Hold = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_values() {
        assert_eq!(Direction::Clockwise as u8, 0);
        assert_eq!(Direction::Counterclockwise as u8, 1);
        assert_eq!(Direction::default(), Direction::Clockwise);
    }

    #[test]
    fn test_stop_values() {
        assert_eq!(Stop::Coast as u8, 0);
        assert_eq!(Stop::Brake as u8, 1);
        assert_eq!(Stop::Hold as u8, 2);
        assert_eq!(Stop::default(), Stop::Coast);
    }

    #[test]
    fn test_labels_resolve() {
        assert_eq!(
            "COUNTERCLOCKWISE".parse::<Direction>().unwrap(),
            Direction::Counterclockwise
        );
        assert_eq!("HOLD".parse::<Stop>().unwrap(), Stop::Hold);
        assert_eq!(Direction::Clockwise.to_string(), "CLOCKWISE");
        assert_eq!(Stop::Brake.to_string(), "BRAKE");
        assert!("FREEWHEEL".parse::<Stop>().is_err());
    }
}
