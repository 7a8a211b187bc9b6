//! Light and surface colors.

use serde::{Deserialize, Serialize};

/// Color of a brick light, or a color a sensor can detect.
///
/// The values match the firmware's light-color table, where 0 means "light
/// off / no color detected" and is deliberately not a member here.
#[repr(u8)]
#[derive(
    Debug,
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
pub enum Color {
    Black = 1,
    Blue = 2,
    Green = 3,
    Yellow = 4,
    Red = 5,
    White = 6,
    Brown = 7,
    Orange = 8,
    Purple = 9,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_color_values_match_firmware_table() {
        assert_eq!(Color::Black as u8, 1);
        assert_eq!(Color::Blue as u8, 2);
        assert_eq!(Color::Green as u8, 3);
        assert_eq!(Color::Yellow as u8, 4);
        assert_eq!(Color::Red as u8, 5);
        assert_eq!(Color::White as u8, 6);
        assert_eq!(Color::Brown as u8, 7);
        assert_eq!(Color::Orange as u8, 8);
        assert_eq!(Color::Purple as u8, 9);
    }

    #[test]
    fn test_zero_is_not_a_color() {
        assert_eq!(Color::from_repr(0), None);
        assert_eq!(Color::iter().count(), 9);
    }

    #[test]
    fn test_labels_resolve() {
        assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
        assert_eq!(Color::Purple.to_string(), "PURPLE");
        assert!("MAGENTA".parse::<Color>().is_err());
    }
}
