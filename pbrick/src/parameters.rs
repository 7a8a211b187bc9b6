//! Symbolic parameters accepted by the library's APIs.
//!
//! Every constant a user program passes around — which port, which
//! direction, which alignment corner — resolves from this one module,
//! regardless of which crate actually owns its definition. [`Align`] is
//! defined here; the hardware groups come from `pbrick-io` and the media
//! groups from `pbrick-media`, forwarded unchanged so the provider stays
//! the single source of truth for their values.

use serde::{Deserialize, Serialize};

// Hardware constant groups, owned by the I/O layer.
pub use pbrick_io::{Button, Color, Direction, Port, Stop};

// Media resource groups, kept reachable from here so programs written
// against the 1.0 interface keep resolving these names.
pub use pbrick_media::{ImageFile, SoundFile};

/// Where to anchor content on the display.
///
/// The nine members tile the screen like a numeric keypad, numbered
/// row-major from the bottom-left corner.
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
pub enum Align {
    BottomLeft = 1,
    Bottom = 2,
    BottomRight = 3,
    Left = 4,
    Center = 5,
    Right = 6,
    TopLeft = 7,
    Top = 8,
    TopRight = 9,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_align_values() {
        assert_eq!(Align::BottomLeft as u8, 1);
        assert_eq!(Align::Bottom as u8, 2);
        assert_eq!(Align::BottomRight as u8, 3);
        assert_eq!(Align::Left as u8, 4);
        assert_eq!(Align::Center as u8, 5);
        assert_eq!(Align::Right as u8, 6);
        assert_eq!(Align::TopLeft as u8, 7);
        assert_eq!(Align::Top as u8, 8);
        assert_eq!(Align::TopRight as u8, 9);
    }

    #[test]
    fn test_align_labels_resolve_and_are_stable() {
        // Repeated resolution of the same label yields the same member.
        for _ in 0..3 {
            assert_eq!("TOP_LEFT".parse::<Align>().unwrap(), Align::TopLeft);
            assert_eq!("CENTER".parse::<Align>().unwrap(), Align::Center);
        }
        assert_eq!(Align::BottomRight.to_string(), "BOTTOM_RIGHT");
    }

    #[test]
    fn test_unknown_label_fails_without_disturbing_the_rest() {
        assert_eq!(
            "NONEXISTENT".parse::<Align>(),
            Err(strum::ParseError::VariantNotFound)
        );
        // The group is intact after the failed lookup.
        assert_eq!(Align::iter().count(), 9);
        assert_eq!("TOP".parse::<Align>().unwrap(), Align::Top);
    }

    #[test]
    fn test_nine_distinct_labels() {
        let labels: std::collections::HashSet<_> =
            Align::iter().map(|a| a.to_string()).collect();
        assert_eq!(labels.len(), 9);
    }
}
