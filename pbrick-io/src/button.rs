//! Buttons on the brick and on the beacon remote.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A pressable button.
///
/// Each member is a single bit, so a set of pressed buttons packs into one
/// word when read back from the firmware.
#[repr(u16)]
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
pub enum Button {
    LeftDown = 1 << 1,
    Down = 1 << 2,
    RightDown = 1 << 3,
    Left = 1 << 4,
    Center = 1 << 5,
    Right = 1 << 6,
    LeftUp = 1 << 7,
    Up = 1 << 8,
    RightUp = 1 << 9,
    Beacon = 1 << 10,
}

impl Button {
    /// The buttons whose bits are set in `mask`, in declaration order.
    pub fn unpack(mask: u16) -> impl Iterator<Item = Button> {
        Self::iter().filter(move |b| mask & (*b as u16) != 0)
    }
}
