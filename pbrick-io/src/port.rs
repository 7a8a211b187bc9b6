//! Input and output ports of the brick.

use serde::{Deserialize, Serialize};

/// A physical connector on the brick.
///
/// The discriminant is the ASCII code of the character printed next to the
/// connector on the housing: letters for the motor (output) ports, digits
/// for the sensor (input) ports. The firmware keys its device tree by that
/// same character.
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
pub enum Port {
    A = b'A',
    B = b'B',
    C = b'C',
    D = b'D',
    S1 = b'1',
    S2 = b'2',
    S3 = b'3',
    S4 = b'4',
}

impl Port {
    /// The character printed next to the connector.
    pub const fn to_char(self) -> char {
        self as u8 as char
    }

    /// Whether a motor can be driven on this port.
    pub const fn is_output(self) -> bool {
        matches!(self, Self::A | Self::B | Self::C | Self::D)
    }

    /// Whether a sensor can be read on this port.
    pub const fn is_input(self) -> bool {
        !self.is_output()
    }
}

impl TryFrom<char> for Port {
    type Error = PortError;

    fn try_from(id: char) -> Result<Self, Self::Error> {
        match id {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            '1' => Ok(Self::S1),
            '2' => Ok(Self::S2),
            '3' => Ok(Self::S3),
            '4' => Ok(Self::S4),
            other => Err(PortError::UnknownPort(other)),
        }
    }
}

/// Errors for port identity conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    /// The character does not name a connector on this brick.
    UnknownPort(char),
}

impl std::fmt::Display for PortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPort(id) => write!(f, "no port '{}' on this brick", id),
        }
    }
}

impl std::error::Error for PortError {}
