//! Hardware-facing symbolic constants for the brick I/O layer.
//!
//! This crate owns the closed constant sets the firmware understands:
//! which connector, which rotation direction, which stopping behavior,
//! which color code, which button bit. Higher layers forward these groups
//! to user programs without redefining or validating them.
//!
//! Every group is a field-less enum whose discriminant is the firmware
//! value, resolvable by label via [`FromStr`](std::str::FromStr) and
//! enumerable via `strum::IntoEnumIterator`.

pub mod button;
pub mod light;
pub mod motor;
pub mod port;

pub use button::Button;
pub use light::Color;
pub use motor::{Direction, Stop};
pub use port::{Port, PortError};
