//! Convenience re-exports for user programs.
//!
//! Import everything with `use pbrick::prelude::*;` to get the parameter
//! groups and timing helpers without hunting through submodules.
//!
//! # Example
//!
//! ```rust
//! use pbrick::prelude::*;
//!
//! let port = Port::A;
//! let anchor = Align::Center;
//! let watch = StopWatch::new();
//! let _ = (port, anchor, watch);
//! ```

/// All symbolic parameter groups, including the forwarded hardware and
/// media groups.
pub use crate::parameters::{
    Align, Button, Color, Direction, ImageFile, Port, SoundFile, Stop,
};

/// Timing helpers.
pub use crate::tools::{StopWatch, wait};
