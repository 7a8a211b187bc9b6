//! User-facing robotics control library for the programmable brick.
//!
//! The crate's surface is deliberately small: [`parameters`] is the single
//! namespace every symbolic constant resolves from, [`tools`] carries the
//! timing helpers, and [`prelude`] re-exports both for one-line imports.
//!
//! Constants are plain field-less enums baked into the binary. They are
//! immutable for the life of the process and safe to share across threads
//! without synchronization; resolving a label either succeeds with the
//! same member every time or fails with [`strum::ParseError`].

pub mod parameters;
pub mod prelude;
pub mod tools;
