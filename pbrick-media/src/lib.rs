//! Media resources preinstalled on the ev3dev OS image.
//!
//! This crate owns the closed sets of stock sound clips and mono images the
//! OS image ships with. Each member resolves by its SCREAMING_SNAKE_CASE
//! label and maps to a fixed absolute path; nothing here touches the disk.
//! Playback and display live with the device layer, not here.

pub mod image;
pub mod sound;

pub use image::ImageFile;
pub use sound::SoundFile;
