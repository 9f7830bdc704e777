//! Shared vocabulary for shot-sorter crates.
//!
//! Game identifiers, destination folder naming, and the closed set of
//! capture-device layouts. Nothing in here touches the filesystem or the
//! network.

pub mod game;
pub mod layout;

pub use game::{GameFolder, GameId, GameIdParseError};
pub use layout::{DeviceLayout, LayoutParseError};
