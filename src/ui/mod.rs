//! UI module for soundboard-tui
//!
//! This module contains the grouped list surface and the rendering
//! functions that draw it, plus the status bar.

mod helpers;
mod list;
mod render;

pub use helpers::catalog_listing;
pub use list::SoundList;
pub use render::draw;
