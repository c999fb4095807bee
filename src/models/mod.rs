//! Data models for the soundboard
//!
//! This module contains the core data structures:
//! - The static catalog of groups and their sound entries
//! - Playback session records and row coordinates
//! - Enums for state management

pub mod catalog;
pub mod enums;
pub mod session;

// Re-exports for convenient access
pub use catalog::{AvatarRef, Catalog, Group, SoundEntry};
pub use enums::{PlaybackState, StopReason};
pub use session::{PlaybackSession, Position, SessionId};
