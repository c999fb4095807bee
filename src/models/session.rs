//! Playback session records

use std::time::{Duration, Instant};

/// Row coordinate in the grouped list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub group: usize,
    pub entry: usize,
}

impl Position {
    pub const fn new(group: usize, entry: usize) -> Self {
        Self { group, entry }
    }
}

/// Identity of a playback session, unique within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub const FIRST: SessionId = SessionId(1);

    pub fn next(self) -> Self {
        SessionId(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// The clip currently playing and the row it was started from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSession {
    pub id: SessionId,
    pub active_resource_id: String,
    pub label: String,
    pub position: Position,
    pub started_at: Instant,
    pub duration: Duration,
}

impl PlaybackSession {
    /// Time played so far, capped at the clip length
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at).min(self.duration)
    }
}
