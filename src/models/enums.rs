//! Enums used throughout the soundboard
//!
//! This module contains the state enums shared between the controller
//! and the UI.

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,    // No session, nothing highlighted
    Playing, // A clip is playing and its row is highlighted
}

impl PlaybackState {
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "IDLE",
            PlaybackState::Playing => "PLAYING",
        }
    }
}

/// Why a playback session ended, for log context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Completed, // Deferred deselect fired at the end of the clip
    Requested, // User pressed STOP
    Replaced,  // A new row was tapped
}

impl StopReason {
    pub fn label(&self) -> &'static str {
        match self {
            StopReason::Completed => "completed",
            StopReason::Requested => "stop requested",
            StopReason::Replaced => "replaced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_state_default() {
        assert_eq!(PlaybackState::default(), PlaybackState::Idle);
    }

    #[test]
    fn test_playback_state_label() {
        assert_eq!(PlaybackState::Idle.label(), "IDLE");
        assert_eq!(PlaybackState::Playing.label(), "PLAYING");
    }

    #[test]
    fn test_stop_reason_label() {
        assert_eq!(StopReason::Completed.label(), "completed");
        assert_eq!(StopReason::Requested.label(), "stop requested");
        assert_eq!(StopReason::Replaced.label(), "replaced");
    }
}
