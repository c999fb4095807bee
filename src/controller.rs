//! Playback controller.
//!
//! Bridges the catalog to the audio output and owns the single active
//! playback session. All transitions run on the event-loop thread:
//!
//! - `select_row`: Idle/Playing -> Playing (stops the old clip first)
//! - `stop_requested`: Playing -> Idle, no-op when Idle
//! - `tick`: fires the deferred deselect once the clip length has elapsed
//!
//! The deferred deselect is keyed by [`SessionId`]. A deferral that outlives
//! its session (because of a stop or a newer selection) is discarded by the
//! identity check when it comes due, so it can never end a newer session.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::audio::AudioOutput;
use crate::error::SelectError;
use crate::models::{
    Catalog, PlaybackSession, PlaybackState, Position, SessionId, StopReason,
};

/// Auto-deselect scheduled for the end of a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredDeselect {
    pub session: SessionId,
    pub due: Instant,
}

impl DeferredDeselect {
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

struct ActiveSession<H> {
    session: PlaybackSession,
    handle: H,
}

/// Owns the catalog, the audio output and the current session
pub struct PlaybackController<A: AudioOutput> {
    catalog: Catalog,
    audio: A,
    active: Option<ActiveSession<A::Handle>>,
    pending: Option<DeferredDeselect>,
    next_id: SessionId,
}

impl<A: AudioOutput> PlaybackController<A> {
    pub fn new(catalog: Catalog, audio: A) -> Self {
        Self {
            catalog,
            audio,
            active: None,
            pending: None,
            next_id: SessionId::FIRST,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn state(&self) -> PlaybackState {
        if self.active.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// Row that should be drawn highlighted
    pub fn selected(&self) -> Option<Position> {
        self.session().map(|s| s.position)
    }

    #[cfg(test)]
    pub fn pending_deselect(&self) -> Option<DeferredDeselect> {
        self.pending
    }

    /// Play the entry at `position`, replacing any clip already playing.
    ///
    /// On failure nothing is playing afterwards, except for an out-of-range
    /// position, which leaves the current session untouched.
    pub fn select_row(&mut self, position: Position, now: Instant) -> Result<SessionId, SelectError> {
        let entry = match self.catalog.entry_at(position.group, position.entry) {
            Ok(entry) => entry.clone(),
            Err(e) => {
                warn!(error = %e, "ignoring selection outside the catalog");
                return Err(e.into());
            }
        };

        self.end_session(StopReason::Replaced);

        let mut handle = match self.audio.load(entry.resource_id) {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, label = entry.label, "abandoning selection");
                return Err(e.into());
            }
        };

        if let Err(e) = self.audio.play(&mut handle) {
            warn!(error = %e, label = entry.label, "abandoning selection");
            return Err(e.into());
        }

        let duration = self.audio.duration(&handle);
        let id = self.next_id;
        self.next_id = id.next();

        info!(
            session = id.get(),
            label = entry.label,
            resource = entry.resource_id,
            group = position.group,
            entry = position.entry,
            ?duration,
            "playback started"
        );

        self.pending = Some(DeferredDeselect {
            session: id,
            due: now + duration,
        });
        self.active = Some(ActiveSession {
            session: PlaybackSession {
                id,
                active_resource_id: entry.resource_id.to_string(),
                label: entry.label.to_string(),
                position,
                started_at: now,
                duration,
            },
            handle,
        });

        Ok(id)
    }

    /// Halt playback and clear the highlighted row. Returns false when idle.
    pub fn stop_requested(&mut self) -> bool {
        self.end_session(StopReason::Requested)
    }

    /// End-of-clip notification for session `id`; stale ids are ignored.
    pub fn playback_completed(&mut self, id: SessionId) -> bool {
        if self.session().map(|s| s.id) != Some(id) {
            debug!(session = id.get(), "discarding stale completion");
            return false;
        }
        self.end_session(StopReason::Completed)
    }

    /// Fire the deferred deselect if it is due. Returns true if a session ended.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deferred) if deferred.is_due(now) => {
                self.pending = None;
                self.playback_completed(deferred.session)
            }
            _ => false,
        }
    }

    fn end_session(&mut self, reason: StopReason) -> bool {
        let Some(mut active) = self.active.take() else {
            return false;
        };
        self.audio.stop(&mut active.handle);
        info!(
            session = active.session.id.get(),
            label = %active.session.label,
            resource = %active.session.active_resource_id,
            reason = reason.label(),
            "playback ended"
        );
        true
    }
}
