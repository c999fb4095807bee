//! Application state and input handling for the soundboard TUI.
//!
//! The `App` ties the grouped list surface to the playback controller:
//! keys and clicks become row taps or stop requests, and every loop
//! iteration gives the controller a chance to fire its deferred deselect.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

use crate::audio::AudioOutput;
use crate::controller::PlaybackController;
use crate::models::Position;
use crate::ui::SoundList;

/// Application state
pub struct App<A: AudioOutput> {
    pub controller: PlaybackController<A>,
    pub list: SoundList,
    // Where the list was last drawn, for mouse hit testing
    pub list_area: Rect,
    pub should_quit: bool,
}

impl<A: AudioOutput> App<A> {
    pub fn new(controller: PlaybackController<A>) -> Self {
        let list = SoundList::new(controller.catalog());
        Self {
            controller,
            list,
            list_area: Rect::default(),
            should_quit: false,
        }
    }

    /// A row was tapped: focus it and play it
    pub fn tap(&mut self, pos: Position, now: Instant) {
        self.list.focus(pos);
        // Failures are logged by the controller and leave the list idle
        if self.controller.select_row(pos, now).is_err() {
            debug!(group = pos.group, entry = pos.entry, "tap did not start playback");
        }
    }

    pub fn stop(&mut self) {
        self.controller.stop_requested();
    }

    /// Advance timers
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.list.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.list.move_down(),
            KeyCode::Home | KeyCode::Char('g') => self.list.first(),
            KeyCode::End | KeyCode::Char('G') => self.list.last(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(pos) = self.list.focused() {
                    self.tap(pos, now);
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.stop(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let area = self.list_area;
                let inside = mouse.column >= area.x
                    && mouse.column < area.x + area.width
                    && mouse.row >= area.y
                    && mouse.row < area.y + area.height;
                if !inside {
                    return;
                }
                match self.list.hit_test(mouse.row - area.y) {
                    Some(pos) => self.tap(pos, now),
                    None => debug!(row = mouse.row, "click outside any entry"),
                }
            }
            MouseEventKind::ScrollDown => self.list.move_down(),
            MouseEventKind::ScrollUp => self.list.move_up(),
            _ => {}
        }
    }
}
