//! Grouped list surface
//!
//! Flattens the catalog into header and row lines, tracks keyboard focus
//! and scrolling, and maps clicks back to row coordinates.

use crate::models::{Catalog, Position};

/// Height of a group header in terminal rows
pub const HEADER_HEIGHT: u16 = 3;

/// One visual line of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLine {
    Header(usize),
    Row(Position),
}

impl ListLine {
    pub fn height(&self) -> u16 {
        match self {
            ListLine::Header(_) => HEADER_HEIGHT,
            ListLine::Row(_) => 1,
        }
    }
}

/// Layout, focus and scroll state for the grouped list
#[derive(Debug, Clone)]
pub struct SoundList {
    lines: Vec<ListLine>,
    rows: Vec<Position>,
    cursor: usize,
    scroll: u16,
}

impl SoundList {
    pub fn new(catalog: &Catalog) -> Self {
        let mut lines = Vec::with_capacity(catalog.group_count() + catalog.len());
        let mut rows = Vec::with_capacity(catalog.len());

        for group in 0..catalog.group_count() {
            let Ok(count) = catalog.entry_count(group) else {
                continue;
            };
            lines.push(ListLine::Header(group));
            for entry in 0..count {
                let pos = Position::new(group, entry);
                lines.push(ListLine::Row(pos));
                rows.push(pos);
            }
        }

        Self {
            lines,
            rows,
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn lines(&self) -> &[ListLine] {
        &self.lines
    }

    /// Row with keyboard focus
    pub fn focused(&self) -> Option<Position> {
        self.rows.get(self.cursor).copied()
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.cursor = 0;
    }

    pub fn last(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Move focus to `pos`; returns false if it is not a row in the list
    pub fn focus(&mut self, pos: Position) -> bool {
        match self.rows.iter().position(|p| *p == pos) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn total_height(&self) -> u16 {
        self.lines.iter().map(ListLine::height).sum()
    }

    /// Offset of a row from the top of the list
    fn row_top(&self, pos: Position) -> Option<u16> {
        let mut top = 0;
        for line in &self.lines {
            if *line == ListLine::Row(pos) {
                return Some(top);
            }
            top += line.height();
        }
        None
    }

    /// Adjust scrolling so the focused row is inside a viewport of `height`
    /// rows. The first row of a group also pulls its header into view.
    pub fn scroll_to_focus(&mut self, height: u16) {
        let Some(pos) = self.focused() else {
            self.scroll = 0;
            return;
        };
        let Some(top) = self.row_top(pos) else {
            return;
        };
        if height == 0 {
            return;
        }

        if top < self.scroll {
            self.scroll = top;
        } else if top >= self.scroll + height {
            self.scroll = top + 1 - height;
        }

        if pos.entry == 0 && height > HEADER_HEIGHT {
            let header_top = top.saturating_sub(HEADER_HEIGHT);
            if header_top < self.scroll {
                self.scroll = header_top;
            }
        }

        let max_scroll = self.total_height().saturating_sub(height);
        self.scroll = self.scroll.min(max_scroll);
    }

    /// Row under viewport line `y`, or None for headers and empty space
    pub fn hit_test(&self, y: u16) -> Option<Position> {
        let target = y.saturating_add(self.scroll);
        let mut top = 0;
        for line in &self.lines {
            let height = line.height();
            if target < top + height {
                return match line {
                    ListLine::Row(pos) => Some(*pos),
                    ListLine::Header(_) => None,
                };
            }
            top += height;
        }
        None
    }
}
