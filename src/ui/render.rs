//! Frame rendering: the grouped list and the status bar

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::fit;
use super::list::{ListLine, SoundList, HEADER_HEIGHT};
use crate::app::App;
use crate::audio::AudioOutput;
use crate::models::{Catalog, Group, PlaybackSession, Position};
use crate::theme::{
    BG_PRIMARY, BG_SECONDARY, BG_SELECTED, GREEN_ACTIVE, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, THEME_TEAL, THEME_TEAL_DIM,
};
use crate::utils::format_progress;

const KEY_HINTS: &str = " ↑↓: Move | Enter: Play | s: Stop | q: Quit ";

/// Header block for one group: avatar badge and display name on teal
fn header_lines(group: &Group, width: usize) -> Vec<Line<'static>> {
    let band = Style::default().bg(THEME_TEAL).fg(TEXT_PRIMARY);
    let badge = format!(" {} ", group.avatar.monogram);
    let name = format!("  {}", group.display_name);
    let used = 1 + badge.chars().count();

    let title = Line::from(vec![
        Span::styled(" ", band),
        Span::styled(
            badge,
            Style::default()
                .bg(THEME_TEAL_DIM)
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            fit(&name, width.saturating_sub(used)),
            band.add_modifier(Modifier::BOLD),
        ),
    ]);

    // Title sits on the middle line of the fixed-height band
    let mut lines = Vec::with_capacity(HEADER_HEIGHT as usize);
    for i in 0..HEADER_HEIGHT {
        if i == HEADER_HEIGHT / 2 {
            lines.push(title.clone());
        } else {
            lines.push(Line::from(Span::styled(" ".repeat(width), band)));
        }
    }
    lines
}

/// One entry row. The playing row gets the highlight background.
fn row_line(label: &str, focused: bool, selected: bool, width: usize) -> Line<'static> {
    let bg = if selected { BG_SELECTED } else { BG_PRIMARY };
    let base = Style::default().bg(bg).fg(TEXT_PRIMARY);
    let label_style = if focused {
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    };

    Line::from(vec![
        Span::styled(if focused { " › " } else { "   " }, base.fg(THEME_TEAL)),
        Span::styled(if selected { "▶ " } else { "  " }, base.fg(GREEN_ACTIVE)),
        Span::styled(fit(label, width.saturating_sub(5)), label_style),
    ])
}

/// Build every line of the list, top to bottom
pub fn list_lines(
    list: &SoundList,
    catalog: &Catalog,
    focused: Option<Position>,
    selected: Option<Position>,
    width: u16,
) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::with_capacity(list.total_height() as usize);

    for line in list.lines() {
        match *line {
            ListLine::Header(group) => {
                if let Ok(group) = catalog.group_at(group) {
                    lines.extend(header_lines(group, width));
                }
            }
            ListLine::Row(pos) => {
                if let Ok(entry) = catalog.entry_at(pos.group, pos.entry) {
                    lines.push(row_line(
                        entry.label,
                        focused == Some(pos),
                        selected == Some(pos),
                        width,
                    ));
                }
            }
        }
    }

    lines
}

/// Bottom bar: key hints on the left, now playing on the right
pub fn status_line(session: Option<&PlaybackSession>, now: Instant, width: u16) -> Line<'static> {
    let hint_style = Style::default().fg(TEXT_MUTED).bg(BG_SECONDARY);
    let Some(session) = session else {
        return Line::from(Span::styled(fit(KEY_HINTS, width as usize), hint_style));
    };

    let playing = format!(
        "▶ {} {} ",
        session.label,
        format_progress(session.elapsed(now), session.duration)
    );
    let playing_len = playing.chars().count();
    let hints_width = (width as usize).saturating_sub(playing_len);

    Line::from(vec![
        Span::styled(fit(KEY_HINTS, hints_width), hint_style),
        Span::styled(
            playing,
            Style::default()
                .fg(GREEN_ACTIVE)
                .bg(BG_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Draw the whole screen and record where the list landed for hit testing
pub fn draw<A: AudioOutput>(frame: &mut Frame, app: &mut App<A>, now: Instant) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title = format!(" Soundboard [{}] ", app.controller.state().label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(THEME_TEAL))
        .style(Style::default().bg(BG_PRIMARY));
    let inner = block.inner(layout[0]);
    frame.render_widget(block, layout[0]);

    app.list_area = inner;
    app.list.scroll_to_focus(inner.height);

    let lines = list_lines(
        &app.list,
        app.controller.catalog(),
        app.list.focused(),
        app.controller.selected(),
        inner.width,
    );
    frame.render_widget(Paragraph::new(lines).scroll((app.list.scroll(), 0)), inner);

    let status = status_line(app.controller.session(), now, layout[1].width);
    frame.render_widget(Paragraph::new(status), layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::FakeOutput;
    use crate::controller::PlaybackController;
    use crate::models::SessionId;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_list_lines_heights() {
        let catalog = Catalog::builtin();
        let list = SoundList::new(&catalog);
        let lines = list_lines(&list, &catalog, None, None, 30);
        assert_eq!(lines.len(), list.total_height() as usize);
    }

    #[test]
    fn test_header_shows_avatar_and_name() {
        let catalog = Catalog::builtin();
        let list = SoundList::new(&catalog);
        let lines = list_lines(&list, &catalog, None, None, 30);

        let title = line_text(&lines[1]);
        assert!(title.contains("RS"), "{:?}", title);
        assert!(title.contains("Rick"), "{:?}", title);
        assert_eq!(title.chars().count(), 30);
        assert_eq!(line_text(&lines[0]).trim(), "");
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let catalog = Catalog::builtin();
        let list = SoundList::new(&catalog);
        let selected = Position::new(1, 1);
        let lines = list_lines(&list, &catalog, None, Some(selected), 30);

        // Rick header, AIDS!, Morty header, Oh man!, then this row
        let row = &lines[8];
        assert!(line_text(row).contains("Gazorpazorpfield"));
        assert!(line_text(row).contains('▶'));
        assert!(row.spans.iter().all(|s| s.style.bg == Some(BG_SELECTED)));

        let other = &lines[7];
        assert!(line_text(other).contains("Oh man!"));
        assert!(other.spans.iter().all(|s| s.style.bg == Some(BG_PRIMARY)));
    }

    #[test]
    fn test_focused_row_marker() {
        let catalog = Catalog::builtin();
        let list = SoundList::new(&catalog);
        let lines = list_lines(&list, &catalog, Some(Position::new(0, 0)), None, 30);
        assert!(line_text(&lines[3]).starts_with(" › "));
        assert!(line_text(&lines[7]).starts_with("   "));
    }

    #[test]
    fn test_status_line_idle() {
        let line = status_line(None, Instant::now(), 60);
        let text = line_text(&line);
        assert!(text.contains("s: Stop"));
        assert_eq!(text.chars().count(), 60);
    }

    #[test]
    fn test_status_line_playing() {
        let start = Instant::now();
        let session = PlaybackSession {
            id: SessionId::FIRST,
            active_resource_id: "morty_oh_man.wav".to_string(),
            label: "Oh man!".to_string(),
            position: Position::new(1, 0),
            started_at: start,
            duration: Duration::from_secs(3),
        };
        let line = status_line(Some(&session), start + Duration::from_secs(1), 80);
        let text = line_text(&line);
        assert!(text.ends_with("▶ Oh man! 00:01/00:03 "), "{:?}", text);
        assert_eq!(text.chars().count(), 80);
    }

    #[test]
    fn test_draw_renders_catalog() {
        let controller = PlaybackController::new(Catalog::builtin(), FakeOutput::new());
        let mut app = App::new(controller);
        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();

        terminal
            .draw(|frame| draw(frame, &mut app, Instant::now()))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Soundboard"));
        assert!(screen.contains("Rick"));
        assert!(screen.contains("Gazorpazorpfield"));
        assert!(screen.contains("Jerry"));
        // List sits inside the border, above the status bar
        assert_eq!(app.list_area, Rect::new(1, 1, 38, 27));
    }
}
