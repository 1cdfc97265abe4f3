//! TUI rendering
//!
//! Rendering is a pure function of the [`Selector`]: the same state always
//! produces the same lines.

pub mod colors;

use crate::app::Selector;
use crate::config::KeyBindings;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Title of the branch list block
pub const TITLE: &str = " Select branch ";

const CURSOR_MARKER: &str = "> ";
const ROW_PADDING: &str = "  ";

/// One line per branch, in list order, with the cursor row marked
#[must_use]
pub fn branch_lines(selector: &Selector) -> Vec<Line<'static>> {
    selector
        .branches()
        .iter()
        .enumerate()
        .map(|(idx, branch)| {
            let is_cursor = idx == selector.cursor();
            let style = if is_cursor {
                Style::default()
                    .fg(colors::ACCENT_POSITIVE)
                    .bg(colors::SURFACE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else if branch.is_detached() {
                Style::default().fg(colors::ACCENT_WARNING)
            } else {
                Style::default().fg(colors::TEXT_PRIMARY)
            };
            let prefix = if is_cursor { CURSOR_MARKER } else { ROW_PADDING };

            Line::from(Span::styled(format!("{prefix}{}", branch.label()), style))
        })
        .collect()
}

/// Unstyled text of [`branch_lines`], one branch per line
#[must_use]
pub fn view(selector: &Selector) -> String {
    branch_lines(selector)
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First visible row so that `cursor` fits in a viewport of `viewport_rows`
#[must_use]
pub const fn scroll_offset(cursor: usize, viewport_rows: usize) -> usize {
    (cursor + 1).saturating_sub(viewport_rows)
}

/// Render the branch list and key hints
pub fn render(frame: &mut Frame<'_>, selector: &Selector, keys: &KeyBindings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .title(Span::styled(
            TITLE,
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));

    let viewport_rows = usize::from(block.inner(chunks[0]).height);
    let offset = scroll_offset(selector.cursor(), viewport_rows);

    let list = Paragraph::new(branch_lines(selector))
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(list, chunks[0]);

    let position = format!(
        " {}/{} ",
        selector.cursor() + 1,
        selector.branches().len()
    );
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(position, Style::default().fg(colors::TEXT_MUTED)),
        Span::styled(keys.status_hints(), Style::default().fg(colors::TEXT_DIM)),
    ]));
    frame.render_widget(footer, chunks[1]);
}
