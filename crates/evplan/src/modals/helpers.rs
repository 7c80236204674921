//! Rendering helpers shared by the modals.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

/// Render `value` with a block cursor at byte offset `cursor_pos`.
///
/// Only the tail that fits in `max_width` characters is shown, so the cursor
/// stays visible while typing long labels.
pub fn render_cursor_line(value: &str, cursor_pos: usize, max_width: usize) -> Line<'static> {
    let cursor_char = value[..cursor_pos].chars().count();
    let chars: Vec<char> = value.chars().collect();

    let visible = max_width.max(1);
    let start = (cursor_char + 1).saturating_sub(visible);

    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let mut spans: Vec<Span<'static>> = chars
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, c)| {
            if i == cursor_char {
                Span::styled(c.to_string(), cursor_style)
            } else {
                Span::raw(c.to_string())
            }
        })
        .collect();

    if cursor_char >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

/// Layout information of a rendered modal frame.
pub struct ModalFrame {
    pub chunks: Rc<[Rect]>,
}

/// Center, clear and border a modal, then split its inside by `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

/// Builder for key hints: colored key, plain description.
///
/// ```ignore
/// let help = HelpText::new()
///     .key("[Enter]", Color::Green, "Confirm")
///     .key("[Esc]", Color::Yellow, "Cancel")
///     .build();
/// ```
pub struct HelpText {
    items: Vec<(String, Color, String)>,
}

impl HelpText {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }

        Paragraph::new(Line::from(spans))
    }
}

impl Default for HelpText {
    fn default() -> Self {
        Self::new()
    }
}
