use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crate::util::styles::{HELP_COLOR, WARNING_COLOR};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    fn help_text(tab: TabId) -> &'static str {
        match tab {
            TabId::Dataset => {
                "j/k: nav | a: add | d: delete | c: compute EV | ^S/^O: export/import | q: quit"
            }
            TabId::EvChart => "1-4: switch tabs | c: compute EV | q: quit",
            TabId::Sensitivity => "1-4: switch tabs | q: quit",
            TabId::Tree => "1-4: switch tabs | j/k: scroll | q: quit",
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else {
            let mut spans = vec![Span::styled(
                Self::help_text(state.active_tab),
                Style::default().fg(HELP_COLOR),
            )];
            if state.session.is_ev_stale() {
                spans.push(Span::styled(
                    "  [EV stale]",
                    Style::default().fg(WARNING_COLOR),
                ));
            }
            if state.dirty {
                spans.push(Span::styled(
                    "  [modified]",
                    Style::default().fg(WARNING_COLOR),
                ));
            }
            Line::from(spans)
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
