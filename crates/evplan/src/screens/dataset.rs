use crate::actions;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_money, format_probability};
use crate::util::styles::{HEADER_COLOR, amount_style, titled_block};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use super::Screen;

const HELP: &str = "[a] Add  [d] Delete  [c] Compute EV";

pub struct DatasetScreen;

impl DatasetScreen {
    pub fn new() -> Self {
        Self
    }

    fn header() -> Row<'static> {
        let style = Style::default()
            .fg(HEADER_COLOR)
            .add_modifier(Modifier::BOLD);
        Row::new(
            ["Decision", "Condition", "Prob", "Cost", "Revenue", "Payoff"]
                .into_iter()
                .map(|h| Cell::from(h).style(style)),
        )
    }
}

impl Default for DatasetScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DatasetScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let len = state.session.dataset().len();
        let result = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if state.dataset_state.selected_index + 1 < len {
                    state.dataset_state.selected_index += 1;
                }
                return EventResult::Handled;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.dataset_state.selected_index =
                    state.dataset_state.selected_index.saturating_sub(1);
                return EventResult::Handled;
            }
            KeyCode::Char('g') | KeyCode::Home => {
                state.dataset_state.selected_index = 0;
                return EventResult::Handled;
            }
            KeyCode::Char('G') | KeyCode::End => {
                state.dataset_state.selected_index = len.saturating_sub(1);
                return EventResult::Handled;
            }
            KeyCode::Char('a') => actions::open_add_form(),
            KeyCode::Char('d') => actions::confirm_delete(state),
            KeyCode::Char('c') => actions::handle_compute(state),
            _ => return EventResult::NotHandled,
        };

        result.apply(state);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let dataset = state.session.dataset();
        let block = titled_block(&format!("RECORDS ({})", dataset.len()), Some(HELP));

        if dataset.is_empty() {
            let content = vec![
                Line::from(""),
                Line::from("  No records yet."),
                Line::from(""),
                Line::from(Span::styled(
                    "  Press [a] to add a decision outcome.",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(Paragraph::new(content).block(block), area);
            return;
        }

        let prefix = state.currency_prefix();
        let rows = dataset.iter().map(|record| {
            Row::new(vec![
                Cell::from(record.decision().to_string()),
                Cell::from(record.condition().to_string()),
                Cell::from(format_probability(record.probability())),
                Cell::from(format_money(record.cost(), prefix)),
                Cell::from(format_money(record.revenue(), prefix)),
                Cell::from(format_money(record.payoff(), prefix))
                    .style(amount_style(record.payoff())),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Length(6),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
            ],
        )
        .header(Self::header())
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

        let mut table_state = TableState::default().with_selected(Some(
            state.dataset_state.selected_index.min(dataset.len() - 1),
        ));
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

impl Screen for DatasetScreen {
    fn title(&self) -> &str {
        "Dataset"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ModalAction, ModalState};
    use crossterm::event::KeyModifiers;
    use evplan_core::{Record, Session};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn state_with_records() -> AppState {
        let mut state = AppState::default();
        state.session.replace([
            Record::new("A", "X", 0.5, 100.0, 300.0),
            Record::new("A", "Y", 0.5, 0.0, 100.0),
        ]);
        state
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = state_with_records();
        let mut screen = DatasetScreen::new();

        screen.handle_key(key('k'), &mut state);
        assert_eq!(state.dataset_state.selected_index, 0);
        screen.handle_key(key('j'), &mut state);
        screen.handle_key(key('j'), &mut state);
        assert_eq!(state.dataset_state.selected_index, 1);
    }

    #[test]
    fn test_delete_asks_for_confirmation() {
        let mut state = state_with_records();
        state.dataset_state.selected_index = 1;
        let expected = state.session.dataset().id_at(1);

        DatasetScreen::new().handle_key(key('d'), &mut state);
        match &state.modal {
            ModalState::Confirm(confirm) => {
                assert_eq!(confirm.action, ModalAction::DeleteRecord);
                assert_eq!(confirm.record, expected);
            }
            other => panic!("expected confirm modal, got {other:?}"),
        }
        assert_eq!(state.session.dataset().len(), 2);
    }

    #[test]
    fn test_compute_on_empty_dataset_warns() {
        let mut state = AppState::new(Default::default(), Session::new());
        DatasetScreen::new().handle_key(key('c'), &mut state);
        match &state.modal {
            ModalState::Message(msg) => assert!(msg.is_error),
            other => panic!("expected warning, got {other:?}"),
        }
    }
}
