use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{FormField, FormModal};

use super::ModalResult;
use super::helpers::{HelpText, render_cursor_line, render_modal_frame};

const MODAL_WIDTH: u16 = 60;

/// Render the form modal
pub fn render_form_modal(frame: &mut Frame, modal: &FormModal) {
    // Each field: 1 line label + 3 lines input box
    let field_height = modal.fields.len() as u16 * 4;
    let height = (field_height + 5).min(frame.area().height);

    let mut constraints = vec![Constraint::Length(1)];
    for _ in &modal.fields {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        height,
        Color::Cyan,
        &constraints,
    );

    if let Some(error) = &modal.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            ))),
            mf.chunks[0],
        );
    }

    for (idx, field) in modal.fields.iter().enumerate() {
        render_field(frame, mf.chunks[idx + 1], field, idx == modal.focused_field);
    }

    let help = HelpText::new()
        .key("[Tab/↑↓]", Color::DarkGray, "Field")
        .key("[Enter]", Color::Green, "Next/Submit")
        .key("[Ctrl+S]", Color::Cyan, "Submit")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, mf.chunks[modal.fields.len() + 2]);
}

fn render_field(frame: &mut Frame, area: Rect, field: &FormField, is_focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let label_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(field.label.as_str(), label_style))),
        chunks[0],
    );

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let input_inner = input_block.inner(chunks[1]);
    frame.render_widget(input_block, chunks[1]);

    let line = if is_focused {
        render_cursor_line(&field.value, field.cursor_pos, input_inner.width as usize)
    } else {
        Line::from(field.value.clone())
    };
    frame.render_widget(Paragraph::new(line), input_inner);
}

/// Handle key events for the form modal.
///
/// Typing always goes to the focused field. Enter moves to the next field and
/// submits from the last one.
pub fn handle_form_key(key: KeyEvent, modal: &mut FormModal) -> ModalResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if (ctrl && key.code == KeyCode::Char('s')) || key.code == KeyCode::F(10) {
        return ModalResult::Confirmed(modal.action, modal.values());
    }

    match key.code {
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Enter => {
            if modal.focused_field + 1 >= modal.fields.len() {
                ModalResult::Confirmed(modal.action, modal.values())
            } else {
                modal.focus_next();
                ModalResult::Continue
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            modal.focus_next();
            ModalResult::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            modal.focus_prev();
            ModalResult::Continue
        }
        code => {
            if let Some(field) = modal.focused_mut() {
                match code {
                    KeyCode::Backspace => field.backspace(),
                    KeyCode::Delete => field.delete(),
                    KeyCode::Left => field.move_cursor_left(),
                    KeyCode::Right => field.move_cursor_right(),
                    KeyCode::Home => field.move_cursor_home(),
                    KeyCode::End => field.move_cursor_end(),
                    KeyCode::Char(c) if !ctrl && field.field_type.accepts(c) => {
                        field.insert_char(c)
                    }
                    _ => {}
                }
            }
            ModalResult::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalAction;

    fn press(modal: &mut FormModal, code: KeyCode) -> ModalResult {
        handle_form_key(KeyEvent::new(code, KeyModifiers::NONE), modal)
    }

    fn type_str(modal: &mut FormModal, s: &str) {
        for c in s.chars() {
            press(modal, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_fill_and_submit_with_enter() {
        let mut form = FormModal::add_record();
        for value in ["Launch", "Strong", "0.6", "1.500.000"] {
            type_str(&mut form, value);
            assert_eq!(press(&mut form, KeyCode::Enter), ModalResult::Continue);
        }
        type_str(&mut form, "4.000.000");

        assert_eq!(
            press(&mut form, KeyCode::Enter),
            ModalResult::Confirmed(
                ModalAction::AddRecord,
                vec![
                    "Launch".to_string(),
                    "Strong".to_string(),
                    "0.6".to_string(),
                    "1.500.000".to_string(),
                    "4.000.000".to_string(),
                ]
            )
        );
    }

    #[test]
    fn test_amount_field_filters_letters() {
        let mut form = FormModal::add_record();
        form.focused_field = 3;
        type_str(&mut form, "1x.0y00");
        assert_eq!(form.fields[3].value, "1.000");
    }

    #[test]
    fn test_negative_probability_can_be_typed() {
        let mut form = FormModal::add_record();
        form.focused_field = 2;
        type_str(&mut form, "-0.2");
        assert_eq!(form.fields[2].value, "-0.2");
    }

    #[test]
    fn test_ctrl_s_submits_early() {
        let mut form = FormModal::add_record();
        type_str(&mut form, "Hold");
        let result = handle_form_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &mut form,
        );
        match result {
            ModalResult::Confirmed(ModalAction::AddRecord, values) => {
                assert_eq!(values[0], "Hold");
                assert_eq!(values[4], "");
            }
            other => panic!("expected submission, got {other:?}"),
        }
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = FormModal::add_record();
        assert_eq!(press(&mut form, KeyCode::Esc), ModalResult::Cancelled);
    }
}
