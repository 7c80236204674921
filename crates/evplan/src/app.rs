use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::actions::{self, ActionResult};
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{
    dataset::DatasetScreen, ev_chart::EvChartScreen, sensitivity::SensitivityScreen,
    tree::TreeScreen,
};
use crate::state::{AppState, ModalAction, ModalState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    dataset_screen: DatasetScreen,
    ev_chart_screen: EvChartScreen,
    sensitivity_screen: SensitivityScreen,
    tree_screen: TreeScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tab_bar: TabBar,
            status_bar: StatusBar,
            dataset_screen: DatasetScreen::new(),
            ev_chart_screen: EvChartScreen::new(),
            sensitivity_screen: SensitivityScreen::new(),
            tree_screen: TreeScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(
            records = self.state.session.dataset().len(),
            "session started"
        );

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        if self.state.dirty {
            tracing::warn!(
                records = self.state.session.dataset().len(),
                "exiting with unexported changes"
            );
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Dataset => self.dataset_screen.render(frame, area, &self.state),
            TabId::EvChart => self.ev_chart_screen.render(frame, area, &self.state),
            TabId::Sensitivity => self.sensitivity_screen.render(frame, area, &self.state),
            TabId::Tree => self.tree_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, values) => {
                    self.handle_modal_result(action, values);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('s') if ctrl => {
                actions::handle_export(&mut self.state).apply(&mut self.state);
                return;
            }
            KeyCode::Char('o') if ctrl => {
                actions::handle_import(&mut self.state).apply(&mut self.state);
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Dataset => self.dataset_screen.handle_key(key_event, &mut self.state),
            TabId::EvChart => self.ev_chart_screen.handle_key(key_event, &mut self.state),
            TabId::Sensitivity => self
                .sensitivity_screen
                .handle_key(key_event, &mut self.state),
            TabId::Tree => self.tree_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, values: Vec<String>) {
        let result = match action {
            ModalAction::AddRecord => actions::handle_add_record(&mut self.state, &values),
            ModalAction::DeleteRecord => {
                let id = match &self.state.modal {
                    ModalState::Confirm(confirm) => confirm.record,
                    _ => None,
                };
                actions::handle_delete_record(&mut self.state, id)
            }
        };

        self.apply_action_result(result);
    }

    /// Apply the result of an action handler
    fn apply_action_result(&mut self, result: ActionResult) {
        result.apply(&mut self.state);
    }
}
