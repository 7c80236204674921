//! Two-level decision tree: one condition node per record, its payoff below.

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_money, format_probability};
use crate::util::styles::{HELP_COLOR, WARNING_COLOR, amount_style, titled_block};
use crossterm::event::{KeyCode, KeyEvent};
use evplan_core::Dataset;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Screen;

pub const ROOT_LABEL: &str = "Decision";

#[derive(Debug, Clone, PartialEq)]
pub struct TreeBranch {
    /// `"{condition} P={probability}"`
    pub node: String,
    /// Formatted payoff
    pub leaf: String,
    pub payoff: f64,
}

/// Project the dataset into tree branches, in record order.
pub fn project_tree(dataset: &Dataset, prefix: &str) -> Vec<TreeBranch> {
    dataset
        .iter()
        .map(|record| TreeBranch {
            node: format!(
                "{} P={}",
                record.condition(),
                format_probability(record.probability())
            ),
            leaf: format_money(record.payoff(), prefix),
            payoff: record.payoff(),
        })
        .collect()
}

fn tree_lines(branches: &[TreeBranch]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        ROOT_LABEL,
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (i, branch) in branches.iter().enumerate() {
        let last = i + 1 == branches.len();
        let (elbow, rail) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        lines.push(Line::from(vec![
            Span::styled(elbow, Style::default().fg(HELP_COLOR)),
            Span::raw(branch.node.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{rail}└── "), Style::default().fg(HELP_COLOR)),
            Span::styled(branch.leaf.clone(), amount_style(branch.payoff)),
        ]));
    }
    lines
}

#[derive(Default)]
pub struct TreeScreen {
    scroll: u16,
}

impl TreeScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for TreeScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // Root line plus two lines per record
        let max_scroll = (state.session.dataset().len() * 2) as u16;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(max_scroll);
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = titled_block("DECISION TREE", None);
        let dataset = state.session.dataset();

        if dataset.is_empty() {
            self.scroll = 0;
            let content = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Data is empty.",
                    Style::default().fg(WARNING_COLOR),
                )),
            ];
            frame.render_widget(Paragraph::new(content).block(block), area);
            return;
        }

        let branches = project_tree(dataset, state.currency_prefix());
        let paragraph = Paragraph::new(tree_lines(&branches))
            .block(block)
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

impl Screen for TreeScreen {
    fn title(&self) -> &str {
        "Tree"
    }
}
