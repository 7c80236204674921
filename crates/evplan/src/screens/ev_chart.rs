use crate::actions;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_money, format_money_compact};
use crate::util::styles::{WARNING_COLOR, amount_style, titled_block};
use crossterm::event::{KeyCode, KeyEvent};
use evplan_core::EvSummary;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

use super::Screen;

pub struct EvChartScreen;

impl EvChartScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, summary: &EvSummary, prefix: &str) {
        let block = titled_block("EXPECTED VALUE BY DECISION", None);

        let labels: Vec<&str> = summary.ev.labels().collect();
        let data: Vec<(f64, f64)> = summary
            .ev
            .iter()
            .enumerate()
            .map(|(i, (_, ev))| (i as f64, ev))
            .collect();

        // A single decision still needs a non-empty x range
        let (x_bounds, x_labels) = if labels.len() == 1 {
            (
                [-1.0, 1.0],
                vec![Span::raw(""), Span::raw(labels[0].to_string()), Span::raw("")],
            )
        } else {
            (
                [0.0, (labels.len() - 1) as f64],
                labels.iter().map(|l| Span::raw(l.to_string())).collect(),
            )
        };

        let (lo, hi) = data
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
        let padding = (hi - lo).abs().max(1.0) * 0.1;
        let (y_min, y_max) = (lo - padding, hi + padding);

        let dataset = Dataset::default()
            .name("EV")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data);

        let x_axis = Axis::default()
            .title("Decision".dark_gray())
            .bounds(x_bounds)
            .labels(x_labels);

        let y_axis = Axis::default()
            .title("EV".dark_gray())
            .bounds([y_min, y_max])
            .labels(vec![
                Span::raw(format_money_compact(y_min, prefix)),
                Span::raw(format_money_compact((y_min + y_max) / 2.0, prefix)),
                Span::raw(format_money_compact(y_max, prefix)),
            ]);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState, summary: &EvSummary) {
        let prefix = state.currency_prefix();
        let mut lines = vec![Line::from("")];

        for (label, ev) in summary.ev.iter() {
            let marker = if label == summary.best_decision {
                "* "
            } else {
                "  "
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{marker}{label}: ")),
                Span::styled(format_money(ev, prefix), amount_style(ev)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  Best: "),
            Span::styled(
                summary.best_decision.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));

        if state.session.is_ev_stale() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Dataset changed, press [c] to recompute",
                Style::default().fg(WARNING_COLOR),
            )));
        }

        let paragraph = Paragraph::new(lines).block(titled_block("SUMMARY", None));
        frame.render_widget(paragraph, area);
    }
}

impl Default for EvChartScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EvChartScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('c') => {
                actions::handle_compute(state).apply(state);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(summary) = state.session.last_ev() else {
            let content = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Compute EV first.",
                    Style::default().fg(WARNING_COLOR),
                )),
                Line::from(""),
                Line::from("  Press [c] here or on the Dataset tab."),
            ];
            let paragraph = Paragraph::new(content).block(titled_block("EV CHART", None));
            frame.render_widget(paragraph, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        self.render_chart(frame, chunks[0], summary, state.currency_prefix());
        self.render_summary(frame, chunks[1], state, summary);
    }
}

impl Screen for EvChartScreen {
    fn title(&self) -> &str {
        "EV Chart"
    }
}
