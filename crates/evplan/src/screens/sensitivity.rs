use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_money, format_money_compact, format_probability};
use crate::util::styles::{HEADER_COLOR, WARNING_COLOR, series_color, titled_block};
use crossterm::event::KeyEvent;
use evplan_core::SweepResult;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Cell, Chart, Dataset, GraphType, LegendPosition, Paragraph, Row, Table},
};

use super::Screen;

pub struct SensitivityScreen;

impl SensitivityScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, result: &SweepResult, prefix: &str) {
        let xy: Vec<Vec<(f64, f64)>> = result.series.iter().map(|s| s.xy()).collect();

        let datasets: Vec<Dataset> = result
            .series
            .iter()
            .zip(&xy)
            .enumerate()
            .map(|(i, (series, data))| {
                Dataset::default()
                    .name(series.decision.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(series_color(i)))
                    .data(data)
            })
            .collect();

        let (x_lo, x_hi) = xy
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
                (lo.min(x), hi.max(x))
            });
        let (x_lo, x_hi) = if x_lo.is_finite() && x_hi > x_lo {
            (x_lo, x_hi)
        } else if x_lo.is_finite() {
            (x_lo - 0.1, x_lo + 0.1)
        } else {
            (0.0, 1.0)
        };

        let (y_lo, y_hi) = result.ev_bounds().unwrap_or((0.0, 0.0));
        let padding = (y_hi - y_lo).abs().max(1.0) * 0.1;
        let (y_min, y_max) = (y_lo - padding, y_hi + padding);

        let x_axis = Axis::default()
            .title("Probability".dark_gray())
            .bounds([x_lo, x_hi])
            .labels(vec![
                Span::raw(format!("{:.2}", x_lo)),
                Span::raw(format!("{:.2}", (x_lo + x_hi) / 2.0)),
                Span::raw(format!("{:.2}", x_hi)),
            ]);

        let y_axis = Axis::default()
            .title("EV".dark_gray())
            .bounds([y_min, y_max])
            .labels(vec![
                Span::raw(format_money_compact(y_min, prefix)),
                Span::raw(format_money_compact((y_min + y_max) / 2.0, prefix)),
                Span::raw(format_money_compact(y_max, prefix)),
            ]);

        let chart = Chart::new(datasets)
            .block(titled_block("PROBABILITY SENSITIVITY", None))
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopLeft));

        frame.render_widget(chart, area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, result: &SweepResult, state: &AppState) {
        let prefix = state.currency_prefix();
        let points = state.sweep_points();
        let header_style = Style::default()
            .fg(HEADER_COLOR)
            .add_modifier(Modifier::BOLD);

        let header = Row::new(
            std::iter::once(Cell::from("Decision"))
                .chain(points.iter().map(|&p| Cell::from(format!("P={}", format_probability(p)))))
                .map(|c| c.style(header_style)),
        );

        let rows = result.series.iter().enumerate().map(|(i, series)| {
            Row::new(
                std::iter::once(
                    Cell::from(series.decision.clone()).style(Style::default().fg(series_color(i))),
                )
                .chain(
                    series
                        .points
                        .iter()
                        .map(|p| Cell::from(format_money(p.ev, prefix))),
                ),
            )
        });

        let widths = std::iter::once(Constraint::Fill(2))
            .chain(points.iter().map(|_| Constraint::Fill(1)))
            .collect::<Vec<_>>();

        let table = Table::new(rows, widths)
            .header(header)
            .block(titled_block("SWEPT EV", None));
        frame.render_widget(table, area);
    }
}

impl Default for SensitivityScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SensitivityScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let result = match state.session.sweep(state.sweep_points()) {
            Ok(result) => result,
            Err(_) => {
                let content = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "  Data is empty.",
                        Style::default().fg(WARNING_COLOR),
                    )),
                    Line::from(""),
                    Line::from("  Add records on the Dataset tab to see the sweep."),
                ];
                let paragraph =
                    Paragraph::new(content).block(titled_block("SENSITIVITY", None));
                frame.render_widget(paragraph, area);
                return;
            }
        };

        let table_height = (result.len() as u16 + 4).min(area.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(table_height)])
            .split(area);

        self.render_chart(frame, chunks[0], &result, state.currency_prefix());
        self.render_table(frame, chunks[1], &result, state);
    }
}

impl Screen for SensitivityScreen {
    fn title(&self) -> &str {
        "Sensitivity"
    }
}
