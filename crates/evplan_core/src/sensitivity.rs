//! Probability sensitivity sweep.
//!
//! For every decision and every swept point `p`, the EV is recomputed as if
//! each record of that decision had probability `p`. Stored probabilities are
//! overridden rather than blended, so `EV(decision, p) = p * sum(payoff)`
//! even when the decision's conditions originally carried different
//! probabilities.

use serde::Serialize;

use crate::error::{DecisionError, Result};
use crate::ev::payoff_totals;
use crate::model::Record;

/// Canonical sweep points
pub const DEFAULT_PROBABILITY_POINTS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub probability: f64,
    pub ev: f64,
}

/// Swept EVs of one decision, in the order the points were given
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSeries {
    pub decision: String,
    pub points: Vec<SweepPoint>,
}

impl SweepSeries {
    /// `(probability, ev)` pairs, the shape chart datasets take
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.probability, p.ev)).collect()
    }
}

/// One series per decision, in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SweepResult {
    pub series: Vec<SweepSeries>,
}

impl SweepResult {
    pub fn get(&self, decision: &str) -> Option<&SweepSeries> {
        self.series.iter().find(|s| s.decision == decision)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Smallest and largest EV over all series, if any point exists
    pub fn ev_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.ev))
            .fold(None, |acc, ev| match acc {
                None => Some((ev, ev)),
                Some((lo, hi)) => Some((lo.min(ev), hi.max(ev))),
            })
    }
}

/// Sweep every decision in `records` over `points`.
pub fn sweep<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    points: &[f64],
) -> Result<SweepResult> {
    let totals = payoff_totals(records);
    if totals.is_empty() {
        return Err(DecisionError::EmptyDataset);
    }

    let series = totals
        .iter()
        .map(|(decision, total)| SweepSeries {
            decision: decision.to_string(),
            points: points
                .iter()
                .map(|&probability| SweepPoint {
                    probability,
                    ev: probability * total,
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    tracing::info!(
        decisions = series.len(),
        points = points.len(),
        "ran sensitivity sweep"
    );

    Ok(SweepResult { series })
}
