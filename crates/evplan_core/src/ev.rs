//! Expected value aggregation.
//!
//! Records are grouped by decision label and each group's EV is the sum of
//! `probability * payoff` over its records. Groups keep the order in which
//! their label first appeared in the dataset, and that order also breaks ties
//! for the best decision: the earliest label wins.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{DecisionError, Result};
use crate::model::Record;

/// Insertion-ordered map from decision label to a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvMap {
    entries: Vec<(String, f64)>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl EvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the accumulator for `decision`. A new label is placed
    /// after every existing one.
    pub fn accumulate(&mut self, decision: &str, amount: f64) {
        match self.index.get(decision) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(decision.to_string(), self.entries.len());
                self.entries.push((decision.to_string(), amount));
            }
        }
    }

    pub fn get(&self, decision: &str) -> Option<f64> {
        self.index.get(decision).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in first-appearance order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// `(label, value)` pairs in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(label, ev)| (label.as_str(), *ev))
    }

    /// Label with the largest value; the first one wins on an exact tie.
    ///
    /// NaN values never beat a number. A map holding only NaN yields its
    /// first label.
    pub fn argmax(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, ev) in self.iter() {
            let better = match best {
                None => true,
                Some((_, best_ev)) => !ev.is_nan() && (best_ev.is_nan() || ev > best_ev),
            };
            if better {
                best = Some((label, ev));
            }
        }
        best
    }
}

/// Result of one aggregation pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvSummary {
    pub ev: EvMap,
    pub best_decision: String,
}

impl EvSummary {
    pub fn best_ev(&self) -> f64 {
        self.ev.get(&self.best_decision).unwrap_or_default()
    }
}

/// Group `records` by decision and compute each group's expected value.
pub fn compute_ev<'a>(records: impl IntoIterator<Item = &'a Record>) -> Result<EvSummary> {
    let mut ev = EvMap::new();
    for record in records {
        ev.accumulate(record.decision(), record.weighted_payoff());
    }

    let best_decision = ev
        .argmax()
        .map(|(label, _)| label.to_string())
        .ok_or(DecisionError::EmptyDataset)?;

    tracing::info!(
        decisions = ev.len(),
        best = %best_decision,
        "computed expected values"
    );

    Ok(EvSummary { ev, best_decision })
}

/// Sum of payoffs per decision, ignoring probabilities.
///
/// This is the per-group total the sensitivity sweep scales by each point.
pub fn payoff_totals<'a>(records: impl IntoIterator<Item = &'a Record>) -> EvMap {
    let mut totals = EvMap::new();
    for record in records {
        totals.accumulate(record.decision(), record.payoff());
    }
    totals
}
