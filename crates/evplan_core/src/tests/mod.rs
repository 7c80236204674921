//! Tests for the decision analysis core
//!
//! Tests are organized by topic:
//! - `dataset` - Appending, removing and the payoff invariant
//! - `ev` - Expected value aggregation and best-decision selection
//! - `sensitivity` - Probability sweep
//! - `session` - Failure atomicity and staleness of the last EV result

mod sensitivity;
mod session;

use crate::model::{Record, RecordInput};

/// Three-record dataset used across the aggregation tests:
/// A/X pays 200 at 0.5, A/Y pays 100 at 0.5, B/Z pays 0 at 1.0.
fn reference_records() -> Vec<Record> {
    vec![
        Record::new("A", "X", 0.5, 100.0, 300.0),
        Record::new("A", "Y", 0.5, 0.0, 100.0),
        Record::new("B", "Z", 1.0, 50.0, 50.0),
    ]
}

fn input(decision: &str, probability: &str, cost: &str, revenue: &str) -> RecordInput {
    RecordInput::new(decision, "market", probability, cost, revenue)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
