//! Front-end tests for the decision calculator
//!
//! Tests are organized by topic:
//! - `actions` - Record add/delete, EV computation and dataset files
//! - `app_keys` - Key handling through the app loop, modals included

mod actions;

use evplan_core::Record;

use crate::config::AppConfig;
use crate::state::AppState;

/// Records with EV A = 150, B = 0
pub fn reference_records() -> Vec<Record> {
    vec![
        Record::new("A", "X", 0.5, 100.0, 300.0),
        Record::new("A", "Y", 0.5, 0.0, 100.0),
        Record::new("B", "Z", 1.0, 50.0, 50.0),
    ]
}

pub fn reference_state() -> AppState {
    let mut state = AppState::new(AppConfig::default(), Default::default());
    state.session.replace(reference_records());
    state
}

pub fn form_values(values: [&str; 5]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
