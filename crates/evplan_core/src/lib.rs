//! Decision analysis core
//!
//! This crate holds the arithmetic behind the decision calculator:
//! - An ordered record store with stable ids (`Dataset`)
//! - Expected value per decision and the best decision (`compute_ev`)
//! - A probability sensitivity sweep (`sweep`)
//! - Session state tying the dataset to its last EV result (`Session`)
//!
//! ```ignore
//! use evplan_core::{RecordInput, Session, DEFAULT_PROBABILITY_POINTS};
//!
//! let mut session = Session::new();
//! session.append(&RecordInput::new("Launch", "Strong", "0.6", "1.500.000", "4.000.000"))?;
//! session.append(&RecordInput::new("Launch", "Weak", "0.4", "1.500.000", "500.000"))?;
//!
//! let summary = session.compute()?;
//! println!("best: {}", summary.best_decision);
//!
//! let sweep = session.sweep(&DEFAULT_PROBABILITY_POINTS)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod dataset;
pub mod error;
pub mod ev;
pub mod money;
pub mod sensitivity;
pub mod session;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use dataset::Dataset;
pub use error::{DecisionError, InputField, Result};
pub use ev::{EvMap, EvSummary, compute_ev};
pub use model::{Record, RecordId, RecordInput};
pub use sensitivity::{DEFAULT_PROBABILITY_POINTS, SweepPoint, SweepResult, SweepSeries, sweep};
pub use session::Session;
