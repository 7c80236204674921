//! Terminal front-end for the decision calculator
//!
//! Four tabs over one [`evplan_core::Session`]: the record table, the EV
//! chart, the probability sensitivity sweep and the decision tree.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

#[cfg(test)]
mod tests;

pub use app::App;
pub use config::AppConfig;
pub use data::storage::{StorageError, load_dataset, save_dataset};
pub use logging::init_logging;
pub use state::AppState;
