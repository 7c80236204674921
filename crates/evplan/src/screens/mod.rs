pub mod dataset;
pub mod ev_chart;
pub mod sensitivity;
pub mod tree;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}
