mod app_state;
mod modal;
mod tabs;

pub use app_state::*;
pub use modal::*;
pub use tabs::*;
