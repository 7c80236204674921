mod ids;
mod record;

pub use ids::RecordId;
pub use record::{Record, RecordInput};
