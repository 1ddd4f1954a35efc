pub mod handler;
pub mod types;

pub use handler::{ToggleController, list_hideable};
pub use types::{HideablePreview, ToggleOutcome, ToggleSettings};
