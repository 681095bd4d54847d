//! Input handling: editor actions and the per-tick snapshot

mod actions;
mod state;

pub use actions::Action;
pub use state::{DeviceClass, InputSnapshot};
