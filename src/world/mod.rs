//! World data: simulation actors, settings, and level metadata

mod level;
mod settings;
mod sim;

pub use level::{DirtyFlags, LevelInfo};
pub use settings::{CameraMode, SettingsError, WorldSettings, SKY_COUNT};
pub use sim::{Actor, ActorId, WorldSim};
