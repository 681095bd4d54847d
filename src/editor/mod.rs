//! The editor core: focus, overlays, camera, session, modes, controller

mod camera;
mod controller;
mod focus;
mod overlay;
mod session;

pub mod modes;

pub use camera::{EditCamera, MIN_EDIT_DISTANCE, ORBIT_SPEED, ZOOM_FACTOR};
pub use controller::ModeController;
pub use focus::{FocusStack, FocusToken};
pub use hit_test::{ground_hit, screen_to_ray, HitInfo, Ray};
pub use overlay::OverlayStack;
pub use session::EditorSession;
