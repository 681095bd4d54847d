//! islet - in-game 3D world editor core
//!
//! The logic that decides which editing tool owns input from frame to
//! frame: a focus stack, a mode state machine over the editing contexts
//! (sculpt, paint, world settings, menus, pickers, object editing), and
//! the brush-driven terrain mutation contract. Rendering, audio, device
//! polling, and level persistence live outside; the host drives
//! [`ModeController::tick`] with an input snapshot each frame and reads
//! the dirty flags and overlay stack back out.
//!
//! ```
//! use islet::editor::ModeController;
//! use islet::input::InputSnapshot;
//! use islet::terrain::TerrainField;
//!
//! let mut editor = ModeController::new(TerrainField::new(64, 64, 1.0));
//! editor.tick(InputSnapshot::new(), 1.0 / 60.0);
//! assert_eq!(editor.overlay(), Some("ToolMenu"));
//! ```
//!
//! [`ModeController::tick`]: editor::ModeController::tick

pub mod editor;
pub mod input;
pub mod terrain;
pub mod ui;
pub mod world;
