//! Tool trait for direct-manipulation object tools
//!
//! Tools are stateful objects with an activation lifecycle; only active
//! tools receive pointer events. The owning mode routes each pointer
//! phase to the active tool along with the frame's hit test.

use crate::editor::HitInfo;
use crate::terrain::TerrainField;
use crate::world::{DirtyFlags, WorldSim};

/// Everything a tool may touch while handling a pointer event
pub struct ToolContext<'a> {
    pub hit: &'a HitInfo,
    pub world: &'a mut WorldSim,
    pub terrain: &'a TerrainField,
    pub dirty: &'a mut DirtyFlags,
}

/// Base trait for object tools
///
/// # Lifecycle
///
/// ```text
/// [Inactive] --activate()--> [Active] --deactivate()--> [Inactive]
/// ```
///
/// `activate`/`deactivate` carry the idempotent guard; implementations
/// override `do_activate`/`do_deactivate` for their own setup/cleanup.
pub trait Tool {
    /// Unique identifier (e.g. "select", "move", "delete")
    fn id(&self) -> &'static str;

    /// Human-readable label for the tool bar
    fn label(&self) -> &'static str;

    /// Whether this tool is currently active
    fn active(&self) -> bool;

    /// Attempt to activate the tool. Returns `false` when already
    /// active or when `do_activate` denies it.
    fn activate(&mut self) -> bool {
        if self.active() {
            return false;
        }
        self.do_activate()
    }

    /// Attempt to deactivate the tool. Returns `false` when already
    /// inactive or when `do_deactivate` denies it.
    fn deactivate(&mut self) -> bool {
        if !self.active() {
            return false;
        }
        self.do_deactivate()
    }

    /// Activation logic; should set the active flag and do setup.
    fn do_activate(&mut self) -> bool {
        true
    }

    /// Deactivation logic; should clear the active flag and transient
    /// state (a half-finished drag must not survive deactivation).
    fn do_deactivate(&mut self) -> bool {
        true
    }

    /// Primary pointer went down over the world
    fn pointer_pressed(&mut self, _ctx: &mut ToolContext) {}

    /// Pointer moved while the primary button/touch is held
    fn pointer_dragged(&mut self, _ctx: &mut ToolContext) {}

    /// Primary pointer released
    fn pointer_released(&mut self, _ctx: &mut ToolContext) {}

    /// Abort the current operation. Returns whether there was one.
    fn cancel(&mut self) -> bool {
        false
    }
}

/// Access to tools by id, implemented by each mode's tool set
pub trait ToolRegistry {
    fn get_tool_mut(&mut self, id: &str) -> Option<&mut dyn Tool>;
    fn get_tool(&self, id: &str) -> Option<&dyn Tool>;
    fn tool_ids(&self) -> Vec<&'static str>;
}
