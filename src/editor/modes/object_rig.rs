//! Shared rig for the object-edit modes
//!
//! The mouse and touch flavors differ only in how pointer editing is
//! gated, so the owned tool box, tool set, and tool bar live here. The
//! rig runs the frame's hit test, routes tool-bar clicks, and forwards
//! pointer phases to the active tool.

use glam::Vec2;

use crate::input::Action;
use crate::ui::{ObjectToolSet, ToolBar, ToolBarEntry, ToolBox, ToolContext, ToolRegistry};

use super::super::session::EditorSession;

#[derive(Debug)]
pub(super) struct ObjectEditRig {
    tools: ObjectToolSet,
    tool_box: ToolBox,
    tool_bar: ToolBar,
}

impl ObjectEditRig {
    pub fn new() -> Self {
        let mut tool_box = ToolBox::new();
        tool_box.add_exclusive_group(&ObjectToolSet::IDS);
        Self {
            tools: ObjectToolSet::default(),
            tool_box,
            tool_bar: ToolBar::new(vec![
                ToolBarEntry { id: "select", label: "Select" },
                ToolBarEntry { id: "move", label: "Move" },
                ToolBarEntry { id: "delete", label: "Delete" },
            ]),
        }
    }

    /// Cascaded from the owning mode's activation
    pub fn start(&mut self) {
        self.tool_bar.load_content();
        self.tool_box.enable();
        self.tool_box.activate_tool("select", &mut self.tools);
    }

    /// Cascaded from the owning mode's deactivation
    pub fn stop(&mut self) {
        self.tool_box.deactivate_all(&mut self.tools);
        self.tool_bar.unload_content();
    }

    pub fn active_tool(&self) -> Option<&'static str> {
        self.tool_box.active_tool()
    }

    /// One frame of object editing. `allow_edit` gates world-facing
    /// pointer input (the touch flavor rejects very young touches);
    /// the hit test and tool-bar hover always run.
    pub fn update(&mut self, session: &mut EditorSession, allow_edit: bool) {
        match session.pointer_ray() {
            Some(ray) => {
                let EditorSession { hit, world, terrain, .. } = session;
                hit.compute(ray, world, terrain);
            }
            None => session.hit.clear(),
        }

        if let Some(clicked) = self
            .tool_bar
            .update(session.input.pointer, session.input.primary_pressed)
        {
            self.tool_box.activate_tool(clicked, &mut self.tools);
            return;
        }
        if self.tool_bar.hovering() {
            // Clicks over the bar never reach the world.
            return;
        }

        let pressed = session.input.primary_pressed && allow_edit;
        let dragged = session.input.primary_held && session.input.pointer_delta != Vec2::ZERO && allow_edit;
        let released = session.input.primary_released;
        let cancel = session.input.was_pressed(Action::Cancel);

        let Some(active_id) = self.tool_box.active_tool() else {
            return;
        };
        let Some(tool) = self.tools.get_tool_mut(active_id) else {
            return;
        };

        if cancel {
            tool.cancel();
            self.tool_box.enable();
            return;
        }

        let EditorSession { hit, world, terrain, dirty, .. } = session;
        let mut ctx = ToolContext {
            hit: &*hit,
            world,
            terrain,
            dirty,
        };

        if pressed {
            tool.pointer_pressed(&mut ctx);
            // No tool switches mid-drag.
            self.tool_box.disable();
        } else if dragged {
            tool.pointer_dragged(&mut ctx);
        }
        if released {
            tool.pointer_released(&mut ctx);
            self.tool_box.enable();
        }
    }
}
