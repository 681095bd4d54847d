//! Sculpt-tool palette sub-editor
//!
//! The rack of terrain tools the tool-box mode cycles through. Each
//! entry carries the op-code shift that retargets the three sculpt
//! triggers to its own operation family.

use crate::input::{Action, InputSnapshot};
use crate::terrain::op;

/// One tool on the rack
#[derive(Debug, Clone, Copy)]
pub struct SculptTool {
    pub id: &'static str,
    pub label: &'static str,
    /// Added to the base op code when this tool applies the brush
    pub op_shift: u8,
}

/// Shoulder-cycled rack of sculpt tools
#[derive(Debug)]
pub struct ToolPalette {
    tools: Vec<SculptTool>,
    selected: usize,
    active: bool,
}

impl Default for ToolPalette {
    fn default() -> Self {
        Self {
            tools: vec![
                SculptTool {
                    id: "sculpt",
                    label: "Raise & Lower",
                    op_shift: op::SCULPT_SHIFT,
                },
                SculptTool {
                    id: "flatten",
                    label: "Flatten",
                    op_shift: op::FLATTEN_SHIFT,
                },
            ],
            selected: 0,
            active: false,
        }
    }
}

impl ToolPalette {
    pub fn new(tools: Vec<SculptTool>) -> Self {
        assert!(!tools.is_empty(), "palette needs at least one tool");
        Self {
            tools,
            selected: 0,
            active: false,
        }
    }

    pub fn tools(&self) -> &[SculptTool] {
        &self.tools
    }

    pub fn selected(&self) -> SculptTool {
        self.tools[self.selected]
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
        }
    }

    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
        }
    }

    /// Cycle the selection from the shoulder triggers
    pub fn update(&mut self, input: &InputSnapshot) {
        if !self.active {
            return;
        }
        let len = self.tools.len();
        if input.was_pressed(Action::NextTool) {
            self.selected = (self.selected + 1) % len;
            log::debug!("palette tool: {}", self.selected().id);
        }
        if input.was_pressed(Action::PrevTool) {
            self.selected = (self.selected + len - 1) % len;
            log::debug!("palette tool: {}", self.selected().id);
        }
    }
}
