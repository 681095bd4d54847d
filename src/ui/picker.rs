//! Material grid picker sub-editor
//!
//! Presents the paint palette as a small grid. Selecting confirms and
//! deactivates; cancelling deactivates without a choice. The wrapping
//! mode watches `active()` flipping false to trigger its return
//! transition.

use crate::input::{Action, InputSnapshot};
use crate::terrain::MATERIAL_PALETTE_SIZE;

/// Grid picker over the paint material palette
#[derive(Debug, Default)]
pub struct TexturePickerUi {
    cursor: usize,
    active: bool,
    chosen: Option<usize>,
}

impl TexturePickerUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Open the picker with the cursor on the current material
    pub fn activate(&mut self, current: usize) {
        if !self.active {
            self.active = true;
            self.cursor = current % MATERIAL_PALETTE_SIZE;
            self.chosen = None;
        }
    }

    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
        }
    }

    pub fn update(&mut self, input: &InputSnapshot) {
        if !self.active {
            return;
        }
        if input.was_pressed(Action::MenuUp) {
            self.cursor = (self.cursor + MATERIAL_PALETTE_SIZE - 1) % MATERIAL_PALETTE_SIZE;
        }
        if input.was_pressed(Action::MenuDown) {
            self.cursor = (self.cursor + 1) % MATERIAL_PALETTE_SIZE;
        }
        if input.was_pressed(Action::Select) {
            self.chosen = Some(self.cursor);
            self.active = false;
        } else if input.was_pressed(Action::Cancel) {
            self.chosen = None;
            self.active = false;
        }
    }

    /// Confirmed material, if the picker closed with one
    pub fn take_chosen(&mut self) -> Option<usize> {
        self.chosen.take()
    }
}
