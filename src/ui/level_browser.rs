//! Next-level browser sub-editor
//!
//! Lists the levels this world may chain into. Selecting records the
//! level name and closes; cancelling closes without a choice. Where the
//! entries come from (storage, community, samples) is the host's
//! business - they are handed in as plain metadata.

use crate::input::{Action, InputSnapshot};
use crate::world::LevelInfo;

/// Browsable list of chain-target levels
#[derive(Debug, Default)]
pub struct NextLevelBrowser {
    levels: Vec<LevelInfo>,
    cursor: usize,
    active: bool,
    chosen: Option<String>,
}

impl NextLevelBrowser {
    pub fn new(levels: Vec<LevelInfo>) -> Self {
        Self {
            levels,
            cursor: 0,
            active: false,
            chosen: None,
        }
    }

    pub fn set_levels(&mut self, levels: Vec<LevelInfo>) {
        self.levels = levels;
        self.cursor = 0;
    }

    pub fn levels(&self) -> &[LevelInfo] {
        &self.levels
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
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
        let len = self.levels.len();
        if len > 0 {
            if input.was_pressed(Action::MenuUp) {
                self.cursor = (self.cursor + len - 1) % len;
            }
            if input.was_pressed(Action::MenuDown) {
                self.cursor = (self.cursor + 1) % len;
            }
            if input.was_pressed(Action::Select) {
                self.chosen = Some(self.levels[self.cursor].name.clone());
                self.active = false;
                return;
            }
        }
        if input.was_pressed(Action::Cancel) {
            self.chosen = None;
            self.active = false;
        }
    }

    /// The level picked when the browser closed, if any
    pub fn take_chosen(&mut self) -> Option<String> {
        self.chosen.take()
    }
}
