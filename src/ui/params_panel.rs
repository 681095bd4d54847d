//! World-parameters panel sub-editor
//!
//! A vertical list of world settings plus three action rows that leave
//! the panel for another editor (camera placement, next-level picking,
//! tile programming). The action rows set exit flags the wrapping mode
//! reads once the panel reports itself inactive.

use crate::input::{Action, InputSnapshot};
use crate::world::{CameraMode, DirtyFlags, WorldSettings, SKY_COUNT};

/// Wind stepping granularity
const WIND_STEP: f32 = 0.1;

/// Rows of the panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelRow {
    Sky,
    WindMin,
    WindMax,
    CameraMode,
    GlassWalls,
    SetCamera,
    PickNextLevel,
    EditProgramTile,
}

const ROWS: [PanelRow; 8] = [
    PanelRow::Sky,
    PanelRow::WindMin,
    PanelRow::WindMax,
    PanelRow::CameraMode,
    PanelRow::GlassWalls,
    PanelRow::SetCamera,
    PanelRow::PickNextLevel,
    PanelRow::EditProgramTile,
];

/// Why the panel closed, read by the wrapping mode at exit time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitFlags {
    pub camera_set_mode: bool,
    pub next_level_mode: bool,
    pub editing_programming_tile: bool,
}

/// The world-parameters panel
#[derive(Debug, Default)]
pub struct WorldParamsPanel {
    cursor: usize,
    active: bool,
    exit_flags: ExitFlags,
}

impl WorldParamsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.cursor = 0;
        }
    }

    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
        }
    }

    /// Exit flags set by the action rows; cleared by the read so a
    /// stale flag cannot leak into a later exit
    pub fn take_exit_flags(&mut self) -> ExitFlags {
        std::mem::take(&mut self.exit_flags)
    }

    /// Navigate rows and edit the lent settings in place
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        settings: &mut WorldSettings,
        dirty: &mut DirtyFlags,
    ) {
        if !self.active {
            return;
        }
        if input.was_pressed(Action::MenuUp) {
            self.cursor = (self.cursor + ROWS.len() - 1) % ROWS.len();
        }
        if input.was_pressed(Action::MenuDown) {
            self.cursor = (self.cursor + 1) % ROWS.len();
        }
        if input.was_pressed(Action::Select) {
            self.apply_row(ROWS[self.cursor], settings, dirty);
        }
        if input.was_pressed(Action::Cancel) {
            self.deactivate();
        }
    }

    fn apply_row(&mut self, row: PanelRow, settings: &mut WorldSettings, dirty: &mut DirtyFlags) {
        match row {
            PanelRow::Sky => {
                settings.sky = (settings.sky + 1) % SKY_COUNT;
                dirty.mark_level();
            }
            PanelRow::WindMin => {
                let next = settings.wind_min + WIND_STEP;
                settings.wind_min = if next > settings.wind_max { 0.0 } else { next };
                dirty.mark_level();
            }
            PanelRow::WindMax => {
                let next = settings.wind_max + WIND_STEP;
                settings.wind_max = if next > 1.0 { settings.wind_min } else { next };
                dirty.mark_level();
            }
            PanelRow::CameraMode => {
                let index = CameraMode::ALL
                    .iter()
                    .position(|m| *m == settings.camera_mode)
                    .unwrap_or(0);
                settings.camera_mode = CameraMode::ALL[(index + 1) % CameraMode::ALL.len()];
                dirty.mark_level();
            }
            PanelRow::GlassWalls => {
                settings.glass_walls = !settings.glass_walls;
                dirty.mark_level();
            }
            PanelRow::SetCamera => {
                self.exit_flags.camera_set_mode = true;
                self.deactivate();
            }
            PanelRow::PickNextLevel => {
                self.exit_flags.next_level_mode = true;
                self.deactivate();
            }
            PanelRow::EditProgramTile => {
                self.exit_flags.editing_programming_tile = true;
                self.deactivate();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> InputSnapshot {
        let mut input = InputSnapshot::new();
        input.press(Action::Select);
        input
    }

    fn down() -> InputSnapshot {
        let mut input = InputSnapshot::new();
        input.press(Action::MenuDown);
        input
    }

    #[test]
    fn test_editing_sky_marks_level_dirty() {
        let mut panel = WorldParamsPanel::new();
        let mut settings = WorldSettings::default();
        let mut dirty = DirtyFlags::default();
        panel.activate();

        panel.update(&select(), &mut settings, &mut dirty);
        assert_eq!(settings.sky, 1);
        assert!(dirty.level);
        assert!(panel.active());
    }

    #[test]
    fn test_next_level_row_sets_flag_and_closes() {
        let mut panel = WorldParamsPanel::new();
        let mut settings = WorldSettings::default();
        let mut dirty = DirtyFlags::default();
        panel.activate();

        // Walk down to the pick-next-level row.
        for _ in 0..6 {
            panel.update(&down(), &mut settings, &mut dirty);
        }
        panel.update(&select(), &mut settings, &mut dirty);

        assert!(!panel.active());
        let flags = panel.take_exit_flags();
        assert!(flags.next_level_mode);
        assert!(!flags.camera_set_mode);
        // Flags are cleared by the read.
        assert_eq!(panel.take_exit_flags(), ExitFlags::default());
    }

    #[test]
    fn test_cancel_closes_without_flags() {
        let mut panel = WorldParamsPanel::new();
        let mut settings = WorldSettings::default();
        let mut dirty = DirtyFlags::default();
        panel.activate();

        let mut input = InputSnapshot::new();
        input.press(Action::Cancel);
        panel.update(&input, &mut settings, &mut dirty);

        assert!(!panel.active());
        assert_eq!(panel.take_exit_flags(), ExitFlags::default());
        assert!(!dirty.level);
    }

    #[test]
    fn test_wind_min_never_exceeds_max() {
        let mut panel = WorldParamsPanel::new();
        let mut settings = WorldSettings::default();
        let mut dirty = DirtyFlags::default();
        panel.activate();

        panel.update(&down(), &mut settings, &mut dirty);
        for _ in 0..20 {
            panel.update(&select(), &mut settings, &mut dirty);
            assert!(settings.wind_min <= settings.wind_max);
        }
    }
}
