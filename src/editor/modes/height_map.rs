//! Height-map sculpting mode
//!
//! Three triggers map to raise, lower, and smooth. The common update
//! runs before input so the brush position is fresh when a trigger
//! samples it. On activation the triggers stay dead until all three
//! have been released once, so the press that opened the mode cannot
//! also sculpt.

use crate::input::Action;
use crate::terrain::op;

use super::super::session::EditorSession;
use super::{
    update_camera, update_edit_brush, update_world, CameraOptions, EditMode, ModeCommon, ModeId,
    Transition,
};

pub struct HeightMapMode {
    common: ModeCommon,
    /// Op-code family this mode sculpts with
    op_shift: u8,
    /// Debounce: triggers are ignored until all are released once
    starting: bool,
}

impl HeightMapMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::HeightMapEdit, session, true),
            op_shift: op::SCULPT_SHIFT,
            starting: false,
        }
    }
}

impl EditMode for HeightMapMode {
    fn id(&self) -> ModeId {
        ModeId::HeightMapEdit
    }

    fn active(&self) -> bool {
        self.common.active()
    }

    fn activate(&mut self, session: &mut EditorSession) {
        if self.common.enter(session) {
            self.starting = true;
        }
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        self.common.exit(session);
    }

    fn update(&mut self, session: &mut EditorSession) -> Option<Transition> {
        // Camera, world, brush - in that order, before input, so the
        // brush position is this frame's.
        if let Some(t) = update_camera(session, self.common.token(), CameraOptions::default()) {
            return Some(t);
        }
        update_world(session);
        update_edit_brush(session);

        if !self.common.has_focus(session) {
            return None;
        }

        let raise = session.input.is_held(Action::RaiseTerrain);
        let lower = session.input.is_held(Action::LowerTerrain);
        let smooth = session.input.is_held(Action::SmoothTerrain);

        if self.starting {
            if !raise && !lower && !smooth {
                self.starting = false;
            }
            return None;
        }

        let base = if raise {
            Some(op::RAISE)
        } else if lower {
            Some(op::LOWER)
        } else if smooth {
            Some(op::SMOOTH)
        } else {
            None
        };

        if let Some(base) = base {
            let shape = session.brushes.shape(session.brush.shape_index);
            let changed = session.terrain.apply_brush(
                shape,
                session.brush.position,
                session.brush.radius,
                base + self.op_shift,
            );
            if changed {
                session.dirty.mark_height_map();
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainField;
    use glam::Vec3;

    fn setup() -> (EditorSession, HeightMapMode) {
        let mut session = EditorSession::new(TerrainField::new(32, 32, 1.0));
        session.dt = 0.1;
        session.cursor = Vec3::new(16.0, 0.0, 16.0);
        let mode = HeightMapMode::new(&mut session);
        (session, mode)
    }

    fn max_height(session: &EditorSession) -> f32 {
        let mut max = f32::MIN;
        for iz in 0..session.terrain.depth() {
            for ix in 0..session.terrain.width() {
                max = max.max(session.terrain.height(ix, iz));
            }
        }
        max
    }

    #[test]
    fn test_debounce_swallows_opening_press() {
        let (mut session, mut mode) = setup();
        session.input.press(Action::RaiseTerrain);
        mode.activate(&mut session);

        // Held from before activation: no mutation, however long held.
        for _ in 0..5 {
            session.input.clear_frame();
            session.input.hold(Action::RaiseTerrain);
            mode.update(&mut session);
        }
        assert_eq!(max_height(&session), 0.0);
        assert!(!session.dirty.height_map);

        // Release all triggers, then press again: sculpting works.
        session.input.clear_frame();
        session.input.release(Action::RaiseTerrain);
        mode.update(&mut session);

        session.input.press(Action::RaiseTerrain);
        mode.update(&mut session);
        assert!(max_height(&session) > 0.0);
        assert!(session.dirty.height_map);
        assert!(session.dirty.level);
    }

    #[test]
    fn test_raise_beats_lower_when_both_held() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);
        mode.update(&mut session); // clears the debounce (nothing held)

        session.input.press(Action::RaiseTerrain);
        session.input.press(Action::LowerTerrain);
        mode.update(&mut session);
        assert!(max_height(&session) > 0.0);
    }

    #[test]
    fn test_no_sculpting_without_focus() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);
        mode.update(&mut session);

        // A modal overlay steals focus.
        let overlay = session.focus.register("modal");
        session.focus.push(overlay);

        session.input.press(Action::RaiseTerrain);
        mode.update(&mut session);
        assert_eq!(max_height(&session), 0.0);

        session.focus.pop(overlay);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);
        mode.activate(&mut session);
        assert_eq!(session.overlays.depth(), 1);
        assert_eq!(session.focus.depth(), 1);

        mode.deactivate(&mut session);
        mode.deactivate(&mut session);
        assert_eq!(session.overlays.depth(), 0);
        assert_eq!(session.focus.depth(), 0);
    }
}
