//! Tool-box mode: the shoulder-cycled rack of terrain tools
//!
//! Same focus-steal pattern as the tool menu: the rack owns the durable
//! focus claim while the mode grabs camera-only input once per frame.
//! The selected tool retargets the three sculpt triggers into its own
//! op-code family, so flattening reuses the raise/lower/smooth muscle
//! memory.

use crate::input::Action;
use crate::ui::ToolPalette;

use super::super::focus::FocusToken;
use super::super::session::EditorSession;
use super::{
    update_camera, update_edit_brush, update_world, CameraOptions, EditMode, ModeCommon, ModeId,
    Transition,
};

pub struct ToolBoxMode {
    common: ModeCommon,
    camera_token: FocusToken,
    palette: ToolPalette,
}

impl ToolBoxMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::ToolBox, session, true),
            camera_token: session.focus.register("ToolBoxCamera"),
            palette: ToolPalette::default(),
        }
    }

    pub fn palette(&self) -> &ToolPalette {
        &self.palette
    }
}

impl EditMode for ToolBoxMode {
    fn id(&self) -> ModeId {
        ModeId::ToolBox
    }

    fn active(&self) -> bool {
        self.common.active()
    }

    fn activate(&mut self, session: &mut EditorSession) {
        if self.common.enter(session) {
            self.palette.activate();
        }
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        if self.common.active() {
            self.palette.deactivate();
            self.common.exit(session);
        }
    }

    fn update(&mut self, session: &mut EditorSession) -> Option<Transition> {
        // Camera steal with the zoom locked; the shoulder triggers
        // belong to the rack while it is up.
        let camera_token = self.camera_token;
        let stolen = session.with_focus(camera_token, |s| {
            update_camera(s, camera_token, CameraOptions { prevent_zoom: true })
        });
        update_world(session);
        update_edit_brush(session);

        if let Some(t) = stolen {
            return Some(t);
        }

        if !self.common.has_focus(session) {
            return None;
        }

        self.palette.update(&session.input);

        let base = if session.input.is_held(Action::RaiseTerrain) {
            Some(crate::terrain::op::RAISE)
        } else if session.input.is_held(Action::LowerTerrain) {
            Some(crate::terrain::op::LOWER)
        } else if session.input.is_held(Action::SmoothTerrain) {
            Some(crate::terrain::op::SMOOTH)
        } else {
            None
        };

        if let Some(base) = base {
            let shape = session.brushes.shape(session.brush.shape_index);
            let changed = session.terrain.apply_brush(
                shape,
                session.brush.position,
                session.brush.radius,
                base + self.palette.selected().op_shift,
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
    use crate::terrain::{op, TerrainField};
    use glam::Vec3;

    fn setup() -> (EditorSession, ToolBoxMode) {
        let mut session = EditorSession::new(TerrainField::new(32, 32, 1.0));
        session.dt = 0.1;
        session.cursor = Vec3::new(16.0, 0.0, 16.0);
        let mode = ToolBoxMode::new(&mut session);
        (session, mode)
    }

    #[test]
    fn test_flatten_tool_uses_shifted_op_family() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);
        assert_eq!(mode.palette().selected().op_shift, op::SCULPT_SHIFT);

        session.input.press(Action::NextTool);
        mode.update(&mut session);
        assert_eq!(mode.palette().selected().op_shift, op::FLATTEN_SHIFT);

        // Dig a pit, then flatten-raise pulls it back toward level.
        let idx_pos = Vec3::new(16.5, 0.0, 16.5);
        session
            .terrain
            .apply_brush(crate::terrain::BrushShape::Round, idx_pos, 1.0, op::LOWER);
        let before = session.terrain.height_at(16.5, 14.0);
        assert!(session.terrain.height_at(16.5, 16.5) < before);

        session.input.clear_frame();
        session.input.hold(Action::RaiseTerrain);
        mode.update(&mut session);
        mode.update(&mut session);
        // The pit moved toward the surrounding level, not above it.
        let after = session.terrain.height_at(16.5, 16.5);
        assert!(after > -0.5 && after <= 0.0 + 1e-4);
        assert!(session.dirty.height_map);
    }

    #[test]
    fn test_back_input_leaves_for_mini_hub() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);

        session.input.press(Action::MiniHub);
        let t = mode.update(&mut session);
        assert_eq!(t, Some(Transition::ToMiniHub));
    }

    #[test]
    fn test_focus_balanced_each_frame() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);
        let depth = session.focus.depth();
        for _ in 0..3 {
            mode.update(&mut session);
        }
        assert_eq!(session.focus.depth(), depth);
    }
}
