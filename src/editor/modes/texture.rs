//! Texture painting mode
//!
//! Cycles the paint material over the palette, paints on a fresh
//! trigger press or while dragging a moving brush, and opens the
//! material picker on request. Input runs before the common update
//! here, so a paint lands where the brush was computed last frame and
//! the camera cannot double-consume this frame's sticks.

use crate::input::Action;

use super::super::session::EditorSession;
use super::{
    update_camera, update_edit_brush, update_world, CameraOptions, EditMode, ModeCommon, ModeId,
    Transition,
};

pub struct TextureEditMode {
    common: ModeCommon,
}

impl TextureEditMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::TextureEdit, session, true),
        }
    }
}

impl EditMode for TextureEditMode {
    fn id(&self) -> ModeId {
        ModeId::TextureEdit
    }

    fn active(&self) -> bool {
        self.common.active()
    }

    fn activate(&mut self, session: &mut EditorSession) {
        self.common.enter(session);
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        self.common.exit(session);
    }

    fn update(&mut self, session: &mut EditorSession) -> Option<Transition> {
        let mut pending = None;

        if self.common.has_focus(session) {
            if session.input.was_pressed(Action::NextMaterial) {
                session.brush.cycle_material();
                log::debug!("paint material: {}", session.brush.material_index);
            }
            if session.input.was_pressed(Action::OpenPicker) {
                pending = Some(Transition::To(ModeId::TexturePicker));
            }

            let pressed = session.input.was_pressed(Action::Paint);
            let held = session.input.is_held(Action::Paint);
            if pressed || (held && session.brush.moved) {
                let shape = session.brushes.shape(session.brush.shape_index);
                let changed = session.terrain.paint_material(
                    session.brush.material_index,
                    session.brush.position,
                    session.brush.radius,
                    shape,
                );
                if changed {
                    session.dirty.mark_materials();
                }
            }
        }

        // Common update after input; the fresh brush is for next frame
        // and this frame's visuals.
        let from_camera = update_camera(session, self.common.token(), CameraOptions::default());
        update_world(session);
        update_edit_brush(session);

        pending.or(from_camera)
    }
}
