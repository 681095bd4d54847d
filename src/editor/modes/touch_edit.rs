//! Touch object-editing mode
//!
//! The touch flavor of object editing. Identical rig to the mouse
//! mode, but world-facing edits are rejected until a touch has been on
//! the screen for a moment, so the tap that lands on the screen while
//! the mode opens cannot grab or delete anything by accident.

use super::super::session::EditorSession;
use super::object_rig::ObjectEditRig;
use super::{
    update_camera, update_edit_brush, update_world, CameraOptions, EditMode, ModeCommon, ModeId,
    Transition,
};

/// Minimum touch age before it may edit, seconds
const MIN_TOUCH_AGE: f32 = 0.25;

pub struct TouchEditMode {
    common: ModeCommon,
    rig: ObjectEditRig,
}

impl TouchEditMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::TouchObjectEdit, session, true),
            rig: ObjectEditRig::new(),
        }
    }

    pub fn active_tool(&self) -> Option<&'static str> {
        self.rig.active_tool()
    }

    fn edit_allowed(session: &EditorSession) -> bool {
        session.input.touch_count == 1 && session.input.touch_age >= MIN_TOUCH_AGE
    }
}

impl EditMode for TouchEditMode {
    fn id(&self) -> ModeId {
        ModeId::TouchObjectEdit
    }

    fn active(&self) -> bool {
        self.common.active()
    }

    fn activate(&mut self, session: &mut EditorSession) {
        if self.common.enter(session) {
            self.rig.start();
        }
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        if self.common.active() {
            self.rig.stop();
            self.common.exit(session);
        }
    }

    fn update(&mut self, session: &mut EditorSession) -> Option<Transition> {
        if let Some(t) = update_camera(session, self.common.token(), CameraOptions::default()) {
            return Some(t);
        }
        update_world(session);
        update_edit_brush(session);

        if !self.common.has_focus(session) {
            return None;
        }

        let allow_edit = Self::edit_allowed(session);
        self.rig.update(session, allow_edit);
        None
    }
}
