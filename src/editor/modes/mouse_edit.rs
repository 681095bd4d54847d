//! Mouse object-editing mode
//!
//! Direct manipulation of world actors with the pointer. Owns a tool
//! box of manipulation tools and a tool bar; activation cascades
//! lifecycle to both.

use super::super::session::EditorSession;
use super::object_rig::ObjectEditRig;
use super::{
    update_camera, update_edit_brush, update_world, CameraOptions, EditMode, ModeCommon, ModeId,
    Transition,
};

pub struct MouseEditMode {
    common: ModeCommon,
    rig: ObjectEditRig,
}

impl MouseEditMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::MouseObjectEdit, session, true),
            rig: ObjectEditRig::new(),
        }
    }

    pub fn active_tool(&self) -> Option<&'static str> {
        self.rig.active_tool()
    }
}

impl EditMode for MouseEditMode {
    fn id(&self) -> ModeId {
        ModeId::MouseObjectEdit
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

        self.rig.update(session, true);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Action, DeviceClass};
    use crate::terrain::TerrainField;
    use glam::{Vec2, Vec3};

    fn setup() -> (EditorSession, MouseEditMode) {
        let mut session = EditorSession::new(TerrainField::new(32, 32, 1.0));
        session.dt = 0.1;
        session.cursor = Vec3::new(16.0, 0.0, 16.0);
        session.camera.at = session.cursor;
        session.camera.desired_at = session.cursor;
        let mode = MouseEditMode::new(&mut session);
        (session, mode)
    }

    #[test]
    fn test_lifecycle_cascades_to_owned_objects() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);
        assert_eq!(mode.active_tool(), Some("select"));

        mode.deactivate(&mut session);
        assert_eq!(mode.active_tool(), None);
    }

    #[test]
    fn test_delete_tool_removes_actor_under_pointer() {
        let (mut session, mut mode) = setup();
        let id = session.world.spawn("rock", Vec3::new(16.0, 1.0, 16.0), 2.0);
        mode.activate(&mut session);

        // Click the delete button on the bar (third entry).
        session.input.set_pointer(Vec2::new(100.0 + 20.0, 10.0), DeviceClass::Mouse);
        session.input.primary_pressed = true;
        mode.update(&mut session);
        assert_eq!(mode.active_tool(), Some("delete"));
        assert!(session.world.actor(id).is_some());

        // Point at the middle of the viewport, where the camera looks.
        session.input.clear_frame();
        session.input.set_pointer(Vec2::new(640.0, 360.0), DeviceClass::Mouse);
        session.input.primary_pressed = true;
        session.input.primary_held = true;
        mode.update(&mut session);
        assert!(session.world.actor(id).is_none());
        assert!(session.dirty.level);
    }

    #[test]
    fn test_back_input_returns_to_tool_menu() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);

        session.input.press(Action::ToolMenu);
        let t = mode.update(&mut session);
        assert_eq!(t, Some(Transition::To(ModeId::ToolMenu)));
    }
}
