//! Tool menu mode
//!
//! The menu owns the durable focus claim; every frame the mode
//! transiently steals focus with a second token to run camera-only
//! input, then hands focus straight back so the menu keeps navigation
//! and selection. Zoom stays locked because the menu lives on the
//! shoulder-adjacent buttons.

use crate::ui::{MenuEntry, ToolMenuUi};

use super::super::focus::FocusToken;
use super::super::session::EditorSession;
use super::{
    update_camera, update_edit_brush, update_world, CameraOptions, EditMode, ModeCommon, ModeId,
    Transition,
};

pub struct ToolMenuMode {
    common: ModeCommon,
    camera_token: FocusToken,
    menu: ToolMenuUi,
}

impl ToolMenuMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::ToolMenu, session, true),
            camera_token: session.focus.register("ToolMenuCamera"),
            menu: ToolMenuUi::new(vec![
                MenuEntry { id: "height_map", label: "Sculpt Terrain" },
                MenuEntry { id: "texture", label: "Paint Materials" },
                MenuEntry { id: "objects", label: "Edit Objects" },
                MenuEntry { id: "world_params", label: "World Settings" },
                MenuEntry { id: "tool_box", label: "Terrain Tools" },
            ]),
        }
    }

    fn choice_transition(choice: &str) -> Option<Transition> {
        match choice {
            "height_map" => Some(Transition::To(ModeId::HeightMapEdit)),
            "texture" => Some(Transition::To(ModeId::TextureEdit)),
            "objects" => Some(Transition::ToObjectEdit),
            "world_params" => Some(Transition::To(ModeId::WorldParameters)),
            "tool_box" => Some(Transition::To(ModeId::ToolBox)),
            _ => None,
        }
    }
}

impl EditMode for ToolMenuMode {
    fn id(&self) -> ModeId {
        ModeId::ToolMenu
    }

    fn active(&self) -> bool {
        self.common.active()
    }

    fn activate(&mut self, session: &mut EditorSession) {
        if self.common.enter(session) {
            self.menu.activate();
        }
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        if self.common.active() {
            self.menu.deactivate();
            self.common.exit(session);
        }
    }

    fn update(&mut self, session: &mut EditorSession) -> Option<Transition> {
        // Steal focus for camera navigation only; the push/pop pair
        // stays balanced within this frame.
        let camera_token = self.camera_token;
        let stolen = session.with_focus(camera_token, |s| {
            update_camera(s, camera_token, CameraOptions { prevent_zoom: true })
        });
        update_world(session);
        update_edit_brush(session);

        if let Some(t) = stolen {
            // Reopening the menu from inside it is a no-op.
            if t != Transition::To(ModeId::ToolMenu) {
                return Some(t);
            }
        }

        if self.common.has_focus(session) {
            self.menu.update(&session.input);
        }
        self.menu
            .take_choice()
            .and_then(Self::choice_transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use crate::terrain::TerrainField;

    fn setup() -> (EditorSession, ToolMenuMode) {
        let mut session = EditorSession::new(TerrainField::new(16, 16, 1.0));
        session.dt = 0.1;
        let mode = ToolMenuMode::new(&mut session);
        (session, mode)
    }

    #[test]
    fn test_focus_stays_balanced_across_update() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);
        let depth = session.focus.depth();
        mode.update(&mut session);
        assert_eq!(session.focus.depth(), depth);
    }

    #[test]
    fn test_selecting_sculpt_requests_height_map() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);

        session.input.press(Action::Select);
        let t = mode.update(&mut session);
        assert_eq!(t, Some(Transition::To(ModeId::HeightMapEdit)));
    }

    #[test]
    fn test_object_entry_resolves_by_device_later() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);

        session.input.press(Action::MenuDown);
        mode.update(&mut session);
        session.input.clear_frame();
        session.input.press(Action::MenuDown);
        mode.update(&mut session);
        session.input.clear_frame();

        session.input.press(Action::Select);
        let t = mode.update(&mut session);
        assert_eq!(t, Some(Transition::ToObjectEdit));
    }

    #[test]
    fn test_mini_hub_reachable_from_menu() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);

        session.input.press(Action::MiniHub);
        let t = mode.update(&mut session);
        assert_eq!(t, Some(Transition::ToMiniHub));
    }

    #[test]
    fn test_zoom_locked_while_menu_up() {
        let (mut session, mut mode) = setup();
        mode.activate(&mut session);

        session.input.hold(Action::ZoomIn);
        let before = session.camera.desired_distance;
        mode.update(&mut session);
        assert_eq!(session.camera.desired_distance, before);
    }
}
