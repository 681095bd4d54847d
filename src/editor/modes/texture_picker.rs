//! Texture picker mode
//!
//! A short-lived sub-mode over the paint palette. The moment the picker
//! reports itself inactive the mode writes any confirmed choice into
//! the brush and returns to texture editing on its own.

use crate::ui::TexturePickerUi;

use super::super::session::EditorSession;
use super::{update_world, EditMode, ModeCommon, ModeId, Transition};

pub struct TexturePickerMode {
    common: ModeCommon,
    picker: TexturePickerUi,
}

impl TexturePickerMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::TexturePicker, session, true),
            picker: TexturePickerUi::new(),
        }
    }
}

impl EditMode for TexturePickerMode {
    fn id(&self) -> ModeId {
        ModeId::TexturePicker
    }

    fn active(&self) -> bool {
        self.common.active()
    }

    fn activate(&mut self, session: &mut EditorSession) {
        if self.common.enter(session) {
            self.picker.activate(session.brush.material_index);
        }
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        if self.common.active() {
            self.picker.deactivate();
            self.common.exit(session);
        }
    }

    fn update(&mut self, session: &mut EditorSession) -> Option<Transition> {
        update_world(session);

        if self.common.has_focus(session) {
            self.picker.update(&session.input);
        }

        if !self.picker.active() {
            if let Some(choice) = self.picker.take_chosen() {
                session.brush.material_index = choice;
                log::debug!("picker chose material {choice}");
            }
            return Some(Transition::To(ModeId::TextureEdit));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use crate::terrain::TerrainField;

    fn setup() -> (EditorSession, TexturePickerMode) {
        let mut session = EditorSession::new(TerrainField::new(16, 16, 1.0));
        session.dt = 0.1;
        let mode = TexturePickerMode::new(&mut session);
        (session, mode)
    }

    #[test]
    fn test_confirm_updates_brush_and_returns() {
        let (mut session, mut mode) = setup();
        session.brush.material_index = 1;
        mode.activate(&mut session);

        let t = mode.update(&mut session);
        assert_eq!(t, None);

        session.input.press(Action::MenuDown);
        session.input.press(Action::Select);
        let t = mode.update(&mut session);
        assert_eq!(t, Some(Transition::To(ModeId::TextureEdit)));
        assert_eq!(session.brush.material_index, 2);
    }

    #[test]
    fn test_cancel_keeps_previous_material() {
        let (mut session, mut mode) = setup();
        session.brush.material_index = 3;
        mode.activate(&mut session);

        session.input.press(Action::Cancel);
        let t = mode.update(&mut session);
        assert_eq!(t, Some(Transition::To(ModeId::TextureEdit)));
        assert_eq!(session.brush.material_index, 3);
    }
}
