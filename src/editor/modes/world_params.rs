//! World-parameters mode
//!
//! Wraps the settings panel and turns its exit flags into a mode
//! transition once the panel reports itself inactive. When several
//! flags are set at once the camera placement wins, then the next-level
//! pick, then a still-open programming tile; plain dismissal returns to
//! the tool menu.

use crate::ui::{ExitFlags, WorldParamsPanel};

use super::super::session::EditorSession;
use super::{update_world, EditMode, ModeCommon, ModeId, Transition};

pub struct WorldParamsMode {
    common: ModeCommon,
    panel: WorldParamsPanel,
}

impl WorldParamsMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::WorldParameters, session, true),
            panel: WorldParamsPanel::new(),
        }
    }
}

/// Exit precedence over the panel's flags
fn resolve_exit(flags: ExitFlags) -> Transition {
    if flags.camera_set_mode {
        Transition::ToObjectEdit
    } else if flags.next_level_mode {
        Transition::To(ModeId::SelectNextLevel)
    } else if flags.editing_programming_tile {
        Transition::ToObjectEdit
    } else {
        Transition::To(ModeId::ToolMenu)
    }
}

impl EditMode for WorldParamsMode {
    fn id(&self) -> ModeId {
        ModeId::WorldParameters
    }

    fn active(&self) -> bool {
        self.common.active()
    }

    fn activate(&mut self, session: &mut EditorSession) {
        if self.common.enter(session) {
            self.panel.activate();
        }
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        if self.common.active() {
            self.panel.deactivate();
            self.common.exit(session);
        }
    }

    fn update(&mut self, session: &mut EditorSession) -> Option<Transition> {
        update_world(session);

        if self.common.has_focus(session) {
            self.panel
                .update(&session.input, &mut session.settings, &mut session.dirty);
        }

        if !self.panel.active() {
            return Some(resolve_exit(self.panel.take_exit_flags()));
        }
        None
    }
}
