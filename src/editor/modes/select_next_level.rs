//! Next-level selection mode
//!
//! Reached only from the world-parameters panel and returns there
//! unconditionally when the browser closes. A confirmed pick lands in
//! the world settings as the chain target.

use crate::ui::NextLevelBrowser;
use crate::world::LevelInfo;

use super::super::session::EditorSession;
use super::{update_world, EditMode, ModeCommon, ModeId, Transition};

pub struct SelectNextLevelMode {
    common: ModeCommon,
    browser: NextLevelBrowser,
}

impl SelectNextLevelMode {
    pub fn new(session: &mut EditorSession) -> Self {
        Self {
            common: ModeCommon::new(ModeId::SelectNextLevel, session, true),
            browser: NextLevelBrowser::new(Vec::new()),
        }
    }

    /// Install the browsable catalog; the host supplies the entries
    pub fn set_levels(&mut self, levels: Vec<LevelInfo>) {
        self.browser.set_levels(levels);
    }
}

impl EditMode for SelectNextLevelMode {
    fn id(&self) -> ModeId {
        ModeId::SelectNextLevel
    }

    fn active(&self) -> bool {
        self.common.active()
    }

    fn activate(&mut self, session: &mut EditorSession) {
        if self.common.enter(session) {
            self.browser.activate();
        }
    }

    fn deactivate(&mut self, session: &mut EditorSession) {
        if self.common.active() {
            self.browser.deactivate();
            self.common.exit(session);
        }
    }

    fn update(&mut self, session: &mut EditorSession) -> Option<Transition> {
        update_world(session);

        if self.common.has_focus(session) {
            self.browser.update(&session.input);
        }

        if !self.browser.active() {
            if let Some(name) = self.browser.take_chosen() {
                if session.settings.next_level.as_deref() != Some(name.as_str()) {
                    session.settings.next_level = Some(name);
                    session.dirty.mark_level();
                }
            }
            return Some(Transition::To(ModeId::WorldParameters));
        }
        None
    }
}
