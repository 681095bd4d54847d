//! Mode controller: owns the session, the mode set, and the transitions
//!
//! One instance drives an editing session. Each tick installs the
//! host's input snapshot, applies any pending mode change (the old mode
//! deactivates completely before the new one activates, so activation
//! can assume a clean focus stack), then dispatches the active mode's
//! update and stashes whatever transition it requests for the next
//! tick.

use crate::input::{DeviceClass, InputSnapshot};
use crate::terrain::TerrainField;
use crate::world::LevelInfo;

use super::modes::{
    EditMode, HeightMapMode, ModeId, MouseEditMode, SelectNextLevelMode, TextureEditMode,
    TexturePickerMode, ToolBoxMode, ToolMenuMode, TouchEditMode, Transition, WorldParamsMode,
};
use super::session::EditorSession;

/// The fixed set of mode instances, created once at session start
struct ModeSet {
    height_map: HeightMapMode,
    texture: TextureEditMode,
    world_params: WorldParamsMode,
    tool_menu: ToolMenuMode,
    texture_picker: TexturePickerMode,
    tool_box: ToolBoxMode,
    mouse_edit: MouseEditMode,
    touch_edit: TouchEditMode,
    select_next_level: SelectNextLevelMode,
}

impl ModeSet {
    fn new(session: &mut EditorSession) -> Self {
        Self {
            height_map: HeightMapMode::new(session),
            texture: TextureEditMode::new(session),
            world_params: WorldParamsMode::new(session),
            tool_menu: ToolMenuMode::new(session),
            texture_picker: TexturePickerMode::new(session),
            tool_box: ToolBoxMode::new(session),
            mouse_edit: MouseEditMode::new(session),
            touch_edit: TouchEditMode::new(session),
            select_next_level: SelectNextLevelMode::new(session),
        }
    }

    fn get_mut(&mut self, id: ModeId) -> &mut dyn EditMode {
        match id {
            ModeId::HeightMapEdit => &mut self.height_map,
            ModeId::TextureEdit => &mut self.texture,
            ModeId::WorldParameters => &mut self.world_params,
            ModeId::ToolMenu => &mut self.tool_menu,
            ModeId::TexturePicker => &mut self.texture_picker,
            ModeId::ToolBox => &mut self.tool_box,
            ModeId::MouseObjectEdit => &mut self.mouse_edit,
            ModeId::TouchObjectEdit => &mut self.touch_edit,
            ModeId::SelectNextLevel => &mut self.select_next_level,
        }
    }
}

/// The in-editor mode controller
pub struct ModeController {
    session: EditorSession,
    modes: ModeSet,
    current: ModeId,
    pending: Option<ModeId>,
    mini_hub_requested: bool,
}

impl ModeController {
    /// Build a controller over the given terrain. The tool menu is the
    /// first mode up, activated on the first tick.
    pub fn new(terrain: TerrainField) -> Self {
        let mut session = EditorSession::new(terrain);
        let modes = ModeSet::new(&mut session);
        Self {
            session,
            modes,
            current: ModeId::ToolMenu,
            pending: Some(ModeId::ToolMenu),
            mini_hub_requested: false,
        }
    }

    pub fn current_mode(&self) -> ModeId {
        self.current
    }

    /// Request a mode for the next tick
    pub fn set_mode(&mut self, id: ModeId) {
        if id != self.current {
            self.pending = Some(id);
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    /// Levels the next-level browser offers
    pub fn set_level_catalog(&mut self, levels: Vec<LevelInfo>) {
        self.modes.select_next_level.set_levels(levels);
    }

    pub fn is_terrain_dirty(&self) -> bool {
        self.session.dirty.terrain_dirty()
    }

    pub fn is_level_dirty(&self) -> bool {
        self.session.dirty.level
    }

    /// Top help-overlay name for the presentation layer
    pub fn overlay(&self) -> Option<&'static str> {
        self.session.overlays.peek()
    }

    /// True once per request to leave the editor for the hub
    pub fn take_mini_hub_request(&mut self) -> bool {
        std::mem::take(&mut self.mini_hub_requested)
    }

    /// Run one frame
    pub fn tick(&mut self, input: InputSnapshot, dt: f32) {
        self.session.input = input;
        self.session.dt = dt;

        if let Some(next) = self.pending.take() {
            if next != self.current || !self.modes.get_mut(self.current).active() {
                log::debug!("mode switch: {} -> {}", self.current.name(), next.name());
                self.modes.get_mut(self.current).deactivate(&mut self.session);
                self.modes.get_mut(next).activate(&mut self.session);
                self.current = next;
            }
        }

        let depth_before = self.session.focus.depth();
        let transition = self.modes.get_mut(self.current).update(&mut self.session);
        debug_assert_eq!(
            self.session.focus.depth(),
            depth_before,
            "focus stack unbalanced across {} update",
            self.current.name()
        );

        if let Some(t) = transition {
            self.request(t);
        }
    }

    fn request(&mut self, transition: Transition) {
        match transition {
            Transition::To(id) => {
                if id != self.current {
                    self.pending = Some(id);
                }
            }
            Transition::ToObjectEdit => {
                let id = match self.session.input.last_device {
                    DeviceClass::Touch => ModeId::TouchObjectEdit,
                    DeviceClass::Mouse | DeviceClass::Pad => ModeId::MouseObjectEdit,
                };
                if id != self.current {
                    self.pending = Some(id);
                }
            }
            Transition::ToMiniHub => {
                self.mini_hub_requested = true;
            }
        }
    }
}
