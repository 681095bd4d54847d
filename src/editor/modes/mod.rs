//! Edit modes and their shared machinery
//!
//! One mode instance exists per logical editing context, created once
//! at session start; `active` toggles as the controller switches
//! between them. Shared boilerplate lives in [`ModeCommon`] and the
//! free common-update functions, invoked explicitly by each mode in its
//! own documented order rather than inherited implicitly.

mod height_map;
mod mouse_edit;
mod object_rig;
mod select_next_level;
mod texture;
mod texture_picker;
mod tool_box;
mod tool_menu;
mod touch_edit;
mod world_params;

pub use height_map::HeightMapMode;
pub use mouse_edit::MouseEditMode;
pub use select_next_level::SelectNextLevelMode;
pub use texture::TextureEditMode;
pub use texture_picker::TexturePickerMode;
pub use tool_box::ToolBoxMode;
pub use tool_menu::ToolMenuMode;
pub use touch_edit::TouchEditMode;
pub use world_params::WorldParamsMode;

use glam::Vec2;

use crate::input::{Action, DeviceClass};
use crate::terrain::MAX_BRUSH_RADIUS;

use super::camera::ORBIT_SPEED;
use super::focus::FocusToken;
use super::hit_test::ground_hit;
use super::session::EditorSession;

/// Cursor travel from a full stick deflection, meters per second
const CURSOR_SPEED: f32 = 20.0;

/// The mutually exclusive editing contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeId {
    HeightMapEdit,
    TextureEdit,
    WorldParameters,
    ToolMenu,
    TexturePicker,
    ToolBox,
    MouseObjectEdit,
    TouchObjectEdit,
    SelectNextLevel,
}

impl ModeId {
    pub const ALL: [ModeId; 9] = [
        ModeId::HeightMapEdit,
        ModeId::TextureEdit,
        ModeId::WorldParameters,
        ModeId::ToolMenu,
        ModeId::TexturePicker,
        ModeId::ToolBox,
        ModeId::MouseObjectEdit,
        ModeId::TouchObjectEdit,
        ModeId::SelectNextLevel,
    ];

    /// Overlay/help key and focus-token name for the mode
    pub fn name(&self) -> &'static str {
        match self {
            ModeId::HeightMapEdit => "HeightMapEdit",
            ModeId::TextureEdit => "TextureEdit",
            ModeId::WorldParameters => "WorldParameters",
            ModeId::ToolMenu => "ToolMenu",
            ModeId::TexturePicker => "TexturePicker",
            ModeId::ToolBox => "ToolBox",
            ModeId::MouseObjectEdit => "MouseObjectEdit",
            ModeId::TouchObjectEdit => "TouchObjectEdit",
            ModeId::SelectNextLevel => "SelectNextLevel",
        }
    }
}

/// A mode's request to leave, applied by the controller next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    To(ModeId),
    /// Object editing; resolves to the mouse or touch flavor by the
    /// last device that produced input
    ToObjectEdit,
    /// Leave the editor for the hub; surfaced to the host
    ToMiniHub,
}

/// Lifecycle and per-frame contract every mode implements
pub trait EditMode {
    fn id(&self) -> ModeId;

    fn active(&self) -> bool;

    /// Idempotent; a second activation in a row is a no-op
    fn activate(&mut self, session: &mut EditorSession);

    /// Idempotent; must release everything `activate` claimed
    fn deactivate(&mut self, session: &mut EditorSession);

    /// One frame of work. Exclusive input only while the mode holds the
    /// top of the focus stack; the always-on common updates run either
    /// way.
    fn update(&mut self, session: &mut EditorSession) -> Option<Transition>;
}

/// Shared activation boilerplate each mode embeds
///
/// `enter` pushes the mode's help overlay, claims focus when the mode
/// takes exclusive input, and pauses the world; `exit` releases in
/// reverse order. Both carry the idempotent guard and report whether
/// they did anything, so mode-specific setup/cleanup runs at most once
/// per activation.
#[derive(Debug)]
pub struct ModeCommon {
    id: ModeId,
    token: FocusToken,
    claims_focus: bool,
    active: bool,
}

impl ModeCommon {
    pub fn new(id: ModeId, session: &mut EditorSession, claims_focus: bool) -> Self {
        Self {
            id,
            token: session.focus.register(id.name()),
            claims_focus,
            active: false,
        }
    }

    pub fn token(&self) -> FocusToken {
        self.token
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Whether this mode currently owns exclusive input
    pub fn has_focus(&self, session: &EditorSession) -> bool {
        session.focus.is_top(self.token)
    }

    pub fn enter(&mut self, session: &mut EditorSession) -> bool {
        if self.active {
            return false;
        }
        log::debug!("mode activated: {}", self.id.name());
        session.overlays.push(self.id.name());
        if self.claims_focus {
            session.focus.push(self.token);
        }
        session.world.pause_all();
        self.active = true;
        true
    }

    pub fn exit(&mut self, session: &mut EditorSession) -> bool {
        if !self.active {
            return false;
        }
        log::debug!("mode deactivated: {}", self.id.name());
        if self.claims_focus {
            session.focus.pop(self.token);
        }
        session.overlays.pop();
        self.active = false;
        true
    }
}

/// Options for the shared camera update
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraOptions {
    /// Lock the zoom; used by modes whose sub-component cycles on the
    /// shoulder triggers
    pub prevent_zoom: bool,
}

/// Common camera controls for edit modes.
///
/// Exclusive input (orbit, zoom, cursor steering, the tool-menu and
/// mini-hub switches) is interpreted only while `token` is on top of
/// the focus stack; easing and the ground clamp run regardless so the
/// camera stays alive under overlays.
pub fn update_camera(
    session: &mut EditorSession,
    token: FocusToken,
    options: CameraOptions,
) -> Option<Transition> {
    let dt = session.dt;

    if session.focus.is_top(token) {
        if session.input.was_pressed(Action::ToolMenu) {
            return Some(Transition::To(ModeId::ToolMenu));
        }
        if session.input.was_pressed(Action::MiniHub) {
            return Some(Transition::ToMiniHub);
        }

        let stick = session.input.right_stick;
        session
            .camera
            .orbit(stick.x * ORBIT_SPEED * dt, -stick.y * ORBIT_SPEED * dt);

        if !options.prevent_zoom {
            if session.input.is_held(Action::ZoomIn) {
                session.camera.zoom_in(dt);
            }
            if session.input.is_held(Action::ZoomOut) {
                session.camera.zoom_out(dt);
            }
        }

        // Left stick steers the 3D cursor relative to the view heading;
        // speed grows with camera distance.
        let stick = session.input.left_stick;
        if stick != Vec2::ZERO {
            let speed_factor = ((session.camera.distance - 10.0) / 50.0).clamp(1.0, 3.0);
            let rotation = session.camera.rotation;
            let forward = Vec2::new(-rotation.cos(), -rotation.sin());
            let right = Vec2::new(forward.y, -forward.x);

            let mut position = Vec2::new(session.cursor.x, session.cursor.z);
            position += forward * stick.y * CURSOR_SPEED * dt * speed_factor;
            position += right * stick.x * CURSOR_SPEED * dt * speed_factor;

            // Keep the cursor within brush reach of the terrain.
            let (min, max) = session.terrain.bounds();
            position.x = position.x.clamp(min.x - MAX_BRUSH_RADIUS, max.x + MAX_BRUSH_RADIUS);
            position.y = position.y.clamp(min.y - MAX_BRUSH_RADIUS, max.y + MAX_BRUSH_RADIUS);

            session.cursor.x = position.x;
            session.cursor.z = position.y;
        }
        session.cursor.y = session.terrain.height_at(session.cursor.x, session.cursor.z);
    }

    session.camera.desired_at = session.cursor;
    session.camera.update(dt);
    let eye = session.camera.eye();
    let ground = session.terrain.height_at(eye.x, eye.z);
    session.camera.keep_above(ground);

    None
}

/// Common update for the rest of the world
pub fn update_world(session: &mut EditorSession) {
    let dt = session.dt;
    session.world.update(dt);
}

/// Recompute the shared edit brush from the current pointer/cursor.
///
/// Pointer devices aim the brush at the ground under the pointer; the
/// pad leaves it on the 3D cursor. Runs before a mode samples the brush
/// in that mode's documented ordering.
pub fn update_edit_brush(session: &mut EditorSession) {
    let dt = session.dt;
    session.brush.shape_index = session.brushes.current_index();

    let target = match session.input.last_device {
        DeviceClass::Mouse | DeviceClass::Touch => session
            .pointer_ray()
            .and_then(|ray| ground_hit(ray, &session.terrain))
            .unwrap_or(session.cursor),
        DeviceClass::Pad => session.cursor,
    };
    session.brush.reposition(target);

    let min_radius = session.terrain.cell_size();
    if session.input.is_held(Action::BrushLarger) {
        session.brush.scale_radius(true, dt, min_radius);
    }
    if session.input.is_held(Action::BrushSmaller) {
        session.brush.scale_radius(false, dt, min_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainField;

    fn session() -> EditorSession {
        EditorSession::new(TerrainField::new(32, 32, 1.0))
    }

    #[test]
    fn test_mode_common_enter_exit_idempotent() {
        let mut session = session();
        let mut common = ModeCommon::new(ModeId::HeightMapEdit, &mut session, true);

        assert!(common.enter(&mut session));
        assert!(!common.enter(&mut session));
        assert!(common.active());
        assert_eq!(session.overlays.peek(), Some("HeightMapEdit"));
        assert_eq!(session.focus.depth(), 1);
        assert!(session.world.paused());

        assert!(common.exit(&mut session));
        assert!(!common.exit(&mut session));
        assert!(!common.active());
        assert_eq!(session.overlays.peek(), None);
        assert_eq!(session.focus.depth(), 0);
    }

    #[test]
    fn test_non_focus_claiming_mode_leaves_stack_alone() {
        let mut session = session();
        let mut common = ModeCommon::new(ModeId::SelectNextLevel, &mut session, false);
        common.enter(&mut session);
        assert_eq!(session.focus.depth(), 0);
        common.exit(&mut session);
    }

    #[test]
    fn test_camera_input_requires_focus() {
        let mut session = session();
        session.dt = 0.1;
        let token = session.focus.register("mode");
        let other = session.focus.register("overlay");

        session.input.press(Action::ToolMenu);

        // Someone else holds focus: the switch is not interpreted.
        session.focus.push(other);
        let t = update_camera(&mut session, token, CameraOptions::default());
        assert_eq!(t, None);
        session.focus.pop(other);

        session.focus.push(token);
        let t = update_camera(&mut session, token, CameraOptions::default());
        assert_eq!(t, Some(Transition::To(ModeId::ToolMenu)));
        session.focus.pop(token);
    }

    #[test]
    fn test_prevent_zoom_locks_distance() {
        let mut session = session();
        session.dt = 0.1;
        let token = session.focus.register("mode");
        session.focus.push(token);
        session.input.hold(Action::ZoomIn);

        let before = session.camera.desired_distance;
        update_camera(&mut session, token, CameraOptions { prevent_zoom: true });
        assert_eq!(session.camera.desired_distance, before);

        update_camera(&mut session, token, CameraOptions::default());
        assert!(session.camera.desired_distance < before);
        session.focus.pop(token);
    }

    #[test]
    fn test_edit_brush_follows_pad_cursor() {
        let mut session = session();
        session.dt = 0.1;
        session.cursor = glam::Vec3::new(12.0, 0.0, 7.0);
        update_edit_brush(&mut session);
        assert_eq!(session.brush.position.x, 12.0);
        assert_eq!(session.brush.position.z, 7.0);
        assert!(session.brush.moved);

        // A second update with no travel clears the moved flag.
        update_edit_brush(&mut session);
        assert!(!session.brush.moved);
    }
}
