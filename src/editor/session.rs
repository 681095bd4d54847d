//! Shared per-session editor state
//!
//! One `EditorSession` exists per editing session. The controller owns
//! it and lends it to the active mode for each update, so there are no
//! hidden globals: everything a mode touches is right here.

use glam::{Vec2, Vec3};

use crate::input::InputSnapshot;
use crate::terrain::{BrushSet, EditBrush, TerrainField};
use crate::world::{DirtyFlags, WorldSettings, WorldSim};

use super::camera::EditCamera;
use super::focus::{FocusStack, FocusToken};
use super::hit_test::{screen_to_ray, HitInfo, Ray};
use super::overlay::OverlayStack;

/// Shared state lent to the active mode each tick
#[derive(Debug)]
pub struct EditorSession {
    pub focus: FocusStack,
    pub overlays: OverlayStack,
    pub camera: EditCamera,
    /// 3D cursor the pad steers; the camera looks at it
    pub cursor: Vec3,
    pub brushes: BrushSet,
    pub brush: EditBrush,
    pub terrain: TerrainField,
    pub world: WorldSim,
    pub settings: WorldSettings,
    pub dirty: DirtyFlags,
    /// This tick's input, installed by the controller before dispatch
    pub input: InputSnapshot,
    /// This tick's pointer hit test, owned by the object-edit modes
    pub hit: HitInfo,
    /// Viewport size in pixels, for pointer rays
    pub viewport: Vec2,
    /// Seconds since the previous tick
    pub dt: f32,
}

impl EditorSession {
    pub fn new(terrain: TerrainField) -> Self {
        Self {
            focus: FocusStack::new(),
            overlays: OverlayStack::new(),
            camera: EditCamera::new(),
            cursor: Vec3::ZERO,
            brushes: BrushSet::default(),
            brush: EditBrush::default(),
            terrain,
            world: WorldSim::new(),
            settings: WorldSettings::default(),
            dirty: DirtyFlags::default(),
            input: InputSnapshot::new(),
            hit: HitInfo::new(),
            viewport: Vec2::new(1280.0, 720.0),
            dt: 0.0,
        }
    }

    /// Run `f` with `token` holding focus, popping on every exit path.
    ///
    /// This is the transient steal pattern: a mode grabs camera-only
    /// input for part of its update while a nested sub-component keeps
    /// the durable claim underneath.
    pub fn with_focus<R>(&mut self, token: FocusToken, f: impl FnOnce(&mut Self) -> R) -> R {
        self.focus.push(token);
        let result = f(self);
        self.focus.pop(token);
        result
    }

    /// World ray through the current pointer, if one is present
    pub fn pointer_ray(&self) -> Option<Ray> {
        let pointer = self.input.pointer?;
        Some(screen_to_ray(pointer, self.viewport, &self.camera))
    }
}
