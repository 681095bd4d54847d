//! Per-tick input snapshot
//!
//! The host polls whatever devices it supports and distills the result
//! into an `InputSnapshot` before each controller tick. The snapshot is
//! immutable for the duration of the tick, so every mode and sub-editor
//! sees the same edge and held state no matter when it runs.

use std::collections::HashSet;

use glam::Vec2;

use super::Action;

/// Which device class most recently produced input.
///
/// Object editing is split into a mouse flavor and a touch flavor; the
/// controller routes to whichever matches this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Pad,
    Mouse,
    Touch,
}

/// Snapshot of device input for one tick
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Actions that transitioned to pressed this tick (edge)
    pressed: HashSet<Action>,
    /// Actions currently held down
    held: HashSet<Action>,
    /// Left stick (cursor movement), each axis in -1..=1
    pub left_stick: Vec2,
    /// Right stick (camera orbit), each axis in -1..=1
    pub right_stick: Vec2,
    /// Pointer position in screen coordinates, if a pointer is present
    pub pointer: Option<Vec2>,
    /// Pointer delta since last tick
    pub pointer_delta: Vec2,
    /// Primary pointer button/touch went down this tick
    pub primary_pressed: bool,
    /// Primary pointer button/touch is down
    pub primary_held: bool,
    /// Primary pointer button/touch was released this tick
    pub primary_released: bool,
    /// Number of active touches
    pub touch_count: u32,
    /// Age in seconds of the youngest active touch
    pub touch_age: f32,
    /// Device class that most recently produced input
    pub last_device: DeviceClass,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `action` transitioned to pressed this tick
    pub fn was_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// True if `action` is currently held
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action) || self.pressed.contains(&action)
    }

    /// Record a fresh press (also counts as held for this tick)
    pub fn press(&mut self, action: Action) {
        self.pressed.insert(action);
        self.held.insert(action);
    }

    /// Record an action still held from a previous tick
    pub fn hold(&mut self, action: Action) {
        self.held.insert(action);
    }

    /// Record an action released before this tick
    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
        self.held.remove(&action);
    }

    pub fn set_pointer(&mut self, pos: Vec2, device: DeviceClass) {
        if let Some(prev) = self.pointer {
            self.pointer_delta = pos - prev;
        }
        self.pointer = Some(pos);
        self.last_device = device;
    }

    /// Drop edge state between ticks, keeping held/pointer state
    pub fn clear_frame(&mut self) {
        self.pressed.clear();
        self.primary_pressed = false;
        self.primary_released = false;
        self.pointer_delta = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_also_held() {
        let mut input = InputSnapshot::new();
        input.press(Action::Select);
        assert!(input.was_pressed(Action::Select));
        assert!(input.is_held(Action::Select));
    }

    #[test]
    fn test_clear_frame_keeps_held() {
        let mut input = InputSnapshot::new();
        input.press(Action::RaiseTerrain);
        input.clear_frame();
        assert!(!input.was_pressed(Action::RaiseTerrain));
        assert!(input.is_held(Action::RaiseTerrain));

        input.release(Action::RaiseTerrain);
        assert!(!input.is_held(Action::RaiseTerrain));
    }

    #[test]
    fn test_pointer_delta() {
        let mut input = InputSnapshot::new();
        input.set_pointer(Vec2::new(10.0, 10.0), DeviceClass::Mouse);
        input.set_pointer(Vec2::new(13.0, 6.0), DeviceClass::Mouse);
        assert_eq!(input.pointer_delta, Vec2::new(3.0, -4.0));
        assert_eq!(input.last_device, DeviceClass::Mouse);
    }
}
