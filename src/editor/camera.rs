//! Edit-mode orbit camera
//!
//! Desired values move instantly with input; the realized values ease
//! toward them each tick so the camera glides instead of snapping.

use glam::Vec3;

/// Orbit rate from a full stick deflection, radians per second
pub const ORBIT_SPEED: f32 = 2.0;
/// Zoom rate while a zoom trigger is held, per second
pub const ZOOM_FACTOR: f32 = 1.1;
/// Closest the camera may get while editing
pub const MIN_EDIT_DISTANCE: f32 = 4.0;
/// Easing rate toward desired values
const EASE_RATE: f32 = 10.0;
/// Minimum clearance above the terrain
const GROUND_CLEARANCE: f32 = 1.0;

/// Orbit camera around the edit cursor
#[derive(Debug, Clone)]
pub struct EditCamera {
    pub rotation: f32,
    pub pitch: f32,
    pub distance: f32,
    pub at: Vec3,
    pub desired_rotation: f32,
    pub desired_pitch: f32,
    pub desired_distance: f32,
    pub desired_at: Vec3,
}

impl Default for EditCamera {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            pitch: 0.6,
            distance: 20.0,
            at: Vec3::ZERO,
            desired_rotation: 0.0,
            desired_pitch: 0.6,
            desired_distance: 20.0,
            desired_at: Vec3::ZERO,
        }
    }
}

impl EditCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orbit around the look-at point
    pub fn orbit(&mut self, drot: f32, dpitch: f32) {
        self.desired_rotation += drot;
        self.desired_pitch = (self.desired_pitch + dpitch).clamp(0.05, std::f32::consts::FRAC_PI_2 - 0.05);
    }

    pub fn zoom_in(&mut self, dt: f32) {
        let desired = self.desired_distance * (1.0 - ZOOM_FACTOR * dt);
        self.desired_distance = desired.max(MIN_EDIT_DISTANCE);
    }

    pub fn zoom_out(&mut self, dt: f32) {
        self.desired_distance *= 1.0 + ZOOM_FACTOR * dt;
    }

    /// Ease realized values toward the desired ones
    pub fn update(&mut self, dt: f32) {
        let t = 1.0 - (-EASE_RATE * dt).exp();
        self.rotation += (self.desired_rotation - self.rotation) * t;
        self.pitch += (self.desired_pitch - self.pitch) * t;
        self.distance += (self.desired_distance - self.distance) * t;
        self.at += (self.desired_at - self.at) * t;
    }

    /// Eye position derived from the orbit parameters
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.rotation.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.rotation.sin(),
        );
        self.at + offset * self.distance
    }

    pub fn forward(&self) -> Vec3 {
        (self.at - self.eye()).normalize_or_zero()
    }

    /// Keep the eye from sinking into the terrain
    pub fn keep_above(&mut self, ground_height: f32) {
        let eye = self.eye();
        if eye.y < ground_height + GROUND_CLEARANCE {
            // Raising the pitch lifts the eye without moving the target.
            let needed = (ground_height + GROUND_CLEARANCE - self.at.y) / self.distance;
            if needed > -1.0 && needed < 1.0 {
                let min_pitch = needed.asin();
                if self.pitch < min_pitch {
                    self.pitch = min_pitch;
                    self.desired_pitch = self.desired_pitch.max(min_pitch);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eases_toward_desired() {
        let mut camera = EditCamera::new();
        camera.desired_distance = 40.0;
        camera.update(0.1);
        assert!(camera.distance > 20.0 && camera.distance < 40.0);
        for _ in 0..200 {
            camera.update(0.1);
        }
        assert!((camera.distance - 40.0).abs() < 0.01);
    }

    #[test]
    fn test_zoom_respects_min_distance() {
        let mut camera = EditCamera::new();
        for _ in 0..1000 {
            camera.zoom_in(0.1);
        }
        assert_eq!(camera.desired_distance, MIN_EDIT_DISTANCE);
    }

    #[test]
    fn test_eye_sits_at_distance() {
        let mut camera = EditCamera::new();
        camera.at = Vec3::new(5.0, 0.0, 5.0);
        camera.distance = 10.0;
        let eye = camera.eye();
        assert!((eye.distance(camera.at) - 10.0).abs() < 1e-4);
        assert!(eye.y > 0.0);
    }
}
