//! Edit brush: shape gallery and the shared per-frame brush state

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Widest brush the editor allows. A larger radius would let a single
/// stroke touch most of the terrain budget at once.
pub const MAX_BRUSH_RADIUS: f32 = 150.0;

/// Number of paintable materials in the palette
pub const MATERIAL_PALETTE_SIZE: usize = 4;

/// Minimum horizontal travel before the brush counts as having moved
pub const MIN_BRUSH_MOVE: f32 = 0.25;

/// Radius growth rate while a sizing trigger is held, per second
pub const BRUSH_GROWTH_RATE: f32 = 1.0;

/// Footprint shape of a brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushShape {
    Round,
    Square,
    /// Round with a linear falloff toward the rim
    SoftRound,
}

impl BrushShape {
    /// Weight of a cell at offset (dx, dz) from the brush center, or
    /// `None` when the cell lies outside the footprint. Weights are in
    /// 0..=1 and scale the strength of height operations.
    pub fn weight(&self, dx: f32, dz: f32, radius: f32) -> Option<f32> {
        if radius <= 0.0 {
            return None;
        }
        match self {
            BrushShape::Round => {
                let d2 = dx * dx + dz * dz;
                (d2 <= radius * radius).then_some(1.0)
            }
            BrushShape::Square => {
                (dx.abs() <= radius && dz.abs() <= radius).then_some(1.0)
            }
            BrushShape::SoftRound => {
                let d = (dx * dx + dz * dz).sqrt();
                (d <= radius).then(|| 1.0 - d / radius)
            }
        }
    }
}

/// The fixed gallery of brush shapes, addressed by index
#[derive(Debug, Clone)]
pub struct BrushSet {
    shapes: Vec<BrushShape>,
    current: usize,
}

impl Default for BrushSet {
    fn default() -> Self {
        Self {
            shapes: vec![BrushShape::Round, BrushShape::Square, BrushShape::SoftRound],
            current: 0,
        }
    }
}

impl BrushSet {
    pub fn shape(&self, index: usize) -> BrushShape {
        self.shapes[index % self.shapes.len()]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn select(&mut self, index: usize) {
        self.current = index % self.shapes.len();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Shared per-frame brush state
///
/// Recomputed once per tick before any mode samples it. Only
/// `material_index` survives across frames and mode switches; the rest
/// is derived from the current pointer/cursor and camera.
#[derive(Debug, Clone)]
pub struct EditBrush {
    /// Index into the [`BrushSet`] gallery
    pub shape_index: usize,
    /// World position of the brush center
    pub position: Vec3,
    /// Footprint radius in world units
    pub radius: f32,
    /// Whether the brush travelled at least [`MIN_BRUSH_MOVE`] since
    /// the previous frame
    pub moved: bool,
    /// Selected paint material, always in `0..MATERIAL_PALETTE_SIZE`
    pub material_index: usize,
}

impl Default for EditBrush {
    fn default() -> Self {
        Self {
            shape_index: 0,
            position: Vec3::ZERO,
            radius: 4.0,
            moved: false,
            material_index: 0,
        }
    }
}

impl EditBrush {
    /// Move the brush to a new center, updating the `moved` flag from
    /// the horizontal travel since the previous position.
    pub fn reposition(&mut self, position: Vec3) {
        let prev = Vec2::new(self.position.x, self.position.z);
        let next = Vec2::new(position.x, position.z);
        self.moved = prev.distance_squared(next) >= MIN_BRUSH_MOVE * MIN_BRUSH_MOVE;
        self.position = position;
    }

    /// Grow or shrink the radius, clamped to `min_radius..=MAX_BRUSH_RADIUS`.
    pub fn scale_radius(&mut self, grow: bool, dt: f32, min_radius: f32) {
        let factor = if grow {
            1.0 + BRUSH_GROWTH_RATE * dt
        } else {
            1.0 - BRUSH_GROWTH_RATE * dt
        };
        self.radius = (self.radius * factor).clamp(min_radius, MAX_BRUSH_RADIUS);
    }

    /// Advance the paint material circularly over the palette.
    pub fn cycle_material(&mut self) {
        self.material_index = (self.material_index + 1) % MATERIAL_PALETTE_SIZE;
    }
}
