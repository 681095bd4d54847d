//! Terrain height field and material grid
//!
//! One height value and one material id per grid cell, mutated only
//! through brush-shaped operations. The snapshot round-trip is RON text
//! handed to the external save subsystem; this module owns no file I/O.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::brush::{BrushShape, MATERIAL_PALETTE_SIZE};

/// Brush operation codes.
///
/// One routine serves several semantic operations via an integer code
/// `base + shift`. The sculpt family sits at shift 0, the flatten
/// family (used by the tool rack) at shift 3, so a tool variant can
/// reuse the same three triggers with a different family.
pub mod op {
    /// Raise / flatten-up, depending on family
    pub const RAISE: u8 = 0;
    /// Lower / flatten-down
    pub const LOWER: u8 = 1;
    /// Smooth / flatten-both-ways
    pub const SMOOTH: u8 = 2;

    /// Distance between op-code families
    pub const SHIFT_STRIDE: u8 = 3;
    /// Delta sculpting: raise/lower by a step, smooth toward neighbours
    pub const SCULPT_SHIFT: u8 = 0;
    /// Level toward the height sampled at the brush center
    pub const FLATTEN_SHIFT: u8 = SHIFT_STRIDE;
}

/// Height change per raise/lower application at full brush weight
pub const HEIGHT_STEP: f32 = 0.5;
/// Blend factor per smooth/flatten application at full brush weight
pub const SMOOTH_RATE: f32 = 0.5;

/// Validation limits for snapshots coming back from the save subsystem
mod limits {
    pub const MAX_DIM: usize = 4096;
    pub const MAX_HEIGHT: f32 = 10_000.0;
}

/// Error type for terrain snapshot round-trips
#[derive(Debug)]
pub enum SnapshotError {
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for SnapshotError {
    fn from(e: ron::error::SpannedError) -> Self {
        SnapshotError::ParseError(e)
    }
}

impl From<ron::Error> for SnapshotError {
    fn from(e: ron::Error) -> Self {
        SnapshotError::SerializeError(e)
    }
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::ParseError(e) => write!(f, "Parse error: {}", e),
            SnapshotError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SnapshotError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Serializable form of a [`TerrainField`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainSnapshot {
    pub width: usize,
    pub depth: usize,
    pub cell_size: f32,
    pub heights: Vec<f32>,
    pub materials: Vec<u8>,
}

/// Height field (continuous) plus material grid (discrete palette)
///
/// Cells tile the XZ plane starting at the world origin; heights run
/// along +Y. A square brush footprint measures per-axis distance, so
/// `radius` is its half-side.
#[derive(Debug, Clone)]
pub struct TerrainField {
    width: usize,
    depth: usize,
    cell_size: f32,
    heights: Vec<f32>,
    materials: Vec<u8>,
}

impl TerrainField {
    pub fn new(width: usize, depth: usize, cell_size: f32) -> Self {
        assert!(width > 0 && depth > 0, "terrain must have at least one cell");
        assert!(cell_size > 0.0, "cell size must be positive");
        Self {
            width,
            depth,
            cell_size,
            heights: vec![0.0; width * depth],
            materials: vec![0; width * depth],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World-space XZ bounds of the grid
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (
            Vec2::ZERO,
            Vec2::new(
                self.width as f32 * self.cell_size,
                self.depth as f32 * self.cell_size,
            ),
        )
    }

    fn index(&self, ix: usize, iz: usize) -> usize {
        iz * self.width + ix
    }

    /// World-space center of a cell
    fn cell_center(&self, ix: usize, iz: usize) -> Vec2 {
        Vec2::new(
            (ix as f32 + 0.5) * self.cell_size,
            (iz as f32 + 0.5) * self.cell_size,
        )
    }

    pub fn height(&self, ix: usize, iz: usize) -> f32 {
        self.heights[self.index(ix, iz)]
    }

    pub fn material(&self, ix: usize, iz: usize) -> u8 {
        self.materials[self.index(ix, iz)]
    }

    /// Bilinearly interpolated height at a world XZ position.
    /// Positions outside the grid clamp to the border cells.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let fx = (x / self.cell_size - 0.5).clamp(0.0, (self.width - 1) as f32);
        let fz = (z / self.cell_size - 0.5).clamp(0.0, (self.depth - 1) as f32);
        let ix = fx.floor() as usize;
        let iz = fz.floor() as usize;
        let ix1 = (ix + 1).min(self.width - 1);
        let iz1 = (iz + 1).min(self.depth - 1);
        let tx = fx - ix as f32;
        let tz = fz - iz as f32;

        let h00 = self.height(ix, iz);
        let h10 = self.height(ix1, iz);
        let h01 = self.height(ix, iz1);
        let h11 = self.height(ix1, iz1);
        let h0 = h00 + (h10 - h00) * tx;
        let h1 = h01 + (h11 - h01) * tx;
        h0 + (h1 - h0) * tz
    }

    /// Material id under a world XZ position
    pub fn material_at(&self, x: f32, z: f32) -> u8 {
        let ix = ((x / self.cell_size).floor() as isize).clamp(0, self.width as isize - 1);
        let iz = ((z / self.cell_size).floor() as isize).clamp(0, self.depth as isize - 1);
        self.material(ix as usize, iz as usize)
    }

    /// Cell index range whose centers can fall inside the footprint
    fn footprint_range(&self, pos: Vec3, radius: f32) -> (usize, usize, usize, usize) {
        let min_x = ((pos.x - radius) / self.cell_size).floor().max(0.0) as usize;
        let min_z = ((pos.z - radius) / self.cell_size).floor().max(0.0) as usize;
        let max_x = (((pos.x + radius) / self.cell_size).ceil() as usize).min(self.width);
        let max_z = (((pos.z + radius) / self.cell_size).ceil() as usize).min(self.depth);
        (min_x, max_x, min_z, max_z)
    }

    /// Apply a height operation under the brush footprint.
    ///
    /// Only cells whose center lies within `radius` of `pos` (under the
    /// given shape) are touched. Returns whether any cell changed. An
    /// unknown op code is a programmer error.
    pub fn apply_brush(&mut self, shape: BrushShape, pos: Vec3, radius: f32, op_code: u8) -> bool {
        let (min_x, max_x, min_z, max_z) = self.footprint_range(pos, radius);
        // Smooth and flatten read heights while writing them, so work
        // from an unmodified copy.
        let before = self.heights.clone();
        let level = self.height_at(pos.x, pos.z);
        let mut changed = false;

        for iz in min_z..max_z {
            for ix in min_x..max_x {
                let center = self.cell_center(ix, iz);
                let Some(weight) = shape.weight(center.x - pos.x, center.y - pos.z, radius) else {
                    continue;
                };
                let idx = self.index(ix, iz);
                let h = before[idx];
                let new = match op_code {
                    0 => h + HEIGHT_STEP * weight,
                    1 => h - HEIGHT_STEP * weight,
                    2 => {
                        let avg = self.neighbour_average(&before, ix, iz);
                        h + (avg - h) * SMOOTH_RATE * weight
                    }
                    3 => {
                        if h < level {
                            h + (level - h) * SMOOTH_RATE * weight
                        } else {
                            h
                        }
                    }
                    4 => {
                        if h > level {
                            h + (level - h) * SMOOTH_RATE * weight
                        } else {
                            h
                        }
                    }
                    5 => h + (level - h) * SMOOTH_RATE * weight,
                    _ => panic!("unknown brush op code {op_code}"),
                };
                if new != h {
                    self.heights[idx] = new;
                    changed = true;
                }
            }
        }

        if changed {
            log::trace!(
                "apply_brush {:?} op {} at ({:.1}, {:.1}) r {:.1}",
                shape,
                op_code,
                pos.x,
                pos.z,
                radius
            );
        }
        changed
    }

    fn neighbour_average(&self, heights: &[f32], ix: usize, iz: usize) -> f32 {
        let mut sum = 0.0;
        let mut count = 0.0;
        let mut visit = |ix: isize, iz: isize| {
            if ix >= 0 && iz >= 0 && (ix as usize) < self.width && (iz as usize) < self.depth {
                sum += heights[iz as usize * self.width + ix as usize];
                count += 1.0;
            }
        };
        let (ix, iz) = (ix as isize, iz as isize);
        visit(ix - 1, iz);
        visit(ix + 1, iz);
        visit(ix, iz - 1);
        visit(ix, iz + 1);
        if count > 0.0 {
            sum / count
        } else {
            heights[self.index(ix as usize, iz as usize)]
        }
    }

    /// Paint a material id under the brush footprint.
    ///
    /// Same confinement rule as [`apply_brush`]; returns whether any
    /// cell changed. A material outside the palette is a programmer
    /// error.
    ///
    /// [`apply_brush`]: TerrainField::apply_brush
    pub fn paint_material(
        &mut self,
        material_index: usize,
        pos: Vec3,
        radius: f32,
        shape: BrushShape,
    ) -> bool {
        assert!(
            material_index < MATERIAL_PALETTE_SIZE,
            "material index {material_index} outside the palette"
        );
        let (min_x, max_x, min_z, max_z) = self.footprint_range(pos, radius);
        let mut changed = false;

        for iz in min_z..max_z {
            for ix in min_x..max_x {
                let center = self.cell_center(ix, iz);
                if shape.weight(center.x - pos.x, center.y - pos.z, radius).is_none() {
                    continue;
                }
                let idx = self.index(ix, iz);
                if self.materials[idx] != material_index as u8 {
                    self.materials[idx] = material_index as u8;
                    changed = true;
                }
            }
        }
        changed
    }

    /// Serialize to a RON snapshot string for the save subsystem
    pub fn snapshot(&self) -> Result<String, SnapshotError> {
        let snap = TerrainSnapshot {
            width: self.width,
            depth: self.depth,
            cell_size: self.cell_size,
            heights: self.heights.clone(),
            materials: self.materials.clone(),
        };
        let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(&snap, config)?)
    }

    /// Rebuild a field from a RON snapshot string
    pub fn from_snapshot(s: &str) -> Result<Self, SnapshotError> {
        let snap: TerrainSnapshot = ron::from_str(s)?;
        validate_snapshot(&snap)?;
        Ok(Self {
            width: snap.width,
            depth: snap.depth,
            cell_size: snap.cell_size,
            heights: snap.heights,
            materials: snap.materials,
        })
    }
}

fn validate_snapshot(snap: &TerrainSnapshot) -> Result<(), SnapshotError> {
    if snap.width == 0 || snap.depth == 0 {
        return Err(SnapshotError::ValidationError("empty grid".into()));
    }
    if snap.width > limits::MAX_DIM || snap.depth > limits::MAX_DIM {
        return Err(SnapshotError::ValidationError(format!(
            "grid {}x{} exceeds {}",
            snap.width,
            snap.depth,
            limits::MAX_DIM
        )));
    }
    if !snap.cell_size.is_finite() || snap.cell_size <= 0.0 {
        return Err(SnapshotError::ValidationError(format!(
            "invalid cell size {}",
            snap.cell_size
        )));
    }
    let cells = snap.width * snap.depth;
    if snap.heights.len() != cells || snap.materials.len() != cells {
        return Err(SnapshotError::ValidationError(format!(
            "expected {} cells, got {} heights / {} materials",
            cells,
            snap.heights.len(),
            snap.materials.len()
        )));
    }
    for (i, h) in snap.heights.iter().enumerate() {
        if !h.is_finite() || h.abs() > limits::MAX_HEIGHT {
            return Err(SnapshotError::ValidationError(format!(
                "invalid height[{}] = {}",
                i, h
            )));
        }
    }
    for (i, m) in snap.materials.iter().enumerate() {
        if *m as usize >= MATERIAL_PALETTE_SIZE {
            return Err(SnapshotError::ValidationError(format!(
                "invalid material[{}] = {}",
                i, m
            )));
        }
    }
    Ok(())
}
