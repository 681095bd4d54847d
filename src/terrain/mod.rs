//! Terrain: the shared height/material field and the edit brush

mod brush;
mod field;

pub use brush::{
    BrushSet, BrushShape, EditBrush, BRUSH_GROWTH_RATE, MATERIAL_PALETTE_SIZE, MAX_BRUSH_RADIUS,
    MIN_BRUSH_MOVE,
};
pub use field::{op, SnapshotError, TerrainField, TerrainSnapshot, HEIGHT_STEP, SMOOTH_RATE};
