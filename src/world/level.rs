//! Level metadata and unsaved-change tracking

use serde::{Deserialize, Serialize};

/// Metadata entry for a browsable level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub name: String,
    pub creator: String,
    pub description: String,
}

impl LevelInfo {
    pub fn new(
        name: impl Into<String>,
        creator: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            creator: creator.into(),
            description: description.into(),
        }
    }
}

/// Unsaved-change flags consumed by the external save subsystem
///
/// Brush operations set the matching terrain flag plus `level`; object
/// and settings edits set `level` alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    /// The height map changed since the last save
    pub height_map: bool,
    /// The material grid changed since the last save
    pub materials: bool,
    /// Anything in the level changed since the last save
    pub level: bool,
}

impl DirtyFlags {
    pub fn terrain_dirty(&self) -> bool {
        self.height_map || self.materials
    }

    /// Reset after a save
    pub fn clear(&mut self) {
        *self = DirtyFlags::default();
    }

    pub(crate) fn mark_height_map(&mut self) {
        self.height_map = true;
        self.level = true;
    }

    pub(crate) fn mark_materials(&mut self) {
        self.materials = true;
        self.level = true;
    }

    pub(crate) fn mark_level(&mut self) {
        self.level = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_dirty_union() {
        let mut flags = DirtyFlags::default();
        assert!(!flags.terrain_dirty());

        flags.mark_materials();
        assert!(flags.terrain_dirty());
        assert!(flags.level);

        flags.clear();
        assert!(!flags.terrain_dirty());
        assert!(!flags.level);
    }
}
