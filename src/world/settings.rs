//! World parameters edited through the settings panel
//!
//! Plain data with a RON string round-trip; the external save subsystem
//! embeds the string into whatever level container it keeps.

use serde::{Deserialize, Serialize};

/// How the play-mode camera behaves in this world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    #[default]
    Free,
    Fixed,
    FixedOffset,
}

impl CameraMode {
    pub const ALL: [CameraMode; 3] = [CameraMode::Free, CameraMode::Fixed, CameraMode::FixedOffset];

    pub fn label(&self) -> &'static str {
        match self {
            CameraMode::Free => "Free",
            CameraMode::Fixed => "Fixed",
            CameraMode::FixedOffset => "Fixed Offset",
        }
    }
}

/// Error type for settings round-trips
#[derive(Debug)]
pub enum SettingsError {
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(e: ron::Error) -> Self {
        SettingsError::SerializeError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SettingsError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Number of selectable sky presets
pub const SKY_COUNT: usize = 8;

/// World-wide parameters the settings panel edits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSettings {
    /// Sky preset index, in `0..SKY_COUNT`
    pub sky: usize,
    pub wind_min: f32,
    pub wind_max: f32,
    pub camera_mode: CameraMode,
    /// Invisible walls at the world edge
    pub glass_walls: bool,
    /// Level to chain into when this one is won
    pub next_level: Option<String>,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            sky: 0,
            wind_min: 0.0,
            wind_max: 0.2,
            camera_mode: CameraMode::Free,
            glass_walls: true,
            next_level: None,
        }
    }
}

impl WorldSettings {
    pub fn to_ron_string(&self) -> Result<String, SettingsError> {
        let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    pub fn from_ron_string(s: &str) -> Result<Self, SettingsError> {
        let settings: WorldSettings = ron::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.sky >= SKY_COUNT {
            return Err(SettingsError::ValidationError(format!(
                "sky index {} out of range",
                self.sky
            )));
        }
        if !self.wind_min.is_finite() || !self.wind_max.is_finite() {
            return Err(SettingsError::ValidationError("non-finite wind".into()));
        }
        if self.wind_min > self.wind_max {
            return Err(SettingsError::ValidationError(format!(
                "wind_min {} > wind_max {}",
                self.wind_min, self.wind_max
            )));
        }
        Ok(())
    }
}
