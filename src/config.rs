use crate::error::AppError;
use media_library::{CompositeLayout, ExportFormat, MAX_OUTPUT_EDGE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "stickersmash.toml";

/// Largest frame edge accepted from the config, in view units
pub const MAX_FRAME_SIZE: u32 = 4096;

/// User-editable settings, stored as TOML in the app data directory
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Photo frame size in view units
    pub frame_width: u32,
    pub frame_height: u32,
    /// Sticker edge length before any double-tap
    pub sticker_size: u32,
    /// Pixels per view unit in the exported image
    pub export_scale: f32,
    pub export_format: ExportFormat,
    pub jpeg_quality: u8,
    /// Desktop only: overrides the pictures directory
    pub export_dir: Option<PathBuf>,
    /// e.g. "en-US" or "de-DE"
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_width: 320,
            frame_height: 440,
            sticker_size: 40,
            export_scale: 2.0,
            export_format: ExportFormat::Png,
            jpeg_quality: 90,
            export_dir: None,
            locale: "en-US".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(AppError::Config("frame size must be positive".to_string()));
        }
        if self.frame_width > MAX_FRAME_SIZE || self.frame_height > MAX_FRAME_SIZE {
            return Err(AppError::Config(format!(
                "frame size must not exceed {}x{}",
                MAX_FRAME_SIZE, MAX_FRAME_SIZE
            )));
        }
        if self.sticker_size == 0 || self.sticker_size > self.frame_width.min(self.frame_height) {
            return Err(AppError::Config(format!(
                "sticker_size must be between 1 and {}",
                self.frame_width.min(self.frame_height)
            )));
        }
        if !self.export_scale.is_finite() || !(0.25..=8.0).contains(&self.export_scale) {
            return Err(AppError::Config(format!(
                "export_scale must be between 0.25 and 8, got {}",
                self.export_scale
            )));
        }
        let (width, height) = self.composite_layout().output_size();
        if width.max(height) > MAX_OUTPUT_EDGE {
            return Err(AppError::Config(format!(
                "export of {}x{} exceeds {} pixels per edge",
                width, height, MAX_OUTPUT_EDGE
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(AppError::Config(
                "jpeg_quality must be between 1 and 100".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a TOML string
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads the app config, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let path = crate::filesystem::config_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn composite_layout(&self) -> CompositeLayout {
        CompositeLayout {
            frame_width: self.frame_width,
            frame_height: self.frame_height,
            scale: self.export_scale,
            format: self.export_format,
            jpeg_quality: self.jpeg_quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sticker_size, 40);
        assert_eq!(config.composite_layout().output_size(), (640, 880));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml("export_format = \"jpeg\"\nlocale = \"de-DE\"\n").unwrap();
        assert_eq!(config.export_format, ExportFormat::Jpeg);
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.frame_width, 320);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AppConfig::from_toml("export_scale = 0.0"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_toml("sticker_size = 1000"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_toml("jpeg_quality = 0"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_toml("frame_width = \"wide\""),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "sticker_size = 64\nexport_dir = \"/tmp/stickers\"\n",
        )
        .unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.sticker_size, 64);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/stickers")));
        assert_eq!(config.frame_width, 320);
    }

    #[test]
    fn test_oversized_frame_rejected() {
        assert!(matches!(
            AppConfig::from_toml("frame_width = 100000\nexport_scale = 8.0"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_toml("frame_height = 4097"),
            Err(AppError::Config(_))
        ));
        // Within the frame cap but too large once scaled
        assert!(matches!(
            AppConfig::from_toml("frame_width = 4096\nframe_height = 4096\nexport_scale = 8.0"),
            Err(AppError::Config(_))
        ));
        let edge = AppConfig::from_toml("frame_width = 4096\nframe_height = 4096\nexport_scale = 2.0").unwrap();
        assert_eq!(edge.composite_layout().output_size(), (8192, 8192));
    }
}
