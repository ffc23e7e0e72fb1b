//! Application configuration
//!
//! Layered: built-in defaults, then the config file, then `FACE_GUIDE__*`
//! environment variables (e.g. `FACE_GUIDE__LINK__DEVICE=/dev/rfcomm1`).

use anyhow::Context;
use command_link::LinkConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use zone_geometry::{PreviewSize, ScreenSize, ZoneConfig};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "face-guide.toml";

/// Overlay (display) size in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Overlay the face positions are mapped onto
    pub overlay: OverlayConfig,

    /// Camera preview size the detector reports boxes in
    pub preview: PreviewSize,

    /// Flip the x axis (front-facing camera)
    pub mirror: bool,

    /// Ring sizes
    pub zones: ZoneConfig,

    /// Serial link to the stand
    pub link: LinkConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            overlay: OverlayConfig::default(),
            preview: PreviewSize::default(),
            mirror: true,
            zones: ZoneConfig::default(),
            link: LinkConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration. An explicit `path` must exist; the default
    /// file is optional.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("FACE_GUIDE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let app: AppConfig = config
            .try_deserialize()
            .context("Invalid configuration")?;
        app.validate()?;
        Ok(app)
    }

    /// Check dimensions and ring sizes
    pub fn validate(&self) -> anyhow::Result<()> {
        self.overlay_size()?;
        PreviewSize::new(self.preview.width, self.preview.height)?;
        self.zones.validate()?;
        Ok(())
    }

    pub fn overlay_size(&self) -> anyhow::Result<ScreenSize> {
        Ok(ScreenSize::new(self.overlay.width, self.overlay.height)?)
    }
}
