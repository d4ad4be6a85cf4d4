//! Configuration options for brickify.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BrickifyError, Result};

/// Environment variable overriding [`Options::backend_url`].
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Environment variable naming a JSON options file.
pub const CONFIG_PATH_ENV: &str = "BRICKIFY_CONFIG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Base URL of the catalog backend.
    pub backend_url: String,

    /// Connect/read/write timeout for backend requests, in seconds.
    pub http_timeout_secs: u64,

    /// Initial viewport width in pixels.
    pub viewport_width: u32,

    /// Initial viewport height in pixels.
    pub viewport_height: u32,

    /// Near clipping plane.
    pub near_clip: f64,

    /// Far clipping plane.
    pub far_clip: f64,

    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".to_string(),
            http_timeout_secs: 30,
            viewport_width: 800,
            viewport_height: 600,
            near_clip: 0.1,
            far_clip: 10000.0,
            fov_y_degrees: 30.0,
        }
    }
}

impl Options {
    /// Reads options from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let options: Self = serde_json::from_str(&text)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from the environment.
    ///
    /// Starts from the file named by `BRICKIFY_CONFIG` when set, otherwise
    /// from defaults, then applies `BACKEND_URL`.
    pub fn from_env() -> Result<Self> {
        let mut options = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                log::info!("loading options from {}", Path::new(&path).display());
                Self::from_json_file(path)?
            }
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            options.backend_url = url;
        }

        options.validate()?;
        Ok(options)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.backend_url.trim().is_empty() {
            return Err(BrickifyError::InvalidOption {
                name: "backend_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(BrickifyError::InvalidOption {
                name: "viewport_size",
                reason: format!(
                    "must be positive, got {}x{}",
                    self.viewport_width, self.viewport_height
                ),
            });
        }
        if !(self.near_clip > 0.0 && self.near_clip < self.far_clip) {
            return Err(BrickifyError::InvalidOption {
                name: "near_clip",
                reason: format!(
                    "must satisfy 0 < near < far, got near={} far={}",
                    self.near_clip, self.far_clip
                ),
            });
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(BrickifyError::InvalidOption {
                name: "fov_y_degrees",
                reason: format!("must be in (0, 180), got {}", self.fov_y_degrees),
            });
        }
        Ok(())
    }

    /// Width over height of the initial viewport.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.viewport_width) / f64::from(self.viewport_height)
    }
}
