use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bindings::WindowRequest;
use crate::cli::Cli;
use crate::error::Result;

/// Window settings read from a JSON file
///
/// Every field is optional; a missing size selects 80% of the primary display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub icon: Option<PathBuf>,
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "editor-window".to_string(),
            x: None,
            y: None,
            width: None,
            height: None,
            icon: None,
            log_level: "info".to_string(),
        }
    }
}

impl WindowConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read the file named by `--config` (if any) and apply CLI overrides
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(cli))
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(title) = &cli.title {
            self.title = title.clone();
        }
        self.x = cli.x.or(self.x);
        self.y = cli.y.or(self.y);
        self.width = cli.width.or(self.width);
        self.height = cli.height.or(self.height);
        if cli.icon.is_some() {
            self.icon = cli.icon.clone();
        }
        self
    }

    pub fn window_request(&self) -> WindowRequest {
        WindowRequest {
            title: self.title.clone(),
            x: self.x,
            y: self.y,
            width: self.width.unwrap_or(0.0),
            height: self.height.unwrap_or(0.0),
        }
    }
}
