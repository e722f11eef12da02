//! Configuration options for the overlay.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Nominal frame delta used for the very first overlay frame.
pub const NOMINAL_FRAME_DELTA: f32 = 1.0 / 60.0;

/// Startup configuration for an overlay session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    /// Forward pointer events to the host even while the UI wants them.
    pub grab_mouse: bool,

    /// Forward keyboard events to the host even while the UI wants them.
    pub grab_keyboard: bool,

    /// Let the UI library draw its own (software) cursor.
    pub draw_cursor: bool,

    /// Whether the overlay may change the host's cursor shape.
    pub change_host_cursor: bool,

    /// Whether to draw the built-in main menu bar.
    pub show_main_menu: bool,

    /// Initial visibility of the demo window.
    pub show_demo: bool,

    /// Initial visibility of the metrics/debugger window.
    pub show_metrics: bool,

    /// Initial visibility of the style editor.
    pub show_style_editor: bool,

    /// Initial visibility of the about window.
    pub show_about: bool,

    /// Frame delta (seconds) reported for the first frame.
    pub nominal_frame_delta: f32,

    /// Treat the pointer as always inside the window.
    ///
    /// Externally scheduled loops (browser-hosted builds) never see enter
    /// events, so they run with this set.
    pub always_focused: bool,

    /// UI color theme.
    pub theme: Theme,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            grab_mouse: false,
            grab_keyboard: false,
            draw_cursor: false,
            change_host_cursor: true,
            show_main_menu: true,
            show_demo: false,
            show_metrics: false,
            show_style_editor: false,
            show_about: false,
            nominal_frame_delta: NOMINAL_FRAME_DELTA,
            always_focused: false,
            theme: Theme::Dark,
        }
    }
}

impl OverlayOptions {
    /// Parses options from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Color theme of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Dark background, light text.
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}
