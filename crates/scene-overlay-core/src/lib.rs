//! Core contracts for scene-overlay.
//!
//! This crate describes the two systems the overlay bridges, without
//! depending on either:
//! - the host 3D application: [`RenderWindow`], [`Interactor`],
//!   [`InteractionStyle`] and the [`HostEvent`]s it produces
//! - the immediate-mode UI library: [`UiContext`] and [`GraphicsBackend`]
//!
//! plus the overlay's own input model ([`InputState`], [`InputSnapshot`]),
//! key-symbol mapping, errors and options.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Hook names mirror the host's own naming
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod event;
pub mod host;
pub mod input;
pub mod keymap;
pub mod options;
pub mod style;
pub mod ui;

pub use error::{OverlayError, Result};
pub use event::{EventClass, HostEvent, MouseButton, WheelDirection};
pub use host::{
    overlay_draw_buffer, Framebuffer, HostCursor, Interactor, RenderHooks, RenderWindow,
    StereoType,
};
pub use input::{
    host_to_ui, ButtonEdges, FrameInput, InputSnapshot, InputState, KeyEvent, KeysDown,
    Modifiers, KEY_COUNT,
};
pub use keymap::NavKey;
pub use options::{OverlayOptions, Theme, NOMINAL_FRAME_DELTA};
pub use style::{deliver, resolve_active, InteractionStyle, StyleHandle, StyleSwitch, WeakStyle};
pub use ui::{Capture, ContextGuard, GraphicsBackend, OverlayPanels, UiContext, UiCursor};

// Re-export glam types for convenience
pub use glam::Vec2;
