//! scene-overlay: an immediate-mode UI overlay for 3D rendering hosts.
//!
//! The overlay sits between a host application's render window and an
//! immediate-mode UI library. Each tick it binds the host's active
//! interaction style, routes pending host input either to the UI or to the
//! host (depending on what the UI wants to capture), builds one UI frame
//! before the host renders its scene, and composites that frame into the
//! host framebuffer afterwards.
//!
//! # Quick Start
//!
//! ```ignore
//! use scene_overlay::*;
//!
//! fn run(interactor: &mut impl Interactor<Window = MyWindow>) -> Result<()> {
//!     let ui = EguiUi::new(Theme::Dark);
//!     let painter = WgpuPainter::new(device, queue, format);
//!     let mut overlay = Injector::new(ui, painter)?;
//!
//!     overlay.add_draw_listener(|ui| {
//!         egui::Window::new("Scene").show(ui.context(), |ui| {
//!             ui.label("Hello from the overlay");
//!         });
//!     });
//!
//!     overlay.inject(interactor)?;
//!     overlay.start(interactor);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Injector`] owns the session: the UI context, its graphics backend,
//!   setup/draw listeners and input state.
//! - The host is described by the traits in [`scene_overlay_core`]:
//!   [`RenderWindow`], [`Interactor`], [`InteractionStyle`].
//! - The UI library is described by [`UiContext`] and [`GraphicsBackend`];
//!   `scene-overlay-ui` implements them for egui on wgpu.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod clock;
mod injector;

pub use clock::{Clock, ManualClock, SystemClock};
pub use injector::{FrameStart, FrameState, Injector, ListenerId, Routing};

// Re-export core types
pub use scene_overlay_core::{
    error::{OverlayError, Result},
    event::{EventClass, HostEvent, MouseButton, WheelDirection},
    host::{Framebuffer, HostCursor, Interactor, RenderHooks, RenderWindow, StereoType},
    input::{InputSnapshot, InputState, KeyEvent, Modifiers},
    keymap::NavKey,
    options::{OverlayOptions, Theme, NOMINAL_FRAME_DELTA},
    style::{InteractionStyle, StyleHandle, StyleSwitch},
    ui::{Capture, GraphicsBackend, OverlayPanels, UiContext, UiCursor},
    ButtonEdges, Vec2,
};

// Re-export the egui binding
pub use egui;
pub use scene_overlay_ui::{EguiDrawData, EguiUi, WgpuFramebuffer, WgpuPainter};

/// Initializes `env_logger` for binaries that have not set up logging.
///
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
