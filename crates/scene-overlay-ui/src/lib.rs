//! egui binding for scene-overlay.
//!
//! [`EguiUi`] implements the overlay's UI library contract on an
//! [`egui::Context`], and [`WgpuPainter`] rasterizes its output into a host
//! [`WgpuFramebuffer`] with `egui-wgpu`.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod integration;
pub mod painter;
pub mod panels;

pub use integration::{EguiDrawData, EguiUi};
pub use painter::{WgpuFramebuffer, WgpuPainter};
pub use panels::show_builtin_panels;
