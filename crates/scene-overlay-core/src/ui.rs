//! Contracts of the immediate-mode UI library and its graphics backend.

use std::cell::Cell;

use crate::error::{OverlayError, Result};
use crate::host::{Framebuffer, HostCursor};
use crate::input::InputSnapshot;
use crate::options::{OverlayOptions, Theme};

/// Which input classes the UI library wants for itself this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capture {
    pub pointer: bool,
    pub keyboard: bool,
}

/// Cursor shapes the UI library may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UiCursor {
    /// The UI wants the cursor hidden.
    None,
    #[default]
    Arrow,
    TextInput,
    ResizeAll,
    ResizeNS,
    ResizeEW,
    ResizeNESW,
    ResizeNWSE,
    Hand,
    NotAllowed,
}

impl UiCursor {
    /// The closest host cursor.
    #[must_use]
    pub fn host_cursor(self) -> HostCursor {
        match self {
            UiCursor::Arrow => HostCursor::Arrow,
            UiCursor::ResizeAll => HostCursor::SizeAll,
            UiCursor::ResizeNS => HostCursor::SizeNS,
            UiCursor::ResizeEW => HostCursor::SizeWE,
            UiCursor::ResizeNESW => HostCursor::SizeNE,
            UiCursor::ResizeNWSE => HostCursor::SizeNW,
            UiCursor::Hand => HostCursor::Hand,
            UiCursor::None | UiCursor::TextInput | UiCursor::NotAllowed => HostCursor::Default,
        }
    }
}

/// Runtime toggles of the overlay, editable from the built-in menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct OverlayPanels {
    /// Forward pointer events to the host even while the UI captures them.
    pub grab_mouse: bool,
    /// Forward keyboard events to the host even while the UI captures them.
    pub grab_keyboard: bool,
    /// The UI library draws its own cursor.
    pub draw_cursor: bool,
    pub show_main_menu: bool,
    pub show_demo: bool,
    pub show_metrics: bool,
    pub show_style_editor: bool,
    pub show_about: bool,
}

impl From<&OverlayOptions> for OverlayPanels {
    fn from(options: &OverlayOptions) -> Self {
        Self {
            grab_mouse: options.grab_mouse,
            grab_keyboard: options.grab_keyboard,
            draw_cursor: options.draw_cursor,
            show_main_menu: options.show_main_menu,
            show_demo: options.show_demo,
            show_metrics: options.show_metrics,
            show_style_editor: options.show_style_editor,
            show_about: options.show_about,
        }
    }
}

/// An immediate-mode UI library context.
///
/// One frame is `begin_frame`, any number of widget calls, `end_frame`.
/// After `end_frame` the draw list of that frame is available until the
/// next `begin_frame`.
pub trait UiContext {
    /// The draw-command list handed to the graphics backend.
    type DrawData;

    /// What the UI claimed during the last frame.
    fn wants_capture(&self) -> Capture;

    /// Whether the font atlas has been built and can be rasterized.
    fn fonts_built(&self) -> bool;

    /// Starts a frame reading `input`.
    fn begin_frame(&mut self, input: &InputSnapshot);

    /// Closes the current frame and builds its draw list.
    fn end_frame(&mut self);

    /// Draw list of the last closed frame.
    fn draw_data(&self) -> Option<&Self::DrawData>;

    /// Cursor the UI asked for during the last frame.
    fn mouse_cursor(&self) -> UiCursor;

    /// Draws the overlay's own menu bar and debug panels.
    fn show_builtin_panels(&mut self, _panels: &mut OverlayPanels) {}

    /// Switches the color theme. Called once when the session is created.
    fn apply_theme(&mut self, _theme: Theme) {}
}

/// Rasterizes a UI library's draw list `D` into a host framebuffer.
pub trait GraphicsBackend<D> {
    /// The host framebuffer type this backend draws into.
    type Target: Framebuffer;

    /// One-time setup, once the host surface is usable.
    fn init(&mut self) -> Result<()>;

    /// Per-frame preparation before the UI frame begins.
    fn new_frame(&mut self) {}

    /// Draws `draw_data` into the bound `target`.
    fn render_draw_data(&mut self, draw_data: &D, target: &mut Self::Target);

    /// Releases backend resources.
    fn shutdown(&mut self);
}

thread_local! {
    static CONTEXT_LIVE: Cell<bool> = const { Cell::new(false) };
}

/// Proof that the calling thread owns the one live UI context.
///
/// Acquired when an overlay session is constructed and released when it is
/// dropped.
#[derive(Debug)]
pub struct ContextGuard {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ContextGuard {
    /// Claims the UI context slot of this thread.
    pub fn acquire() -> Result<Self> {
        CONTEXT_LIVE.with(|live| {
            if live.get() {
                return Err(OverlayError::ContextAlreadyLive);
            }
            live.set(true);
            Ok(Self {
                _not_send: std::marker::PhantomData,
            })
        })
    }

    /// Whether a UI context is live on this thread.
    #[must_use]
    pub fn is_live() -> bool {
        CONTEXT_LIVE.with(Cell::get)
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CONTEXT_LIVE.with(|live| live.set(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(UiCursor::Hand.host_cursor(), HostCursor::Hand);
        assert_eq!(UiCursor::ResizeEW.host_cursor(), HostCursor::SizeWE);
        assert_eq!(UiCursor::ResizeNESW.host_cursor(), HostCursor::SizeNE);
        assert_eq!(UiCursor::TextInput.host_cursor(), HostCursor::Default);
        assert_eq!(UiCursor::NotAllowed.host_cursor(), HostCursor::Default);
    }

    #[test]
    fn test_context_guard_single_instance() {
        assert!(!ContextGuard::is_live());
        let guard = ContextGuard::acquire().expect("first acquire");
        assert!(ContextGuard::is_live());
        assert!(matches!(
            ContextGuard::acquire(),
            Err(OverlayError::ContextAlreadyLive)
        ));
        drop(guard);
        assert!(!ContextGuard::is_live());
        let _again = ContextGuard::acquire().expect("reacquire after drop");
    }

    #[test]
    fn test_panels_from_options() {
        let options = OverlayOptions {
            grab_keyboard: true,
            show_about: true,
            ..OverlayOptions::default()
        };
        let panels = OverlayPanels::from(&options);
        assert!(panels.grab_keyboard);
        assert!(panels.show_about);
        assert!(panels.show_main_menu);
        assert!(!panels.grab_mouse);
    }
}
