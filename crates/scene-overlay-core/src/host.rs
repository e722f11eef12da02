//! Contracts of the host rendering application.
//!
//! The overlay never owns the host. It is handed the interactor when it
//! starts pumping, and the render window calls back into it through
//! [`RenderHooks`] around each scene render.

use crate::event::HostEvent;
use crate::style::StyleHandle;

/// Cursor shapes a host render window can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostCursor {
    #[default]
    Default,
    Arrow,
    SizeAll,
    SizeNS,
    SizeWE,
    SizeNE,
    SizeNW,
    Hand,
}

/// Stereo rendering technique of the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StereoType {
    /// Quad-buffered stereo: separate left and right back buffers.
    CrystalEyes,
    /// Red/blue (or any color) anaglyph in one buffer.
    Anaglyph,
    /// Line-interlaced stereo.
    Interlaced,
    /// Left and right eye side by side.
    SplitViewport,
}

/// The framebuffer the host renders its scene into.
pub trait Framebuffer {
    /// Makes this framebuffer the active draw target.
    fn bind(&mut self);

    /// Selects which color buffer subsequent draws go to.
    fn activate_draw_buffer(&mut self, index: u32);

    /// Restores whatever binding was active before [`Framebuffer::bind`].
    fn unbind(&mut self);
}

/// Callbacks a render window fires around each scene render.
pub trait RenderHooks<W: ?Sized> {
    /// Fired before the scene is rendered.
    fn on_frame_start(&mut self, window: &mut W);

    /// Fired after the scene is rendered, before presentation.
    fn on_frame_render(&mut self, window: &mut W);
}

/// The host's render window.
pub trait RenderWindow {
    /// The host's framebuffer type.
    type Framebuffer: Framebuffer;

    /// Window size in pixels.
    fn size(&self) -> (u32, u32);

    /// True until the window has completed its first render.
    fn never_rendered(&self) -> bool;

    /// Renders one frame, calling `hooks` before and after the scene.
    fn render(&mut self, hooks: &mut dyn RenderHooks<Self>);

    /// The framebuffer the scene was rendered into, if any.
    fn render_framebuffer(&mut self) -> Option<&mut Self::Framebuffer>;

    /// Whether stereo rendering is on.
    fn stereo_render(&self) -> bool {
        false
    }

    /// The configured stereo technique, if any.
    fn stereo_type(&self) -> Option<StereoType> {
        None
    }

    /// Human readable capability report of the rendering surface.
    fn report_capabilities(&self) -> String {
        String::new()
    }

    fn set_cursor(&mut self, _cursor: HostCursor) {}
    fn show_cursor(&mut self) {}
    fn hide_cursor(&mut self) {}
}

/// The host's interactor: event queue, pointer tracking and run flag.
pub trait Interactor {
    /// The render window type the interactor drives.
    type Window: RenderWindow;

    /// The render window, if one is attached.
    fn render_window(&mut self) -> Option<&mut Self::Window>;

    /// The interaction style currently installed, if any.
    fn interactor_style(&self) -> Option<StyleHandle>;

    /// Position of the last pointer event, bottom-left origin.
    fn last_event_position(&self) -> (i32, i32);

    /// Moves all pending events into `events`, in arrival order.
    fn drain_events(&mut self, events: &mut Vec<HostEvent>);

    /// Whether the event loop should stop.
    fn done(&self) -> bool;

    /// Sets the loop's stop flag.
    fn set_done(&mut self, done: bool);

    fn enable(&mut self) {}
    fn initialize(&mut self) {}
}

/// Index of the color buffer the overlay draws into.
///
/// Quad-buffered stereo puts the overlay into the second back buffer;
/// every other mode uses the first.
#[must_use]
pub fn overlay_draw_buffer(stereo_render: bool, stereo_type: Option<StereoType>) -> u32 {
    u32::from(stereo_render && stereo_type == Some(StereoType::CrystalEyes))
}
