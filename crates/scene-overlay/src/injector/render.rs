//! Frame sequencer: builds the overlay frame before the host renders its
//! scene and composites it into the host framebuffer afterwards.

use scene_overlay_core::{
    host_to_ui, overlay_draw_buffer, Framebuffer, FrameInput, GraphicsBackend, Interactor,
    RenderHooks, RenderWindow, UiContext, UiCursor, Vec2,
};

use super::Injector;

/// Lifecycle of the overlay frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameState {
    /// The host surface has not rendered yet; nothing is set up.
    #[default]
    Uninitialized,
    /// One-time backend setup ran; no frame has been opened since.
    BackendReady,
    /// Between UI begin-frame and end-frame.
    FrameOpen,
    /// The last frame's draw list is built.
    FrameClosed,
    /// The interactor exited. Terminal.
    TornDown,
}

/// Outcome of [`Injector::begin_overlay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStart {
    /// The host surface never rendered; try again next tick.
    NotReady,
    /// A UI frame was built.
    Built,
    /// The session is torn down.
    Skipped,
}

/// Seconds to report for a frame starting at `now`.
///
/// The first frame, and any frame whose clock did not move forward, reports
/// `nominal`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn frame_delta(previous: Option<f64>, now: f64, nominal: f32) -> f32 {
    let delta = previous.map_or(0.0, |previous| (now - previous) as f32);
    if delta > 0.0 {
        delta
    } else {
        nominal
    }
}

impl<U: UiContext, G: GraphicsBackend<U::DrawData>> Injector<U, G> {
    /// Builds this tick's overlay frame.
    ///
    /// Runs once-only backend setup on the first call after the host surface
    /// has rendered, then pushes display size, frame delta and input to the
    /// UI library and runs the built-in panels and every draw listener inside
    /// one UI frame. The draw list is built but not rasterized.
    #[allow(clippy::cast_precision_loss)]
    pub fn begin_overlay<W: RenderWindow>(&mut self, window: &mut W) -> FrameStart {
        if self.state == FrameState::TornDown {
            return FrameStart::Skipped;
        }
        if window.never_rendered() {
            log::debug!("render window has not rendered yet, overlay frame deferred");
            return FrameStart::NotReady;
        }
        if !self.setup_finished {
            self.set_up(window);
        }

        let (width, height) = window.size();
        let display_size = Vec2::new(width as f32, height as f32);

        let now = self.now();
        let delta_time = frame_delta(self.time, now, self.options.nominal_frame_delta);
        self.time = Some(now);

        let pointer = (self.focused || self.options.always_focused)
            .then(|| host_to_ui(self.pointer, display_size.y));
        let snapshot = self.input.take_snapshot(
            FrameInput {
                display_size,
                delta_time,
                pointer,
                draw_cursor: self.panels.draw_cursor,
            },
            self.edges,
        );

        self.sync_cursor(window);

        self.backend.new_frame();
        self.ui.begin_frame(&snapshot);
        self.state = FrameState::FrameOpen;

        self.ui.show_builtin_panels(&mut self.panels);
        let failed = self.listeners.notify_draw(&mut self.ui);
        if failed > 0 {
            log::warn!("{failed} draw listener(s) failed, closing the frame anyway");
        }

        self.ui.end_frame();
        self.state = FrameState::FrameClosed;
        self.frame_pending = true;
        self.frame_count += 1;
        FrameStart::Built
    }

    /// Composites the draw list built this tick into the host framebuffer.
    ///
    /// Returns false when nothing was drawn: no frame was built this tick,
    /// the backend is unusable, the font atlas is not built yet, or the host
    /// has no framebuffer.
    pub fn render_overlay<W>(&mut self, window: &mut W) -> bool
    where
        W: RenderWindow<Framebuffer = G::Target>,
    {
        if !std::mem::take(&mut self.frame_pending) || !self.backend_ok {
            return false;
        }
        if !self.ui.fonts_built() {
            log::debug!("font atlas not built yet, skipping overlay composite");
            return false;
        }
        let Some(draw_data) = self.ui.draw_data() else {
            return false;
        };
        let buffer = overlay_draw_buffer(window.stereo_render(), window.stereo_type());
        let Some(framebuffer) = window.render_framebuffer() else {
            log::debug!("render window has no framebuffer, skipping overlay composite");
            return false;
        };

        framebuffer.bind();
        framebuffer.activate_draw_buffer(buffer);
        self.backend.render_draw_data(draw_data, framebuffer);
        framebuffer.unbind();
        true
    }

    /// Stops the host loop and releases the graphics backend.
    ///
    /// Safe to call more than once and before the backend was ever set up;
    /// repeated calls only log.
    pub fn on_exit<I: Interactor>(&mut self, interactor: &mut I) {
        if self.state == FrameState::TornDown {
            log::warn!("overlay already torn down");
            return;
        }
        interactor.set_done(true);
        if self.backend_ok {
            self.backend.shutdown();
        }
        self.state = FrameState::TornDown;
        self.frame_pending = false;
        log::info!("overlay torn down after {} frames", self.frame_count);
    }

    fn set_up<W: RenderWindow>(&mut self, window: &W) {
        let capabilities = window.report_capabilities();
        if !capabilities.is_empty() {
            log::info!("render window capabilities:\n{capabilities}");
        }

        self.backend_ok = match self.backend.init() {
            Ok(()) => {
                log::info!("overlay graphics backend ready");
                true
            }
            Err(e) => {
                log::error!("overlay graphics backend failed to initialize: {e}");
                false
            }
        };
        self.listeners.notify_setup(&mut self.ui, self.backend_ok);
        self.setup_finished = true;
        self.state = FrameState::BackendReady;
    }

    fn sync_cursor<W: RenderWindow>(&self, window: &mut W) {
        if !self.options.change_host_cursor {
            return;
        }
        let cursor = self.ui.mouse_cursor();
        if cursor == UiCursor::None || self.panels.draw_cursor {
            window.hide_cursor();
        } else {
            window.show_cursor();
            window.set_cursor(cursor.host_cursor());
        }
    }
}

impl<U, G, W> RenderHooks<W> for Injector<U, G>
where
    U: UiContext,
    G: GraphicsBackend<U::DrawData>,
    W: RenderWindow<Framebuffer = G::Target>,
{
    fn on_frame_start(&mut self, window: &mut W) {
        self.begin_overlay(window);
    }

    fn on_frame_render(&mut self, window: &mut W) {
        self.render_overlay(window);
    }
}
