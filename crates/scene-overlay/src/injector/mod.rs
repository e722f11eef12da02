//! The overlay session and the host event loop it drives.

mod input;
mod listeners;
mod render;

pub use input::Routing;
pub use listeners::ListenerId;
pub use render::{FrameStart, FrameState};

use scene_overlay_core::{
    ButtonEdges, ContextGuard, GraphicsBackend, HostEvent, InputState, Interactor, OverlayError,
    OverlayOptions, OverlayPanels, RenderWindow, Result, UiContext,
};

use crate::clock::{Clock, SystemClock};
use input::InputBridge;
use listeners::Listeners;

/// An immediate-mode UI overlay injected into a host interactor.
///
/// The injector owns the UI library context `U` and its graphics backend
/// `G`. It never owns the host: the interactor is lent to [`Injector::start`]
/// (or [`Injector::tick`] for externally scheduled loops), and the render
/// window calls back through [`scene_overlay_core::RenderHooks`].
///
/// Only one injector can be alive per thread.
pub struct Injector<U: UiContext, G: GraphicsBackend<U::DrawData>> {
    pub(crate) ui: U,
    pub(crate) backend: G,
    pub(crate) options: OverlayOptions,
    pub(crate) panels: OverlayPanels,
    pub(crate) input: InputState,
    pub(crate) edges: ButtonEdges,
    pub(crate) focused: bool,
    pub(crate) bridge: InputBridge,
    pub(crate) listeners: Listeners<U>,
    clock: Box<dyn Clock>,
    /// Clock reading at the last overlay frame.
    pub(crate) time: Option<f64>,
    pub(crate) state: FrameState,
    pub(crate) setup_finished: bool,
    pub(crate) backend_ok: bool,
    /// A frame was closed this tick and has not been composited yet.
    pub(crate) frame_pending: bool,
    pub(crate) frame_count: u64,
    /// Interactor pointer position captured right before rendering.
    pub(crate) pointer: (i32, i32),
    injected: bool,
    events: Vec<HostEvent>,
    _guard: ContextGuard,
}

impl<U: UiContext, G: GraphicsBackend<U::DrawData>> Injector<U, G> {
    /// Creates an overlay session around a UI context and graphics backend.
    ///
    /// Fails if another session is still alive on this thread.
    pub fn new(ui: U, backend: G) -> Result<Self> {
        Self::with_options(ui, backend, OverlayOptions::default())
    }

    /// Creates an overlay session with explicit options.
    ///
    /// The UI context is switched to `options.theme`.
    pub fn with_options(mut ui: U, backend: G, options: OverlayOptions) -> Result<Self> {
        let guard = ContextGuard::acquire()?;
        ui.apply_theme(options.theme);
        let panels = OverlayPanels::from(&options);
        log::debug!("overlay session created");
        Ok(Self {
            ui,
            backend,
            focused: options.always_focused,
            options,
            panels,
            input: InputState::default(),
            edges: ButtonEdges::default(),
            bridge: InputBridge::default(),
            listeners: Listeners::default(),
            clock: Box::new(SystemClock::new()),
            time: None,
            state: FrameState::Uninitialized,
            setup_finished: false,
            backend_ok: false,
            frame_pending: false,
            frame_count: 0,
            pointer: (0, 0),
            injected: false,
            events: Vec::new(),
            _guard: guard,
        })
    }

    /// Replaces the frame clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Attaches the overlay to `interactor`.
    ///
    /// May be called once. A second call, or an interactor without a render
    /// window, is logged and reported but leaves the session untouched.
    pub fn inject<I: Interactor>(&mut self, interactor: &mut I) -> Result<()> {
        if self.injected {
            log::error!("inject must be called only once");
            return Err(OverlayError::AlreadyInjected);
        }
        if interactor.render_window().is_none() {
            log::warn!("inject: interactor has no render window");
            return Err(OverlayError::NoRenderWindow);
        }
        self.injected = true;
        log::info!("overlay injected");
        Ok(())
    }

    /// Whether [`Injector::inject`] succeeded.
    pub fn is_injected(&self) -> bool {
        self.injected
    }

    /// Runs the host event loop until the interactor is done.
    pub fn start<I>(&mut self, interactor: &mut I)
    where
        I: Interactor,
        I::Window: RenderWindow<Framebuffer = G::Target>,
    {
        if !self.injected {
            log::error!("start: overlay was never injected");
            return;
        }
        interactor.enable();
        interactor.initialize();
        while !interactor.done() {
            self.tick(interactor);
        }
        log::debug!("event loop finished after {} overlay frames", self.frame_count);
    }

    /// One loop iteration: bind the active style, drain and dispatch pending
    /// events, unbind, then render unless the interactor is done.
    ///
    /// Hosts with an externally scheduled frame loop call this once per tick
    /// instead of [`Injector::start`]. Does nothing until the overlay has
    /// been injected.
    pub fn tick<I>(&mut self, interactor: &mut I)
    where
        I: Interactor,
        I::Window: RenderWindow<Framebuffer = G::Target>,
    {
        if !self.injected {
            log::trace!("tick: overlay not injected");
            return;
        }
        self.bridge.subscribe(interactor.interactor_style());

        let mut events = std::mem::take(&mut self.events);
        interactor.drain_events(&mut events);
        for event in events.drain(..) {
            if event == HostEvent::Exit {
                self.on_exit(interactor);
            } else {
                self.dispatch(&event);
            }
        }
        self.events = events;

        self.bridge.unsubscribe();

        if interactor.done() {
            return;
        }
        self.pointer = interactor.last_event_position();
        match interactor.render_window() {
            Some(window) => window.render(self),
            None => log::debug!("tick: no render window, skipping render"),
        }
    }

    /// Registers a listener fired once when the graphics backend is set up.
    ///
    /// The flag tells whether backend initialization succeeded. Use it for
    /// one-time resource loading such as fonts and themes.
    pub fn add_setup_listener(
        &mut self,
        listener: impl FnMut(&mut U, bool) + 'static,
    ) -> ListenerId {
        self.listeners.add_setup(Box::new(listener))
    }

    /// Registers a listener fired every frame inside the open UI frame.
    pub fn add_draw_listener(&mut self, listener: impl FnMut(&mut U) + 'static) -> ListenerId {
        self.listeners.add_draw(Box::new(listener))
    }

    /// Removes a previously registered listener.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// The UI library context.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Mutable access to the UI library context.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// The graphics backend.
    pub fn backend(&self) -> &G {
        &self.backend
    }

    /// Options the session was created with.
    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Current toggles and panel visibility.
    pub fn panels(&self) -> &OverlayPanels {
        &self.panels
    }

    /// Mutable toggles and panel visibility.
    pub fn panels_mut(&mut self) -> &mut OverlayPanels {
        &mut self.panels
    }

    /// Forward pointer events to the host even while the UI captures them.
    pub fn set_grab_mouse(&mut self, grab: bool) {
        self.panels.grab_mouse = grab;
    }

    /// Forward keyboard events to the host even while the UI captures them.
    pub fn set_grab_keyboard(&mut self, grab: bool) {
        self.panels.grab_keyboard = grab;
    }

    /// The frame sequencer's state.
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Whether one-time backend setup has run.
    pub fn is_setup_finished(&self) -> bool {
        self.setup_finished
    }

    /// Whether the pointer is inside the host window.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The mouse button edge table.
    pub fn button_edges(&self) -> ButtonEdges {
        self.edges
    }

    /// Input gathered since the last frame.
    pub fn pending_input(&self) -> &InputState {
        &self.input
    }

    /// Number of overlay frames built so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub(crate) fn now(&self) -> f64 {
        self.clock.now()
    }
}

impl<U: UiContext, G: GraphicsBackend<U::DrawData>> Drop for Injector<U, G> {
    fn drop(&mut self) {
        if self.backend_ok && self.state != FrameState::TornDown {
            self.backend.shutdown();
        }
        log::debug!("overlay session destroyed");
    }
}
