//! Scripted fake host and recording fake UI library shared by the
//! integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use scene_overlay::{
    Capture, Framebuffer, GraphicsBackend, HostCursor, HostEvent, InputSnapshot,
    InteractionStyle, Interactor, OverlayError, RenderHooks, RenderWindow, Result, StereoType,
    StyleHandle, Theme, UiContext, UiCursor,
};

/// Ordered record of everything the fakes were asked to do.
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e == entry)
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// ---------------------------------------------------------------------------
// Host side
// ---------------------------------------------------------------------------

pub struct FakeFramebuffer {
    journal: Journal,
}

impl Framebuffer for FakeFramebuffer {
    fn bind(&mut self) {
        self.journal.push("fb.bind");
    }

    fn activate_draw_buffer(&mut self, index: u32) {
        self.journal.push(format!("fb.buffer {index}"));
    }

    fn unbind(&mut self) {
        self.journal.push("fb.unbind");
    }
}

pub struct FakeWindow {
    pub journal: Journal,
    pub size: (u32, u32),
    pub rendered: bool,
    pub renders: usize,
    pub framebuffer: Option<FakeFramebuffer>,
    pub stereo: Option<StereoType>,
    pub cursor: HostCursor,
    pub cursor_visible: bool,
}

impl FakeWindow {
    pub fn new(journal: Journal) -> Self {
        Self {
            framebuffer: Some(FakeFramebuffer {
                journal: journal.clone(),
            }),
            journal,
            size: (800, 600),
            rendered: false,
            renders: 0,
            stereo: None,
            cursor: HostCursor::Default,
            cursor_visible: true,
        }
    }
}

impl RenderWindow for FakeWindow {
    type Framebuffer = FakeFramebuffer;

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn never_rendered(&self) -> bool {
        !self.rendered
    }

    fn render(&mut self, hooks: &mut dyn RenderHooks<Self>) {
        hooks.on_frame_start(self);
        self.journal.push("scene");
        hooks.on_frame_render(self);
        self.rendered = true;
        self.renders += 1;
    }

    fn render_framebuffer(&mut self) -> Option<&mut FakeFramebuffer> {
        self.framebuffer.as_mut()
    }

    fn stereo_render(&self) -> bool {
        self.stereo.is_some()
    }

    fn stereo_type(&self) -> Option<StereoType> {
        self.stereo
    }

    fn report_capabilities(&self) -> String {
        String::from("fake surface: 8 bit RGBA")
    }

    fn set_cursor(&mut self, cursor: HostCursor) {
        self.cursor = cursor;
    }

    fn show_cursor(&mut self) {
        self.cursor_visible = true;
    }

    fn hide_cursor(&mut self) {
        self.cursor_visible = false;
    }
}

/// An interactor replaying one batch of events per drain.
pub struct FakeInteractor {
    pub journal: Journal,
    pub window: Option<FakeWindow>,
    pub style: Option<StyleHandle>,
    pub position: (i32, i32),
    pub script: VecDeque<Vec<HostEvent>>,
    pub done: bool,
    pub set_done_calls: usize,
    pub enabled: bool,
    pub initialized: bool,
}

impl FakeInteractor {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            window: Some(FakeWindow::new(journal.clone())),
            style: None,
            position: (0, 0),
            script: VecDeque::new(),
            done: false,
            set_done_calls: 0,
            enabled: false,
            initialized: false,
        }
    }

    pub fn with_style(mut self, style: StyleHandle) -> Self {
        self.style = Some(style);
        self
    }

    /// Queues the events delivered by the next drain.
    pub fn queue(&mut self, events: Vec<HostEvent>) {
        self.script.push_back(events);
    }

    pub fn window(&mut self) -> &mut FakeWindow {
        self.window.as_mut().expect("fake interactor has a window")
    }
}

impl Interactor for FakeInteractor {
    type Window = FakeWindow;

    fn render_window(&mut self) -> Option<&mut FakeWindow> {
        self.window.as_mut()
    }

    fn interactor_style(&self) -> Option<StyleHandle> {
        self.style.clone()
    }

    fn last_event_position(&self) -> (i32, i32) {
        self.position
    }

    fn drain_events(&mut self, events: &mut Vec<HostEvent>) {
        self.journal.push("drain");
        if let Some(batch) = self.script.pop_front() {
            events.extend(batch);
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn set_done(&mut self, done: bool) {
        self.set_done_calls += 1;
        self.done = done;
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn initialize(&mut self) {
        self.initialized = true;
    }
}

/// A style recording the name of every hook it receives.
pub struct RecordingStyle {
    name: String,
    pub hooks: Vec<&'static str>,
    journal: Journal,
}

impl RecordingStyle {
    pub fn new(name: &str, journal: &Journal) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name: name.to_owned(),
            hooks: Vec::new(),
            journal: journal.clone(),
        }))
    }

    fn record(&mut self, hook: &'static str) {
        self.hooks.push(hook);
        self.journal.push(format!("{}.{hook}", self.name));
    }
}

macro_rules! record_hooks {
    ($($hook:ident),* $(,)?) => {
        $(
            fn $hook(&mut self) {
                self.record(stringify!($hook));
            }
        )*
    };
}

impl InteractionStyle for RecordingStyle {
    fn name(&self) -> &str {
        &self.name
    }

    record_hooks!(
        on_mouse_move,
        on_left_button_down,
        on_left_button_up,
        on_left_button_double_click,
        on_middle_button_down,
        on_middle_button_up,
        on_middle_button_double_click,
        on_right_button_down,
        on_right_button_up,
        on_right_button_double_click,
        on_mouse_wheel_forward,
        on_mouse_wheel_backward,
        on_mouse_wheel_left,
        on_mouse_wheel_right,
        on_expose,
        on_configure,
        on_timer,
        on_key_down,
        on_key_press,
        on_key_up,
        on_key_release,
        on_char,
    );
}

/// Upcasts a recording style to the handle an interactor holds.
pub fn handle(style: &Rc<RefCell<RecordingStyle>>) -> StyleHandle {
    style.clone()
}

// ---------------------------------------------------------------------------
// UI library side
// ---------------------------------------------------------------------------

/// A UI library that records frames. Its draw data is the frame number.
pub struct FakeUi {
    pub journal: Journal,
    pub capture: Capture,
    pub fonts_built: bool,
    pub cursor: UiCursor,
    pub frame_open: bool,
    pub frames: u64,
    pub inputs: Vec<InputSnapshot>,
    pub builtin_panels: usize,
    pub theme: Option<Theme>,
    draw: Option<u64>,
}

impl FakeUi {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            capture: Capture::default(),
            fonts_built: true,
            cursor: UiCursor::Arrow,
            frame_open: false,
            frames: 0,
            inputs: Vec::new(),
            builtin_panels: 0,
            theme: None,
            draw: None,
        }
    }

    pub fn last_input(&self) -> &InputSnapshot {
        self.inputs.last().expect("at least one frame")
    }
}

impl UiContext for FakeUi {
    type DrawData = u64;

    fn wants_capture(&self) -> Capture {
        self.capture
    }

    fn fonts_built(&self) -> bool {
        self.fonts_built
    }

    fn begin_frame(&mut self, input: &InputSnapshot) {
        assert!(!self.frame_open, "frame begun twice");
        self.journal.push("ui.begin");
        self.frame_open = true;
        self.inputs.push(input.clone());
    }

    fn end_frame(&mut self) {
        assert!(self.frame_open, "frame ended without begin");
        self.journal.push("ui.end");
        self.frame_open = false;
        self.frames += 1;
        self.draw = Some(self.frames);
    }

    fn draw_data(&self) -> Option<&u64> {
        self.draw.as_ref()
    }

    fn mouse_cursor(&self) -> UiCursor {
        self.cursor
    }

    fn show_builtin_panels(&mut self, _panels: &mut scene_overlay::OverlayPanels) {
        self.builtin_panels += 1;
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}

/// A graphics backend recording which frames it rasterized.
pub struct FakeBackend {
    pub journal: Journal,
    pub fail_init: bool,
    pub rendered: Vec<u64>,
}

impl FakeBackend {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail_init: false,
            rendered: Vec::new(),
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self {
            fail_init: true,
            ..Self::new(journal)
        }
    }
}

impl GraphicsBackend<u64> for FakeBackend {
    type Target = FakeFramebuffer;

    fn init(&mut self) -> Result<()> {
        self.journal.push("backend.init");
        if self.fail_init {
            return Err(OverlayError::BackendInit("no device".into()));
        }
        Ok(())
    }

    fn new_frame(&mut self) {
        self.journal.push("backend.new_frame");
    }

    fn render_draw_data(&mut self, draw_data: &u64, target: &mut FakeFramebuffer) {
        target.journal.push("backend.render");
        self.rendered.push(*draw_data);
    }

    fn shutdown(&mut self) {
        self.journal.push("backend.shutdown");
    }
}

pub type FakeOverlay = scene_overlay::Injector<FakeUi, FakeBackend>;

/// A session over fresh fakes.
pub fn overlay(journal: &Journal) -> FakeOverlay {
    FakeOverlay::new(FakeUi::new(journal), FakeBackend::new(journal))
        .expect("one session per thread")
}

/// Renders once so that later ticks build frames.
pub fn warm_up(overlay: &mut FakeOverlay, interactor: &mut FakeInteractor) {
    overlay.tick(interactor);
    assert!(!interactor.window().never_rendered());
}
