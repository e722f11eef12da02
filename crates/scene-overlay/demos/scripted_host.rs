//! A console-only host driving the egui overlay through a short script.
//!
//! Run with `RUST_LOG=debug cargo run --example scripted_host` to see how
//! each host event is routed and when overlay frames are built and drawn.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use scene_overlay::{
    egui, EguiDrawData, EguiUi, Framebuffer, GraphicsBackend, HostCursor, HostEvent, Injector,
    InteractionStyle, Interactor, MouseButton, OverlayOptions, RenderHooks, RenderWindow, Result,
    StyleHandle, WheelDirection,
};

struct ConsoleFramebuffer;

impl Framebuffer for ConsoleFramebuffer {
    fn bind(&mut self) {
        log::debug!("framebuffer bound");
    }

    fn activate_draw_buffer(&mut self, index: u32) {
        log::debug!("draw buffer {index}");
    }

    fn unbind(&mut self) {
        log::debug!("framebuffer unbound");
    }
}

struct ConsoleWindow {
    framebuffer: ConsoleFramebuffer,
    frames: u64,
}

impl RenderWindow for ConsoleWindow {
    type Framebuffer = ConsoleFramebuffer;

    fn size(&self) -> (u32, u32) {
        (1280, 720)
    }

    fn never_rendered(&self) -> bool {
        self.frames == 0
    }

    fn render(&mut self, hooks: &mut dyn RenderHooks<Self>) {
        hooks.on_frame_start(self);
        log::debug!("scene frame {}", self.frames);
        hooks.on_frame_render(self);
        self.frames += 1;
    }

    fn render_framebuffer(&mut self) -> Option<&mut ConsoleFramebuffer> {
        Some(&mut self.framebuffer)
    }

    fn report_capabilities(&self) -> String {
        String::from("console surface, no GPU")
    }

    fn set_cursor(&mut self, cursor: HostCursor) {
        log::trace!("host cursor {cursor:?}");
    }
}

/// Orbits an imaginary camera.
#[derive(Default)]
struct OrbitStyle {
    zoom: i32,
}

impl InteractionStyle for OrbitStyle {
    fn name(&self) -> &str {
        "orbit"
    }

    fn on_left_button_down(&mut self) {
        log::info!("orbit: start rotating");
    }

    fn on_left_button_up(&mut self) {
        log::info!("orbit: stop rotating");
    }

    fn on_mouse_wheel_forward(&mut self) {
        self.zoom += 1;
        log::info!("orbit: zoom {}", self.zoom);
    }

    fn on_key_press(&mut self) {
        log::info!("orbit: key pressed");
    }
}

struct ScriptedInteractor {
    window: ConsoleWindow,
    style: StyleHandle,
    script: VecDeque<(Vec<HostEvent>, (i32, i32))>,
    position: (i32, i32),
    done: bool,
}

impl Interactor for ScriptedInteractor {
    type Window = ConsoleWindow;

    fn render_window(&mut self) -> Option<&mut ConsoleWindow> {
        Some(&mut self.window)
    }

    fn interactor_style(&self) -> Option<StyleHandle> {
        Some(Rc::clone(&self.style))
    }

    fn last_event_position(&self) -> (i32, i32) {
        self.position
    }

    fn drain_events(&mut self, events: &mut Vec<HostEvent>) {
        match self.script.pop_front() {
            Some((batch, position)) => {
                self.position = position;
                events.extend(batch);
            }
            None => events.push(HostEvent::Exit),
        }
    }

    fn done(&self) -> bool {
        self.done
    }

    fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}

/// Stands in for a GPU painter and reports what it would draw.
struct ConsolePainter;

impl GraphicsBackend<EguiDrawData> for ConsolePainter {
    type Target = ConsoleFramebuffer;

    fn init(&mut self) -> Result<()> {
        log::info!("console painter ready");
        Ok(())
    }

    fn render_draw_data(&mut self, draw_data: &EguiDrawData, _target: &mut ConsoleFramebuffer) {
        log::info!(
            "painting {} primitives, {} texture updates",
            draw_data.primitives.len(),
            draw_data.textures_delta.set.len()
        );
        draw_data.mark_painted();
    }

    fn shutdown(&mut self) {
        log::info!("console painter released");
    }
}

fn main() -> Result<()> {
    scene_overlay::init_logging();

    let options = OverlayOptions::from_json_str(r#"{ "show_about": true }"#)?;
    let ui = EguiUi::default();
    let mut overlay = Injector::with_options(ui, ConsolePainter, options)?;

    let clicks = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&clicks);
    overlay.add_setup_listener(|ui, ok| {
        log::info!("overlay setup finished (backend ok: {ok})");
        ui.context().set_pixels_per_point(1.0);
    });
    overlay.add_draw_listener(move |ui| {
        egui::Window::new("Scene").show(ui.context(), |ui| {
            ui.label("Hello from the overlay");
            if ui.button("Click me").clicked() {
                *counter.borrow_mut() += 1;
            }
        });
    });

    let style: StyleHandle = Rc::new(RefCell::new(OrbitStyle::default()));
    let mut interactor = ScriptedInteractor {
        window: ConsoleWindow {
            framebuffer: ConsoleFramebuffer,
            frames: 0,
        },
        style,
        script: VecDeque::from(vec![
            (vec![HostEvent::Enter], (640, 360)),
            (vec![HostEvent::MouseMove], (640, 300)),
            (vec![HostEvent::ButtonPress(MouseButton::Left)], (640, 300)),
            (vec![HostEvent::ButtonRelease(MouseButton::Left)], (640, 300)),
            (vec![HostEvent::Wheel(WheelDirection::Forward)], (640, 300)),
            (
                vec![HostEvent::KeyPress {
                    key_sym: "Return".into(),
                    key_code: 36,
                }],
                (640, 300),
            ),
        ]),
        position: (0, 0),
        done: false,
    };

    overlay.inject(&mut interactor)?;
    overlay.start(&mut interactor);

    log::info!(
        "script finished: {} overlay frames, {} button clicks",
        overlay.frame_count(),
        clicks.borrow()
    );
    Ok(())
}
