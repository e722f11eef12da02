//! egui as the overlay's immediate-mode UI library.

use egui::{
    Color32, Context, CursorIcon, Event, Id, LayerId, Order, Pos2, Rect, Shape, Stroke,
    TextureId, TexturesDelta,
};
use scene_overlay_core::{
    Capture, InputSnapshot, Modifiers, MouseButton, NavKey, OverlayPanels, Theme, UiContext,
    UiCursor,
};

use crate::panels;

/// Everything the painter needs to rasterize one egui frame.
pub struct EguiDrawData {
    pub primitives: Vec<egui::ClippedPrimitive>,
    /// Texture uploads and frees, including those of frames that were built
    /// but never painted.
    pub textures_delta: TexturesDelta,
    pub pixels_per_point: f32,
    /// Target size in physical pixels.
    pub size_in_pixels: [u32; 2],
    painted: std::cell::Cell<bool>,
}

impl EguiDrawData {
    /// Marks the texture delta as uploaded.
    pub fn mark_painted(&self) {
        self.painted.set(true);
    }

    /// Whether a painter has consumed this frame.
    pub fn is_painted(&self) -> bool {
        self.painted.get()
    }
}

/// An egui context driven by overlay input snapshots.
pub struct EguiUi {
    context: Context,
    draw_data: Option<EguiDrawData>,
    capture: Capture,
    cursor: UiCursor,
    fonts_built: bool,
    time: f64,
    buttons: [bool; 3],
    pointer: Option<Pos2>,
    software_cursor: bool,
}

impl EguiUi {
    /// Creates a new egui context with the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let context = Context::default();
        set_theme(&context, theme);
        Self {
            context,
            draw_data: None,
            capture: Capture::default(),
            cursor: UiCursor::default(),
            fonts_built: false,
            time: 0.0,
            buttons: [false; 3],
            pointer: None,
            software_cursor: false,
        }
    }

    /// The egui context, for draw listeners to build widgets with.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Switches between dark and light visuals.
    pub fn set_theme(&self, theme: Theme) {
        set_theme(&self.context, theme);
    }

    fn raw_input(&mut self, input: &InputSnapshot) -> egui::RawInput {
        let modifiers = egui_modifiers(input.modifiers);
        let mut events = Vec::new();

        match (input.mouse_pos, self.pointer) {
            (Some(pos), previous) => {
                let pos = Pos2::new(pos.x, pos.y);
                if previous != Some(pos) {
                    events.push(Event::PointerMoved(pos));
                }
                self.pointer = Some(pos);
            }
            (None, Some(_)) => {
                events.push(Event::PointerGone);
                self.pointer = None;
            }
            (None, None) => {}
        }
        let pos = self.pointer.unwrap_or(Pos2::ZERO);

        for button in MouseButton::ALL {
            let index = button.index();
            let pressed = input.mouse_down[index];
            if pressed != self.buttons[index] {
                events.push(Event::PointerButton {
                    pos,
                    button: pointer_button(button),
                    pressed,
                    modifiers,
                });
                self.buttons[index] = pressed;
            } else if input.mouse_double_clicked[index] && !pressed {
                // A second click inside egui's double-click window.
                for pressed in [true, false] {
                    events.push(Event::PointerButton {
                        pos,
                        button: pointer_button(button),
                        pressed,
                        modifiers,
                    });
                }
            }
        }

        if input.mouse_wheel != 0.0 || input.mouse_wheel_h != 0.0 {
            events.push(Event::MouseWheel {
                unit: egui::MouseWheelUnit::Line,
                delta: egui::vec2(input.mouse_wheel_h, input.mouse_wheel),
                modifiers,
            });
        }

        for key_event in &input.key_events {
            events.push(Event::Key {
                key: egui_key(key_event.key),
                physical_key: None,
                pressed: key_event.down,
                repeat: false,
                modifiers,
            });
        }

        let text: String = input
            .input_chars
            .iter()
            .copied()
            .filter(|c| !c.is_control())
            .collect();
        if !text.is_empty() {
            events.push(Event::Text(text));
        }

        self.time += f64::from(input.delta_time);
        egui::RawInput {
            screen_rect: Some(Rect::from_min_size(
                Pos2::ZERO,
                egui::vec2(input.display_size.x, input.display_size.y),
            )),
            time: Some(self.time),
            predicted_dt: input.delta_time,
            modifiers,
            events,
            focused: true,
            ..Default::default()
        }
    }

    fn paint_software_cursor(&self) {
        let Some(tip) = self.pointer else {
            return;
        };
        let painter = self
            .context
            .layer_painter(LayerId::new(Order::Tooltip, Id::new("scene_overlay_cursor")));
        let points = vec![
            tip,
            tip + egui::vec2(0.0, 16.0),
            tip + egui::vec2(4.5, 12.0),
            tip + egui::vec2(11.0, 11.0),
        ];
        painter.add(Shape::convex_polygon(
            points,
            Color32::WHITE,
            Stroke::new(1.0, Color32::BLACK),
        ));
    }
}

impl Default for EguiUi {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl UiContext for EguiUi {
    type DrawData = EguiDrawData;

    fn apply_theme(&mut self, theme: Theme) {
        set_theme(&self.context, theme);
    }

    fn wants_capture(&self) -> Capture {
        self.capture
    }

    fn fonts_built(&self) -> bool {
        self.fonts_built
    }

    fn begin_frame(&mut self, input: &InputSnapshot) {
        let raw_input = self.raw_input(input);
        self.software_cursor = input.draw_cursor;
        self.context.begin_pass(raw_input);
    }

    fn end_frame(&mut self) {
        if self.software_cursor {
            self.paint_software_cursor();
        }
        let output = self.context.end_pass();

        self.cursor = ui_cursor(output.platform_output.cursor_icon);
        if !self.fonts_built
            && output
                .textures_delta
                .set
                .iter()
                .any(|(id, _)| *id == TextureId::default())
        {
            log::debug!("egui font atlas built");
            self.fonts_built = true;
        }
        self.capture = Capture {
            pointer: self.context.wants_pointer_input(),
            keyboard: self.context.wants_keyboard_input(),
        };

        let mut textures_delta = match self.draw_data.take() {
            Some(previous) if !previous.is_painted() => previous.textures_delta,
            _ => TexturesDelta::default(),
        };
        textures_delta.append(output.textures_delta);

        let pixels_per_point = output.pixels_per_point;
        let screen = self.context.screen_rect();
        let primitives = self.context.tessellate(output.shapes, pixels_per_point);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size_in_pixels = [
            (screen.width() * pixels_per_point).round() as u32,
            (screen.height() * pixels_per_point).round() as u32,
        ];
        self.draw_data = Some(EguiDrawData {
            primitives,
            textures_delta,
            pixels_per_point,
            size_in_pixels,
            painted: std::cell::Cell::new(false),
        });
    }

    fn draw_data(&self) -> Option<&EguiDrawData> {
        self.draw_data.as_ref()
    }

    fn mouse_cursor(&self) -> UiCursor {
        self.cursor
    }

    fn show_builtin_panels(&mut self, panels: &mut OverlayPanels) {
        panels::show_builtin_panels(&self.context, panels);
    }
}

fn set_theme(context: &Context, theme: Theme) {
    match theme {
        Theme::Dark => context.set_visuals(egui::Visuals::dark()),
        Theme::Light => context.set_visuals(egui::Visuals::light()),
    }
}

fn egui_modifiers(modifiers: Modifiers) -> egui::Modifiers {
    egui::Modifiers {
        alt: modifiers.alt,
        ctrl: modifiers.ctrl,
        shift: modifiers.shift,
        mac_cmd: false,
        command: modifiers.ctrl,
    }
}

fn pointer_button(button: MouseButton) -> egui::PointerButton {
    match button {
        MouseButton::Left => egui::PointerButton::Primary,
        MouseButton::Middle => egui::PointerButton::Middle,
        MouseButton::Right => egui::PointerButton::Secondary,
    }
}

fn egui_key(key: NavKey) -> egui::Key {
    use egui::Key;
    match key {
        NavKey::Tab => Key::Tab,
        NavKey::LeftArrow => Key::ArrowLeft,
        NavKey::RightArrow => Key::ArrowRight,
        NavKey::UpArrow => Key::ArrowUp,
        NavKey::DownArrow => Key::ArrowDown,
        NavKey::PageUp => Key::PageUp,
        NavKey::PageDown => Key::PageDown,
        NavKey::Home => Key::Home,
        NavKey::End => Key::End,
        NavKey::Insert => Key::Insert,
        NavKey::Delete => Key::Delete,
        NavKey::Backspace => Key::Backspace,
        NavKey::Space => Key::Space,
        NavKey::Enter | NavKey::KeypadEnter => Key::Enter,
        NavKey::Escape => Key::Escape,
        NavKey::A => Key::A,
        NavKey::C => Key::C,
        NavKey::V => Key::V,
        NavKey::X => Key::X,
        NavKey::Y => Key::Y,
        NavKey::Z => Key::Z,
    }
}

fn ui_cursor(icon: CursorIcon) -> UiCursor {
    match icon {
        CursorIcon::None => UiCursor::None,
        CursorIcon::Text | CursorIcon::VerticalText => UiCursor::TextInput,
        CursorIcon::Move | CursorIcon::AllScroll | CursorIcon::Grab | CursorIcon::Grabbing => {
            UiCursor::ResizeAll
        }
        CursorIcon::ResizeVertical
        | CursorIcon::ResizeNorth
        | CursorIcon::ResizeSouth
        | CursorIcon::ResizeRow => UiCursor::ResizeNS,
        CursorIcon::ResizeHorizontal
        | CursorIcon::ResizeEast
        | CursorIcon::ResizeWest
        | CursorIcon::ResizeColumn => UiCursor::ResizeEW,
        CursorIcon::ResizeNeSw | CursorIcon::ResizeNorthEast | CursorIcon::ResizeSouthWest => {
            UiCursor::ResizeNESW
        }
        CursorIcon::ResizeNwSe | CursorIcon::ResizeNorthWest | CursorIcon::ResizeSouthEast => {
            UiCursor::ResizeNWSE
        }
        CursorIcon::PointingHand => UiCursor::Hand,
        CursorIcon::NotAllowed | CursorIcon::NoDrop => UiCursor::NotAllowed,
        _ => UiCursor::Arrow,
    }
}
