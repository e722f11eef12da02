//! Interaction styles: the host's polymorphic input handlers.
//!
//! A style turns raw input into scene manipulation (orbit, pan, zoom, ...).
//! Every hook has a no-op default so a style only overrides what it handles.
//! The host owns its styles; the overlay only ever holds a [`WeakStyle`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::event::{HostEvent, MouseButton, WheelDirection};

/// Shared handle to an interaction style owned by the host.
pub type StyleHandle = Rc<RefCell<dyn InteractionStyle>>;

/// Non-owning reference to an interaction style.
pub type WeakStyle = Weak<RefCell<dyn InteractionStyle>>;

/// Named event hooks of a host interaction style.
///
/// Pointer focus (enter/leave) is consumed by the overlay and has no hook.
pub trait InteractionStyle {
    /// Human readable name, used in diagnostics.
    fn name(&self) -> &str {
        "InteractionStyle"
    }

    /// The style that actually handles events, if this one only switches
    /// between others (e.g. trackball vs. joystick).
    fn current_delegate(&self) -> Option<StyleHandle> {
        None
    }

    fn on_mouse_move(&mut self) {}

    fn on_left_button_down(&mut self) {}
    fn on_left_button_up(&mut self) {}
    fn on_left_button_double_click(&mut self) {}
    fn on_middle_button_down(&mut self) {}
    fn on_middle_button_up(&mut self) {}
    fn on_middle_button_double_click(&mut self) {}
    fn on_right_button_down(&mut self) {}
    fn on_right_button_up(&mut self) {}
    fn on_right_button_double_click(&mut self) {}

    fn on_mouse_wheel_forward(&mut self) {}
    fn on_mouse_wheel_backward(&mut self) {}
    fn on_mouse_wheel_left(&mut self) {}
    fn on_mouse_wheel_right(&mut self) {}

    fn on_expose(&mut self) {}
    fn on_configure(&mut self) {}
    fn on_timer(&mut self) {}

    fn on_key_down(&mut self) {}
    fn on_key_press(&mut self) {}
    fn on_key_up(&mut self) {}
    fn on_key_release(&mut self) {}
    fn on_char(&mut self) {}
}

/// Resolves the style that should receive events.
///
/// Switch styles hand out their current delegate; anything else is itself.
#[must_use]
pub fn resolve_active(style: &StyleHandle) -> StyleHandle {
    let delegate = style.borrow().current_delegate();
    delegate.unwrap_or_else(|| Rc::clone(style))
}

/// Calls the hook(s) matching `event` on `style`.
///
/// Key presses reach both `on_key_down` and `on_key_press` (and releases both
/// `on_key_up` and `on_key_release`), the way hosts report them.
/// Focus and exit events have no forwarding hook here.
pub fn deliver(style: &mut dyn InteractionStyle, event: &HostEvent) {
    match event {
        HostEvent::MouseMove => style.on_mouse_move(),
        HostEvent::ButtonPress(button) => match button {
            MouseButton::Left => style.on_left_button_down(),
            MouseButton::Middle => style.on_middle_button_down(),
            MouseButton::Right => style.on_right_button_down(),
        },
        HostEvent::ButtonRelease(button) => match button {
            MouseButton::Left => style.on_left_button_up(),
            MouseButton::Middle => style.on_middle_button_up(),
            MouseButton::Right => style.on_right_button_up(),
        },
        HostEvent::ButtonDoubleClick(button) => match button {
            MouseButton::Left => style.on_left_button_double_click(),
            MouseButton::Middle => style.on_middle_button_double_click(),
            MouseButton::Right => style.on_right_button_double_click(),
        },
        HostEvent::Wheel(direction) => match direction {
            WheelDirection::Forward => style.on_mouse_wheel_forward(),
            WheelDirection::Backward => style.on_mouse_wheel_backward(),
            WheelDirection::Left => style.on_mouse_wheel_left(),
            WheelDirection::Right => style.on_mouse_wheel_right(),
        },
        HostEvent::Expose => style.on_expose(),
        HostEvent::Configure => style.on_configure(),
        HostEvent::Timer => style.on_timer(),
        HostEvent::KeyPress { .. } => {
            style.on_key_down();
            style.on_key_press();
        }
        HostEvent::KeyRelease { .. } => {
            style.on_key_up();
            style.on_key_release();
        }
        HostEvent::Char { .. } => style.on_char(),
        HostEvent::Enter | HostEvent::Leave | HostEvent::Exit => {}
    }
}

/// A style that delegates to one of several styles, switchable at runtime.
pub struct StyleSwitch {
    styles: Vec<StyleHandle>,
    current: usize,
}

impl StyleSwitch {
    /// Creates a switch over `styles`, starting with the first.
    #[must_use]
    pub fn new(styles: Vec<StyleHandle>) -> Self {
        Self { styles, current: 0 }
    }

    /// Makes the style at `index` current. Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) {
        if index < self.styles.len() {
            self.current = index;
        } else {
            log::warn!(
                "style switch: index {index} out of range ({} styles)",
                self.styles.len()
            );
        }
    }

    /// Index of the current style.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }
}

impl InteractionStyle for StyleSwitch {
    fn name(&self) -> &str {
        "StyleSwitch"
    }

    fn current_delegate(&self) -> Option<StyleHandle> {
        self.styles.get(self.current).cloned()
    }
}
