//! Input bridge: binds the host's active style and routes each host event to
//! the UI library's input state, the host style, or both.

use std::rc::Rc;

use scene_overlay_core::{
    deliver, resolve_active, EventClass, GraphicsBackend, HostEvent, StyleHandle, UiContext,
    WeakStyle, WheelDirection,
};

use super::Injector;

/// Where an event ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    /// Delivered to the bound host style.
    Forwarded,
    /// Recorded for the UI, withheld from the host because the UI captured it.
    Captured,
    /// Consumed by the overlay itself (focus changes).
    OverlayOnly,
    /// No style was bound, so nothing could be forwarded.
    Unbound,
}

/// The style the bridge forwards to during one pump iteration.
#[derive(Default)]
pub(crate) struct InputBridge {
    bound: Option<WeakStyle>,
    name: String,
}

impl InputBridge {
    /// Binds the active style behind `style`, replacing any previous binding.
    ///
    /// Returns false (and leaves the bridge unbound) when there is no style.
    pub(crate) fn subscribe(&mut self, style: Option<StyleHandle>) -> bool {
        let Some(style) = style else {
            self.unsubscribe();
            return false;
        };
        let active = resolve_active(&style);
        let name = active.borrow().name().to_owned();
        if name != self.name {
            log::debug!("input bridge bound to style '{name}'");
        }
        self.bound = Some(Rc::downgrade(&active));
        self.name = name;
        true
    }

    pub(crate) fn unsubscribe(&mut self) {
        self.bound = None;
    }

    pub(crate) fn is_subscribed(&self) -> bool {
        self.bound.is_some()
    }

    pub(crate) fn bound_style(&self) -> Option<StyleHandle> {
        self.bound.as_ref().and_then(WeakStyle::upgrade)
    }

    fn forward(&self, event: &HostEvent) -> Routing {
        let Some(style) = self.bound_style() else {
            return Routing::Unbound;
        };
        let Ok(mut style) = style.try_borrow_mut() else {
            log::warn!("style '{}' is busy, dropping {event:?}", self.name);
            return Routing::Unbound;
        };
        deliver(&mut *style, event);
        Routing::Forwarded
    }
}

impl<U: UiContext, G: GraphicsBackend<U::DrawData>> Injector<U, G> {
    /// Routes one host event.
    ///
    /// The overlay's own bookkeeping (button edges, wheel, keys, characters)
    /// is updated before the capture check, so the UI sees every event even
    /// when the host also gets it. Pointer and keyboard events then reach the
    /// host only if the UI does not capture that class, or the matching grab
    /// toggle is on. Window events always reach the host.
    pub fn dispatch(&mut self, event: &HostEvent) -> Routing {
        match event {
            HostEvent::Enter => {
                self.focused = true;
                return Routing::OverlayOnly;
            }
            HostEvent::Leave => {
                self.focused = self.options.always_focused;
                return Routing::OverlayOnly;
            }
            HostEvent::ButtonPress(button) => self.edges.press(*button),
            HostEvent::ButtonRelease(button) => self.edges.release(*button),
            HostEvent::ButtonDoubleClick(button) => self.input.double_click(*button),
            HostEvent::Wheel(direction) => match direction {
                WheelDirection::Forward => self.input.mouse_wheel = 1.0,
                WheelDirection::Backward => self.input.mouse_wheel = -1.0,
                WheelDirection::Left => self.input.mouse_wheel_h = 1.0,
                WheelDirection::Right => self.input.mouse_wheel_h = -1.0,
            },
            HostEvent::KeyPress { key_sym, key_code } => {
                self.input.apply_key(key_sym, *key_code, true);
            }
            HostEvent::KeyRelease { key_sym, key_code } => {
                self.input.apply_key(key_sym, *key_code, false);
            }
            HostEvent::Char { key_code, .. } => self.input.add_input_character(*key_code),
            HostEvent::MouseMove
            | HostEvent::Expose
            | HostEvent::Configure
            | HostEvent::Timer
            | HostEvent::Exit => {}
        }

        let capture = self.ui.wants_capture();
        let forward = match event.class() {
            EventClass::Pointer => !capture.pointer || self.panels.grab_mouse,
            EventClass::Keyboard => !capture.keyboard || self.panels.grab_keyboard,
            EventClass::Window => true,
            EventClass::Focus | EventClass::Lifecycle => false,
        };
        if !forward {
            log::trace!("{event:?} captured by the overlay");
            return Routing::Captured;
        }
        self.bridge.forward(event)
    }

    /// Whether a host style is bound for this pump iteration.
    pub fn is_subscribed(&self) -> bool {
        self.bridge.is_subscribed()
    }

    /// The host style events are currently forwarded to.
    pub fn bound_style(&self) -> Option<StyleHandle> {
        self.bridge.bound_style()
    }
}
