//! Events delivered by the host interactor.

/// A mouse button, in the order the UI library indexes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left (primary) button.
    Left,
    /// Middle button.
    Middle,
    /// Right (secondary) button.
    Right,
}

impl MouseButton {
    /// All buttons, in edge-table order.
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

    /// Slot of this button in the edge table.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }
}

/// Direction of a mouse wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    /// Wheel rolled away from the user.
    Forward,
    /// Wheel rolled towards the user.
    Backward,
    /// Horizontal tilt to the left.
    Left,
    /// Horizontal tilt to the right.
    Right,
}

/// An event pulled from the host interactor's queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Pointer entered the render window.
    Enter,
    /// Pointer left the render window.
    Leave,
    /// Pointer moved; the position is read back from the interactor.
    MouseMove,
    /// A mouse button went down.
    ButtonPress(MouseButton),
    /// A mouse button went up.
    ButtonRelease(MouseButton),
    /// A mouse button was double-clicked.
    ButtonDoubleClick(MouseButton),
    /// One wheel step.
    Wheel(WheelDirection),
    /// The window needs repainting.
    Expose,
    /// The window was resized or moved.
    Configure,
    /// A host timer fired.
    Timer,
    /// A key went down.
    KeyPress {
        /// Platform key-symbol name, e.g. `Control_L` or `Return`.
        key_sym: String,
        /// Platform key code.
        key_code: i32,
    },
    /// A key went up.
    KeyRelease {
        /// Platform key-symbol name.
        key_sym: String,
        /// Platform key code.
        key_code: i32,
    },
    /// A character was typed.
    Char {
        /// Platform key-symbol name.
        key_sym: String,
        /// Character code of the typed key.
        key_code: u32,
    },
    /// The host asked the application to exit.
    Exit,
}

/// Which input class an event belongs to, for capture decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventClass {
    /// Enter/leave. Only changes pointer focus.
    Focus,
    /// Move, buttons and wheel.
    Pointer,
    /// Key down/up and characters.
    Keyboard,
    /// Expose, configure and timer. Never claimed by the UI.
    Window,
    /// Exit request.
    Lifecycle,
}

impl HostEvent {
    /// Classifies the event.
    #[must_use]
    pub fn class(&self) -> EventClass {
        match self {
            HostEvent::Enter | HostEvent::Leave => EventClass::Focus,
            HostEvent::MouseMove
            | HostEvent::ButtonPress(_)
            | HostEvent::ButtonRelease(_)
            | HostEvent::ButtonDoubleClick(_)
            | HostEvent::Wheel(_) => EventClass::Pointer,
            HostEvent::KeyPress { .. } | HostEvent::KeyRelease { .. } | HostEvent::Char { .. } => {
                EventClass::Keyboard
            }
            HostEvent::Expose | HostEvent::Configure | HostEvent::Timer => EventClass::Window,
            HostEvent::Exit => EventClass::Lifecycle,
        }
    }
}
