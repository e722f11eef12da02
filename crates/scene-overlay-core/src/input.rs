//! The overlay's input model.
//!
//! [`InputState`] accumulates what the input bridge learns between two
//! frames. At frame start it is folded, together with the button edge table
//! and the pointer position, into an [`InputSnapshot`] that the UI library
//! reads for exactly one frame.

use glam::Vec2;

use crate::event::MouseButton;
use crate::keymap::NavKey;

/// Size of the key-down bitmap, indexed by platform key code.
pub const KEY_COUNT: usize = 512;

/// Keyboard modifier state as the UI library sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl Modifiers {
    /// Derives modifier state from the key symbol of a key event.
    ///
    /// Host modifier flags are not trustworthy on every platform (X11 in
    /// particular), so the modifier name is looked up in the key symbol
    /// instead. Every key event recomputes all four flags: a modifier only
    /// reads as held while its own key is the one going down.
    #[must_use]
    pub fn from_key_sym(key_sym: &str, down: bool) -> Self {
        let named = |upper: &str, lower: &str| key_sym.contains(upper) || key_sym.contains(lower);
        Self {
            ctrl: down && named("Control", "control"),
            shift: down && named("Shift", "shift"),
            alt: down && named("Alt", "alt"),
            super_key: down && matches!(key_sym, "Win_L" | "Win_R" | "Super_L" | "Super_R"),
        }
    }

    /// Whether any modifier is held.
    #[must_use]
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt || self.super_key
    }
}

/// Bitmap of held keys, indexed by platform key code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysDown {
    bits: [u64; KEY_COUNT / 64],
}

impl Default for KeysDown {
    fn default() -> Self {
        Self {
            bits: [0; KEY_COUNT / 64],
        }
    }
}

impl KeysDown {
    /// Records `code` as held or released.
    ///
    /// Returns false (and changes nothing) for codes outside `0..KEY_COUNT`.
    pub fn set(&mut self, code: i32, down: bool) -> bool {
        let Some(index) = Self::index(code) else {
            return false;
        };
        let mask = 1u64 << (index % 64);
        if down {
            self.bits[index / 64] |= mask;
        } else {
            self.bits[index / 64] &= !mask;
        }
        true
    }

    /// Whether `code` is held.
    #[must_use]
    pub fn is_down(&self, code: i32) -> bool {
        Self::index(code).is_some_and(|index| self.bits[index / 64] & (1u64 << (index % 64)) != 0)
    }

    /// Number of held keys.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().map(|word| word.count_ones() as usize).sum()
    }

    fn index(code: i32) -> Option<usize> {
        usize::try_from(code).ok().filter(|&index| index < KEY_COUNT)
    }
}

/// The per-button "just pressed" edge table.
///
/// Only plain press/release events touch it; double clicks do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonEdges([bool; 3]);

impl ButtonEdges {
    /// Marks `button` as held.
    pub fn press(&mut self, button: MouseButton) {
        self.0[button.index()] = true;
    }

    /// Marks `button` as released.
    pub fn release(&mut self, button: MouseButton) {
        self.0[button.index()] = false;
    }

    /// Whether `button` is held.
    #[must_use]
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.0[button.index()]
    }

    /// The table in left/middle/right order.
    #[must_use]
    pub fn as_array(&self) -> [bool; 3] {
        self.0
    }
}

/// A navigation key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: NavKey,
    pub down: bool,
}

/// Input gathered between two overlay frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last pointer position in UI coordinates (top-left origin).
    pub mouse_pos: Option<Vec2>,
    /// Double clicks seen since the last frame.
    pub mouse_double_clicked: [bool; 3],
    /// Vertical wheel, +1 forward, -1 backward.
    pub mouse_wheel: f32,
    /// Horizontal wheel, +1 left, -1 right.
    pub mouse_wheel_h: f32,
    /// Held keys by platform key code.
    pub keys_down: KeysDown,
    /// Modifier state derived from the last key event.
    pub modifiers: Modifiers,
    /// Navigation key transitions since the last frame.
    pub key_events: Vec<KeyEvent>,
    /// Characters typed since the last frame.
    pub input_chars: Vec<char>,
}

impl InputState {
    /// Queues a typed character. Zero and invalid code points are dropped.
    pub fn add_input_character(&mut self, code: u32) {
        if code == 0 {
            return;
        }
        if let Some(c) = char::from_u32(code) {
            self.input_chars.push(c);
        }
    }

    /// Applies a key press or release.
    pub fn apply_key(&mut self, key_sym: &str, key_code: i32, down: bool) {
        self.keys_down.set(key_code, down);
        self.modifiers = Modifiers::from_key_sym(key_sym, down);
        if let Some(key) = NavKey::from_key_sym(key_sym) {
            self.key_events.push(KeyEvent { key, down });
        }
    }

    /// Records a double click on `button`.
    pub fn double_click(&mut self, button: MouseButton) {
        self.mouse_double_clicked[button.index()] = true;
    }

    /// Builds this frame's snapshot and clears the per-frame transients.
    ///
    /// Held keys, modifiers and the pointer position carry over to the next
    /// frame; wheel, double clicks, key transitions and characters do not.
    pub fn take_snapshot(&mut self, frame: FrameInput, edges: ButtonEdges) -> InputSnapshot {
        if let Some(pos) = frame.pointer {
            self.mouse_pos = Some(pos);
        }
        InputSnapshot {
            display_size: frame.display_size,
            framebuffer_scale: Vec2::ONE,
            delta_time: frame.delta_time,
            mouse_pos: self.mouse_pos,
            mouse_down: edges.as_array(),
            mouse_double_clicked: std::mem::take(&mut self.mouse_double_clicked),
            mouse_wheel: std::mem::take(&mut self.mouse_wheel),
            mouse_wheel_h: std::mem::take(&mut self.mouse_wheel_h),
            keys_down: self.keys_down.clone(),
            modifiers: self.modifiers,
            key_events: std::mem::take(&mut self.key_events),
            input_chars: std::mem::take(&mut self.input_chars),
            draw_cursor: frame.draw_cursor,
        }
    }
}

/// Per-frame values the frame sequencer contributes to a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Render window size in pixels.
    pub display_size: Vec2,
    /// Seconds since the previous overlay frame.
    pub delta_time: f32,
    /// Fresh pointer position in UI coordinates, when focused.
    pub pointer: Option<Vec2>,
    /// Whether the UI draws its own cursor.
    pub draw_cursor: bool,
}

/// Everything the UI library reads for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSnapshot {
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
    pub delta_time: f32,
    pub mouse_pos: Option<Vec2>,
    pub mouse_down: [bool; 3],
    pub mouse_double_clicked: [bool; 3],
    pub mouse_wheel: f32,
    pub mouse_wheel_h: f32,
    pub keys_down: KeysDown,
    pub modifiers: Modifiers,
    pub key_events: Vec<KeyEvent>,
    pub input_chars: Vec<char>,
    pub draw_cursor: bool,
}

/// Converts a host pointer position (bottom-left origin) into UI
/// coordinates (top-left origin).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn host_to_ui(position: (i32, i32), display_height: f32) -> Vec2 {
    Vec2::new(position.0 as f32, display_height - position.1 as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(pointer: Option<Vec2>) -> FrameInput {
        FrameInput {
            display_size: Vec2::new(800.0, 600.0),
            delta_time: 0.016,
            pointer,
            draw_cursor: false,
        }
    }

    #[test]
    fn test_modifiers_from_key_sym() {
        assert!(Modifiers::from_key_sym("Control_L", true).ctrl);
        assert!(Modifiers::from_key_sym("Shift_R", true).shift);
        assert!(Modifiers::from_key_sym("Alt_L", true).alt);
        assert!(Modifiers::from_key_sym("Super_L", true).super_key);
        assert!(Modifiers::from_key_sym("Win_R", true).super_key);
        assert!(!Modifiers::from_key_sym("Control_L", false).any());
    }

    #[test]
    fn test_other_key_clears_modifiers() {
        let mut input = InputState::default();
        input.apply_key("Control_L", 37, true);
        assert!(input.modifiers.ctrl);
        input.apply_key("c", 54, true);
        assert!(!input.modifiers.ctrl);
    }

    #[test]
    fn test_keys_down_bounds() {
        let mut keys = KeysDown::default();
        assert!(keys.set(0, true));
        assert!(keys.set(511, true));
        assert!(!keys.set(512, true));
        assert!(!keys.set(-1, true));
        assert!(keys.is_down(511));
        assert!(!keys.is_down(512));
        assert_eq!(keys.count(), 2);
        keys.set(0, false);
        assert!(!keys.is_down(0));
    }

    #[test]
    fn test_characters() {
        let mut input = InputState::default();
        input.add_input_character(u32::from('h'));
        input.add_input_character(0);
        input.add_input_character(0xD800);
        input.add_input_character(u32::from('i'));
        assert_eq!(input.input_chars, vec!['h', 'i']);
    }

    #[test]
    fn test_snapshot_clears_transients() {
        let mut input = InputState::default();
        input.mouse_wheel = 1.0;
        input.double_click(MouseButton::Right);
        input.apply_key("Return", 36, true);
        input.add_input_character(u32::from('x'));

        let mut edges = ButtonEdges::default();
        edges.press(MouseButton::Left);

        let snapshot = input.take_snapshot(frame(Some(Vec2::new(10.0, 20.0))), edges);
        assert_eq!(snapshot.mouse_down, [true, false, false]);
        assert_eq!(snapshot.mouse_double_clicked, [false, false, true]);
        assert!((snapshot.mouse_wheel - 1.0).abs() < f32::EPSILON);
        assert_eq!(snapshot.key_events.len(), 1);
        assert_eq!(snapshot.input_chars, vec!['x']);
        assert!(snapshot.keys_down.is_down(36));

        let next = input.take_snapshot(frame(None), edges);
        assert_eq!(next.mouse_double_clicked, [false; 3]);
        assert!(next.mouse_wheel.abs() < f32::EPSILON);
        assert!(next.key_events.is_empty());
        assert!(next.input_chars.is_empty());
        assert!(next.keys_down.is_down(36));
        assert_eq!(next.mouse_pos, Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn test_double_click_leaves_edges() {
        let mut input = InputState::default();
        input.double_click(MouseButton::Left);
        let snapshot = input.take_snapshot(frame(None), ButtonEdges::default());
        assert!(snapshot.mouse_double_clicked[0]);
        assert!(!snapshot.mouse_down[0]);
    }

    #[test]
    fn test_host_to_ui_flips_y() {
        assert_eq!(host_to_ui((10, 0), 600.0), Vec2::new(10.0, 600.0));
        assert_eq!(host_to_ui((10, 600), 600.0), Vec2::new(10.0, 0.0));
    }

    proptest::proptest! {
        #[test]
        fn test_keys_down_matches_set(ops in proptest::collection::vec((-8i32..600, proptest::bool::ANY), 0..64)) {
            let mut keys = KeysDown::default();
            let mut model = std::collections::BTreeSet::new();
            for (code, down) in ops {
                let in_range = (0..KEY_COUNT as i32).contains(&code);
                proptest::prop_assert_eq!(keys.set(code, down), in_range);
                if in_range {
                    if down {
                        model.insert(code);
                    } else {
                        model.remove(&code);
                    }
                }
            }
            proptest::prop_assert_eq!(keys.count(), model.len());
            for code in -8..600 {
                proptest::prop_assert_eq!(keys.is_down(code), model.contains(&code));
            }
        }
    }
}
