//! Mapping from platform key-symbol names to the keys the UI library
//! needs for navigation, editing and clipboard shortcuts.

/// Keys the UI library reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Tab,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    Backspace,
    Space,
    Enter,
    Escape,
    KeypadEnter,
    A,
    C,
    V,
    X,
    Y,
    Z,
}

impl NavKey {
    /// Looks up a key-symbol name (X11 naming, which most hosts reuse).
    ///
    /// Letters match in either case.
    #[must_use]
    pub fn from_key_sym(key_sym: &str) -> Option<Self> {
        let key = match key_sym {
            "Tab" | "ISO_Left_Tab" => NavKey::Tab,
            "Left" => NavKey::LeftArrow,
            "Right" => NavKey::RightArrow,
            "Up" => NavKey::UpArrow,
            "Down" => NavKey::DownArrow,
            "Page_Up" | "Prior" => NavKey::PageUp,
            "Page_Down" | "Next" => NavKey::PageDown,
            "Home" => NavKey::Home,
            "End" => NavKey::End,
            "Insert" => NavKey::Insert,
            "Delete" => NavKey::Delete,
            "BackSpace" => NavKey::Backspace,
            "space" | "Space" => NavKey::Space,
            "Return" => NavKey::Enter,
            "Escape" => NavKey::Escape,
            "KP_Enter" => NavKey::KeypadEnter,
            "a" | "A" => NavKey::A,
            "c" | "C" => NavKey::C,
            "v" | "V" => NavKey::V,
            "x" | "X" => NavKey::X,
            "y" | "Y" => NavKey::Y,
            "z" | "Z" => NavKey::Z,
            _ => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(NavKey::from_key_sym("Left"), Some(NavKey::LeftArrow));
        assert_eq!(NavKey::from_key_sym("Prior"), Some(NavKey::PageUp));
        assert_eq!(NavKey::from_key_sym("Page_Down"), Some(NavKey::PageDown));
        assert_eq!(NavKey::from_key_sym("KP_Enter"), Some(NavKey::KeypadEnter));
        assert_eq!(NavKey::from_key_sym("BackSpace"), Some(NavKey::Backspace));
    }

    #[test]
    fn test_letters_any_case() {
        assert_eq!(NavKey::from_key_sym("c"), Some(NavKey::C));
        assert_eq!(NavKey::from_key_sym("C"), Some(NavKey::C));
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(NavKey::from_key_sym("F5"), None);
        assert_eq!(NavKey::from_key_sym("Control_L"), None);
        assert_eq!(NavKey::from_key_sym(""), None);
    }
}
