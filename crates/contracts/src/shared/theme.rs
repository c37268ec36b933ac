//! Light/dark theme state shared by every view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub is_dark_mode: bool,
}

impl ThemeState {
    pub fn new(is_dark_mode: bool) -> Self {
        Self { is_dark_mode }
    }

    pub fn toggle(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
    }

    /// CSS class for the layout root: `"dark"` or `"light"`.
    pub fn as_class(&self) -> &'static str {
        if self.is_dark_mode {
            "dark"
        } else {
            "light"
        }
    }

    /// Label of the toggle button (describes the action, not the state).
    pub fn toggle_title(&self) -> &'static str {
        if self.is_dark_mode {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        for initial in [false, true] {
            let mut theme = ThemeState::new(initial);
            theme.toggle();
            assert_eq!(theme.is_dark_mode, !initial);
            theme.toggle();
            assert_eq!(theme.is_dark_mode, initial);
        }
    }

    #[test]
    fn test_as_class() {
        let mut theme = ThemeState::default();
        assert_eq!(theme.as_class(), "light");
        theme.toggle();
        assert_eq!(theme.as_class(), "dark");
    }
}
