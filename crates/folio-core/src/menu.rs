//! Mobile menu open/closed state.
//!
//! The flag is mirrored onto the toggle button and the nav panel as a class,
//! so the browser layer applies [`MenuState::is_open`] to both after every
//! transition.

/// Open/closed flag shared by the hamburger button and the nav panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the flag (toggle button clicked). Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Clear the flag (a link was activated). Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MenuState::new().is_open());
    }

    #[test]
    fn test_toggle_flips() {
        let mut menu = MenuState::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_reports_previous_state() {
        let mut menu = MenuState::new();
        assert!(!menu.close());

        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }
}
