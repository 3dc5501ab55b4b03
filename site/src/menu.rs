//! Mobile navigation menu state.
//!
//! The header owns exactly one [`Menu`]. Nothing else reads or writes the
//! underlying [`MenuState`]; callers go through the two actions:
//!
//! ```text
//!            toggle
//!   Closed ─────────▶ Open
//!     ▲  ◀───────────  │
//!     │     toggle     │
//!     └────────────────┘
//!       link activated
//! ```
//!
//! The inline page script applies the same transitions in the browser
//! (see [`crate::styles::PAGE_SCRIPT`]).

/// Open/closed state of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Value written to `data-menu-state`.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Action handle around the menu state.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    state: MenuState,
}

impl Menu {
    /// A freshly mounted header starts closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Menu button pressed.
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        tracing::trace!(state = self.state.as_str(), "menu toggled");
        self.state
    }

    /// A navigation link was followed. Always leaves the menu closed.
    pub fn activate_link(&mut self) -> MenuState {
        self.state = MenuState::Closed;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = Menu::new();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut menu = Menu::new();
        assert_eq!(menu.toggle(), MenuState::Open);
        assert_eq!(menu.toggle(), MenuState::Closed);
    }

    #[test]
    fn link_activation_closes_open_menu() {
        let mut menu = Menu::new();
        menu.toggle();
        assert!(menu.is_open());

        assert_eq!(menu.activate_link(), MenuState::Closed);
    }

    #[test]
    fn link_activation_keeps_closed_menu_closed() {
        let mut menu = Menu::new();
        assert_eq!(menu.activate_link(), MenuState::Closed);
        assert_eq!(menu.toggle(), MenuState::Open);
    }

    #[test]
    fn state_names() {
        assert_eq!(MenuState::Closed.as_str(), "closed");
        assert_eq!(MenuState::Open.as_str(), "open");
    }
}
