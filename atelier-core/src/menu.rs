//! Mobile navigation panel state machine.

/// Whether the mobile navigation panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Interactions the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger activator was clicked.
    Toggle,
    /// A navigation link inside the panel was clicked.
    LinkClicked,
    /// A click reached the document; flags say whether it landed inside the
    /// activator or the panel.
    DocumentClick { in_toggle: bool, in_menu: bool },
}

impl MenuState {
    /// Class carried by both the activator and the panel while open.
    pub const ACTIVE_CLASS: &'static str = "active";

    #[must_use]
    pub const fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            MenuEvent::LinkClicked => Self::Closed,
            MenuEvent::DocumentClick { in_toggle, in_menu } => {
                if in_toggle || in_menu {
                    self
                } else {
                    Self::Closed
                }
            }
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Value for the body `overflow` property; empty restores the stylesheet.
    #[must_use]
    pub const fn body_overflow(self) -> &'static str {
        match self {
            Self::Open => "hidden",
            Self::Closed => "",
        }
    }
}
