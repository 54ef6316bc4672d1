/// Visibility of the contact overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Which part of the overlay received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    Background,
    Content,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Clicking the dimmed background dismisses the overlay; clicks that
    /// land on the contact card do not.
    pub fn overlay_clicked(&mut self, target: OverlayTarget) {
        if self.is_open() && target == OverlayTarget::Background {
            *self = MenuState::Closed;
        }
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }
}
