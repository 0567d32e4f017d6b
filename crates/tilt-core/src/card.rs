//! Interaction policy of the profile card around its tilt engine.
//!
//! The engine itself knows nothing about flipping or buttons; the host keeps
//! a `CardState`, consults [`CardState::accepts_pointer`] before forwarding
//! motion, and recenters the engine whenever a transition asks for it.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    pub flipped: bool,
    pub control_hovered: bool,
    /// Pointer tilt is visibly applied (`active` class).
    pub active: bool,
    /// Short transition window right after the pointer entered.
    pub entering: bool,
}

impl CardState {
    #[inline]
    pub fn accepts_pointer(&self) -> bool {
        !self.flipped && !self.control_hovered
    }

    /// Returns false when the pointer is currently ignored.
    pub fn pointer_entered(&mut self) -> bool {
        if !self.accepts_pointer() {
            return false;
        }
        self.active = true;
        self.entering = true;
        true
    }

    pub fn enter_transition_elapsed(&mut self) {
        self.entering = false;
    }

    /// Flip the card. Returns true when the engine should recenter.
    pub fn toggle_flip(&mut self) -> bool {
        self.clear_tilt();
        let recenter = !self.flipped;
        self.flipped = !self.flipped;
        recenter
    }

    /// Returns true when the engine should recenter.
    pub fn set_control_hovered(&mut self, hovered: bool) -> bool {
        self.control_hovered = hovered;
        if hovered {
            self.clear_tilt();
        }
        hovered
    }

    /// Leave-settle check passed: drop the tilt styling.
    pub fn settled(&mut self) {
        self.active = false;
    }

    fn clear_tilt(&mut self) {
        self.active = false;
        self.entering = false;
    }
}
