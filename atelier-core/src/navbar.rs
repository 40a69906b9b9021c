/// Visual state of the fixed navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Top,
    Scrolled,
}

impl NavbarState {
    /// Class applied to the navbar while scrolled.
    pub const SCROLLED_CLASS: &'static str = "scrolled";

    /// Map the current vertical offset to a state.
    ///
    /// Strictly above `threshold` is scrolled; the result depends on nothing
    /// but the current offset.
    #[must_use]
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    #[must_use]
    pub const fn is_scrolled(self) -> bool {
        matches!(self, Self::Scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(NavbarState::from_offset(0.0, 50.0), NavbarState::Top);
        assert_eq!(NavbarState::from_offset(50.0, 50.0), NavbarState::Top);
        assert_eq!(NavbarState::from_offset(50.5, 50.0), NavbarState::Scrolled);
        assert!(NavbarState::from_offset(1200.0, 50.0).is_scrolled());
    }

    #[test]
    fn scrolling_back_up_clears_state() {
        let offsets = [10.0, 60.0, 300.0, 49.0, 51.0, 0.0];
        let states: Vec<bool> = offsets
            .iter()
            .map(|&y| NavbarState::from_offset(y, 50.0).is_scrolled())
            .collect();
        assert_eq!(states, vec![false, true, true, false, true, false]);
    }
}
