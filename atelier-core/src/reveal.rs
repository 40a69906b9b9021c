//! Bookkeeping for the scroll-triggered card reveal.

/// Classes applied by the reveal animation.
pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

/// CSS `transition-delay` for the element at `index` in the matched set.
#[must_use]
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    let total = u64::try_from(index)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(step_ms));
    format!("{total}ms")
}

/// Tracks which observed elements have already been revealed.
///
/// An element is revealed the first time it is reported intersecting and
/// never again afterwards.
#[derive(Debug, Clone, Default)]
pub struct RevealLedger {
    revealed: Vec<bool>,
}

impl RevealLedger {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Record an intersection report and return whether to reveal now.
    ///
    /// Unknown indices are ignored.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if intersecting && !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.revealed.iter().filter(|seen| !**seen).count()
    }
}
