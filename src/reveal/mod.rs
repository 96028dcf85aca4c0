//! Reveal-on-scroll state for the landing page sections.
//!
//! The controller here is pure: one `RevealPhase` per watched element and a
//! threshold rule deciding when it flips. The `observer` module feeds it
//! intersection ratios from the browser and writes the resulting styles back
//! to the DOM, so every style change is derived from an explicit state
//! transition instead of being accumulated on the node.

pub mod observer;

/// Offset applied to an element while it waits to reveal.
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";

/// Registered up front so the hidden -> revealed flip animates.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

/// Visual state of a single watched element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Revealed,
}

/// Threshold-crossing state machine for a fixed set of watched elements.
///
/// Transitions are one-way: once an element has revealed, later ratios are
/// ignored no matter how far it leaves the viewport again.
#[derive(Debug)]
pub struct ViewportReveal {
    threshold: f64,
    phases: Vec<RevealPhase>,
}

impl ViewportReveal {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            threshold,
            phases: vec![RevealPhase::Hidden; count],
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn phase(&self, index: usize) -> Option<RevealPhase> {
        self.phases.get(index).copied()
    }

    /// Feed one visibility ratio for the element at `index`.
    ///
    /// Returns `true` exactly when this call flips the element to
    /// `Revealed`; duplicate or sub-threshold ratios return `false` and
    /// change nothing. Indices outside the watched set are ignored.
    pub fn on_visibility(&mut self, index: usize, ratio: f64) -> bool {
        if let Some(phase) = self.phases.get_mut(index) {
            if *phase == RevealPhase::Hidden && ratio >= self.threshold {
                *phase = RevealPhase::Revealed;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_element_starts_hidden() {
        let reveal = ViewportReveal::new(3, 0.15);
        assert_eq!(reveal.len(), 3);
        for i in 0..3 {
            assert_eq!(reveal.phase(i), Some(RevealPhase::Hidden));
        }
    }

    #[test]
    fn hidden_state_carries_an_offset() {
        assert!(HIDDEN_TRANSFORM.contains("translateY"));
        assert!(REVEAL_TRANSITION.contains("opacity"));
        assert!(REVEAL_TRANSITION.contains("transform"));
    }

    #[test]
    fn reveal_is_one_way() {
        // Ratio dips after the crossing must not revert the element.
        let mut reveal = ViewportReveal::new(1, 0.2);
        assert!(!reveal.on_visibility(0, 0.0));
        assert!(reveal.on_visibility(0, 0.25));
        assert!(!reveal.on_visibility(0, 0.05));
        assert_eq!(reveal.phase(0), Some(RevealPhase::Revealed));
    }

    #[test]
    fn duplicate_reveal_is_a_no_op() {
        let mut reveal = ViewportReveal::new(1, 0.15);
        assert!(reveal.on_visibility(0, 0.5));
        assert!(!reveal.on_visibility(0, 0.5));
        assert_eq!(reveal.phase(0), Some(RevealPhase::Revealed));
    }

    #[test]
    fn exact_threshold_reveals() {
        let mut reveal = ViewportReveal::new(1, 0.15);
        assert!(reveal.on_visibility(0, 0.15));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut reveal = ViewportReveal::new(2, 0.15);
        assert!(!reveal.on_visibility(5, 1.0));
        assert_eq!(reveal.phase(0), Some(RevealPhase::Hidden));
        assert_eq!(reveal.phase(1), Some(RevealPhase::Hidden));
        assert_eq!(reveal.phase(5), None);
    }

    #[test]
    fn empty_watched_set_is_a_no_op() {
        let mut reveal = ViewportReveal::new(0, 0.15);
        assert!(reveal.is_empty());
        assert!(!reveal.on_visibility(0, 1.0));
    }
}
