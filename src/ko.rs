//! Ko tracking.
//!
//! Only the single-stone-for-single-stone shape is recognised: a lone stone
//! that captures exactly one stone arms a ko for the next move index, during
//! which the opponent may not play back on the captured point.

use tracing::debug;

use crate::board::Coord;

/// An armed ko, valid only for move `index + 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KoState {
    /// Index of the capturing move.
    pub index: usize,
    /// Where the capturing stone was played.
    pub played: Coord,
    /// Where the captured stone stood; the point an immediate retake would use.
    pub captured: Coord,
}

#[derive(Clone, Debug, Default)]
pub struct KoTracker {
    state: Option<KoState>,
}

impl KoTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<KoState> {
        self.state
    }

    /// Drop a ko that was not armed by the immediately preceding index.
    pub fn expire(&mut self, index: usize) {
        if let Some(ko) = self.state {
            if ko.index + 1 != index {
                debug!(armed = ko.index, index, "ko expired");
                self.state = None;
            }
        }
    }

    /// Whether playing at `c` on move `index` would retake the armed ko.
    pub fn is_violation(&self, index: usize, c: Coord) -> bool {
        self.state
            .is_some_and(|ko| ko.index + 1 == index && ko.captured == c)
    }

    /// Arm a ko after move `index`, or clear it if the move was not a ko capture.
    pub fn record(&mut self, index: usize, played: Coord, captured: &[Coord], group_size: usize) {
        self.state = match captured {
            [single] if group_size == 1 => {
                debug!(index, %played, captured = %single, "ko armed");
                Some(KoState {
                    index,
                    played,
                    captured: *single,
                })
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arms_only_for_single_for_single() {
        let mut ko = KoTracker::new();
        let played = Coord::new(2, 1);
        let taken = Coord::new(1, 1);

        ko.record(4, played, &[taken], 2);
        assert_eq!(ko.active(), None, "placed group is not a lone stone");

        ko.record(4, played, &[taken, Coord::new(0, 1)], 1);
        assert_eq!(ko.active(), None, "two stones captured");

        ko.record(4, played, &[taken], 1);
        assert_eq!(
            ko.active(),
            Some(KoState {
                index: 4,
                played,
                captured: taken
            })
        );
    }

    #[test]
    fn test_violation_only_on_next_index_and_captured_point() {
        let mut ko = KoTracker::new();
        ko.record(4, Coord::new(2, 1), &[Coord::new(1, 1)], 1);
        assert!(ko.is_violation(5, Coord::new(1, 1)));
        assert!(!ko.is_violation(5, Coord::new(2, 1)));
        assert!(!ko.is_violation(6, Coord::new(1, 1)));
    }

    #[test]
    fn test_expire_after_one_ply() {
        let mut ko = KoTracker::new();
        ko.record(4, Coord::new(2, 1), &[Coord::new(1, 1)], 1);
        ko.expire(5);
        assert!(ko.active().is_some());
        ko.expire(6);
        assert!(ko.active().is_none());
    }

    #[test]
    fn test_record_without_capture_clears() {
        let mut ko = KoTracker::new();
        ko.record(4, Coord::new(2, 1), &[Coord::new(1, 1)], 1);
        ko.record(5, Coord::new(7, 7), &[], 1);
        assert!(ko.active().is_none());
    }
}
