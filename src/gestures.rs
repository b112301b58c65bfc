use crate::error::{Error, Result};
use crate::types::{LandmarkSet, WinkEvent};

/// Classifies single-eye winks from blink scores.
///
/// Stateless: every call looks at one frame only, so a flickering blink
/// produces one event per frame it crosses the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureController {
    pub wink_threshold: f64,
}

impl Default for GestureController {
    fn default() -> Self {
        Self {
            wink_threshold: Self::DEFAULT_WINK_THRESHOLD,
        }
    }
}

impl GestureController {
    /// Low enough to register through glasses, which damp the blink scores.
    pub const DEFAULT_WINK_THRESHOLD: f64 = 0.10;

    /// Rejects negative or non-finite thresholds: a negative one turns
    /// equal scores into a wink, NaN never fires.
    pub fn new(wink_threshold: f64) -> Result<Self> {
        if !wink_threshold.is_finite() || wink_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "wink threshold must be a finite value >= 0, got {}",
                wink_threshold
            )));
        }
        Ok(Self { wink_threshold })
    }

    /// Relative comparison of the two blink scores.
    ///
    /// Names follow the mirrored feed: a right blink score well above the
    /// left one reports `Left`, and the reverse reports `Right`.
    pub fn detect_wink(&self, left_blink: f64, right_blink: f64) -> WinkEvent {
        let diff = left_blink - right_blink;
        if -diff > self.wink_threshold {
            WinkEvent::Left
        } else if diff > self.wink_threshold {
            WinkEvent::Right
        } else {
            WinkEvent::None
        }
    }

    /// Thumb/index pinch. Not implemented yet; always an error so callers
    /// cannot mistake it for a real "no pinch".
    pub fn detect_hand_pinch(&self, _hands: &[LandmarkSet]) -> Result<bool> {
        Err(Error::Unsupported("hand pinch detection"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winks_follow_mirrored_naming() {
        let g = GestureController::default();
        assert_eq!(g.detect_wink(0.8, 0.1), WinkEvent::Right);
        assert_eq!(g.detect_wink(0.1, 0.8), WinkEvent::Left);
    }

    #[test]
    fn small_or_equal_differences_are_not_winks() {
        let g = GestureController::default();
        assert_eq!(g.detect_wink(0.5, 0.45), WinkEvent::None);
        assert_eq!(g.detect_wink(0.9, 0.9), WinkEvent::None);
        assert_eq!(g.detect_wink(0.0, 0.0), WinkEvent::None);
    }

    #[test]
    fn threshold_is_tunable() {
        let strict = GestureController::new(0.5).unwrap();
        assert_eq!(strict.detect_wink(0.8, 0.4), WinkEvent::None);
        let loose = GestureController::new(0.02).unwrap();
        assert_eq!(loose.detect_wink(0.5, 0.45), WinkEvent::Right);
    }

    #[test]
    fn rejects_thresholds_that_break_ties() {
        assert!(matches!(GestureController::new(-0.1), Err(Error::InvalidConfig(_))));
        assert!(GestureController::new(f64::NAN).is_err());
        assert!(GestureController::new(f64::INFINITY).is_err());

        let zero = GestureController::new(0.0).unwrap();
        assert_eq!(zero.detect_wink(0.0, 0.0), WinkEvent::None);
        assert_eq!(zero.detect_wink(0.7, 0.7), WinkEvent::None);
    }

    #[test]
    fn pinch_is_explicitly_unsupported() {
        let g = GestureController::default();
        assert!(matches!(g.detect_hand_pinch(&[]), Err(Error::Unsupported(_))));
        let hand = LandmarkSet::new(vec![Default::default(); 21]);
        assert!(g.detect_hand_pinch(&[hand]).is_err());
    }
}
