#![forbid(unsafe_code)]

//! Horizontal swipe recognition.
//!
//! [`SwipeRecognizer`] turns a start/move/end sequence of horizontal positions
//! into at most one [`SwipeDirection`]. The distance is measured as
//! `start - end`, so dragging leftward yields a positive distance.
//!
//! # Invariants
//!
//! 1. A swipe fires only when both a start and an end position were recorded.
//! 2. `|start - end|` must be strictly greater than the threshold.
//! 3. Every `touch_end` resets the recognizer, so each gesture is judged on
//!    its own coordinates and a stale end position never leaks into the next
//!    gesture.

/// Default swipe threshold in pointer units.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 50;

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Content moved leftward; advance to the next item.
    Left,
    /// Content moved rightward; go back to the previous item.
    Right,
}

/// Swipe detection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeConfig {
    /// Minimum horizontal distance (exclusive) for a gesture to count.
    pub threshold: u16,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl SwipeConfig {
    /// Create a config with a custom threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Tracks one horizontal gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    start: Option<i32>,
    end: Option<i32>,
}

impl SwipeRecognizer {
    /// Create a recognizer with the given configuration.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
            end: None,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Record where the gesture started.
    pub fn touch_start(&mut self, x: i32) {
        self.start = Some(x);
        self.end = None;
    }

    /// Record the latest position. Ignored when no gesture was started.
    pub fn touch_move(&mut self, x: i32) {
        if self.start.is_some() {
            self.end = Some(x);
        }
    }

    /// Finish the gesture and classify it.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let start = self.start.take();
        let end = self.end.take();
        let (start, end) = (start?, end?);
        let distance = start - end;
        let threshold = i32::from(self.config.threshold);
        crate::trace!(start, end, distance, "swipe gesture ended");
        if distance > threshold {
            Some(SwipeDirection::Left)
        } else if distance < -threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// Abandon the current gesture without classifying it.
    pub fn cancel(&mut self) {
        self.start = None;
        self.end = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: i32, to: i32) -> Option<SwipeDirection> {
        let mut rec = SwipeRecognizer::default();
        rec.touch_start(from);
        rec.touch_move(to);
        rec.touch_end()
    }

    #[test]
    fn left_swipe_past_threshold_advances() {
        assert_eq!(swipe(200, 149), Some(SwipeDirection::Left));
    }

    #[test]
    fn right_swipe_past_threshold_goes_back() {
        assert_eq!(swipe(100, 151), Some(SwipeDirection::Right));
    }

    #[test]
    fn short_swipes_do_nothing() {
        assert_eq!(swipe(200, 151), None);
        assert_eq!(swipe(200, 150), None);
        assert_eq!(swipe(100, 150), None);
    }

    #[test]
    fn tap_without_move_does_nothing() {
        let mut rec = SwipeRecognizer::default();
        rec.touch_start(10);
        assert_eq!(rec.touch_end(), None);
        assert!(!rec.is_tracking());
    }

    #[test]
    fn stale_end_does_not_leak_into_next_gesture() {
        let mut rec = SwipeRecognizer::default();
        rec.touch_start(200);
        rec.touch_move(100);
        assert_eq!(rec.touch_end(), Some(SwipeDirection::Left));

        // New gesture with no movement must not reuse the old end position.
        rec.touch_start(200);
        assert_eq!(rec.touch_end(), None);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut rec = SwipeRecognizer::default();
        rec.touch_move(10);
        assert_eq!(rec.touch_end(), None);
    }

    #[test]
    fn zero_coordinates_are_valid() {
        // Column 0 is a real position, not "unset".
        let mut rec = SwipeRecognizer::new(SwipeConfig::default().with_threshold(5));
        rec.touch_start(0);
        rec.touch_move(10);
        assert_eq!(rec.touch_end(), Some(SwipeDirection::Right));
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut rec = SwipeRecognizer::default();
        rec.touch_start(300);
        rec.touch_move(0);
        rec.cancel();
        assert_eq!(rec.touch_end(), None);
    }

    #[test]
    fn custom_threshold() {
        let mut rec = SwipeRecognizer::new(SwipeConfig::default().with_threshold(12));
        assert_eq!(rec.config().threshold, 12);
        rec.touch_start(40);
        rec.touch_move(27);
        assert_eq!(rec.touch_end(), Some(SwipeDirection::Left));
    }
}
