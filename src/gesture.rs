use crate::navigation::Direction;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// When a horizontal swipe is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeTrigger {
    /// Compare start and end positions once the finger lifts.
    OnRelease,
    /// Compare on every move; fire at most once per touch.
    OnMove,
}

/// Turns raw horizontal touch positions into carousel steps.
///
/// Only the x axis is tracked. A swipe fires when the distance travelled
/// is strictly greater than `threshold`; dragging the finger to the left
/// (start > end) moves to the next image.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    trigger: SwipeTrigger,
    start_x: Option<f32>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD, SwipeTrigger::OnRelease)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32, trigger: SwipeTrigger) -> Self {
        Self {
            threshold: threshold.max(0.0),
            trigger,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn touch_move(&mut self, x: f32) -> Option<Direction> {
        if self.trigger != SwipeTrigger::OnMove {
            return None;
        }
        let direction = self.evaluate(x)?;
        // Disarm until the next touch-start so one gesture is one step
        self.start_x = None;
        Some(direction)
    }

    pub fn touch_end(&mut self, x: f32) -> Option<Direction> {
        let direction = match self.trigger {
            SwipeTrigger::OnRelease => self.evaluate(x),
            SwipeTrigger::OnMove => None,
        };
        self.start_x = None;
        direction
    }

    pub fn touch_cancel(&mut self) {
        self.start_x = None;
    }

    fn evaluate(&self, x: f32) -> Option<Direction> {
        let delta = self.start_x? - x;
        if delta.abs() <= self.threshold {
            return None;
        }
        tracing::trace!(delta, "swipe recognised");
        Some(if delta > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    }
}
