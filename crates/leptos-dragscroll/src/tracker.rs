//! Drag-to-scroll state machine
//!
//! Two phases, no thresholds or momentum. Coordinates are element-relative
//! pointer x positions; offsets are `scrollLeft` values.

/// Scroll pixels moved per pointer pixel
pub const SCROLL_SENSITIVITY: i32 = 2;

/// Current drag phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Pointer x at press time
        start_x: i32,
        /// Scroll offset at press time
        origin: i32,
    },
}

/// Drag-scroll tracker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragScroll {
    phase: DragPhase,
}

impl DragScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Pointer down / touch start: capture start position and scroll offset
    pub fn press(&mut self, x: i32, scroll_left: i32) {
        self.phase = DragPhase::Dragging { start_x: x, origin: scroll_left };
    }

    /// Pointer/touch move: the scroll offset to apply, or `None` when idle
    pub fn drag_to(&self, x: i32) -> Option<i32> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { start_x, origin } => {
                let delta = x.saturating_sub(start_x).saturating_mul(SCROLL_SENSITIVITY);
                Some(origin.saturating_sub(delta))
            }
        }
    }

    /// Pointer up / leave / touch end
    pub fn release(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let tracker = DragScroll::new();
        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_move_while_idle_has_no_effect() {
        let tracker = DragScroll::new();
        assert_eq!(tracker.drag_to(150), None);
    }

    #[test]
    fn test_drag_applies_doubled_delta() {
        let mut tracker = DragScroll::new();
        tracker.press(100, 400);
        assert!(tracker.is_dragging());

        // Dragging left by 30 scrolls right by 60
        assert_eq!(tracker.drag_to(70), Some(460));
        // Dragging right by 50 scrolls left by 100
        assert_eq!(tracker.drag_to(150), Some(300));
        // No movement keeps the captured offset
        assert_eq!(tracker.drag_to(100), Some(400));
    }

    #[test]
    fn test_moves_are_relative_to_press_not_previous_move() {
        let mut tracker = DragScroll::new();
        tracker.press(0, 0);
        assert_eq!(tracker.drag_to(-10), Some(20));
        assert_eq!(tracker.drag_to(-20), Some(40));
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut tracker = DragScroll::new();
        tracker.press(10, 0);
        tracker.release();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.drag_to(50), None);
    }

    #[test]
    fn test_press_recaptures_origin() {
        let mut tracker = DragScroll::new();
        tracker.press(10, 100);
        tracker.release();
        tracker.press(200, 640);
        assert_eq!(tracker.phase(), DragPhase::Dragging { start_x: 200, origin: 640 });
        assert_eq!(tracker.drag_to(190), Some(660));
    }

    #[test]
    fn test_extreme_coordinates_saturate() {
        let mut tracker = DragScroll::new();
        tracker.press(i32::MIN, 0);
        assert_eq!(tracker.drag_to(i32::MAX), Some(-i32::MAX));

        tracker.press(0, i32::MIN);
        assert_eq!(tracker.drag_to(i32::MAX), Some(i32::MIN));

        tracker.press(0, i32::MAX);
        assert_eq!(tracker.drag_to(i32::MIN), Some(i32::MAX));
    }
}
