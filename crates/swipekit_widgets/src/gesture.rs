//! Swipe gesture state machine
//!
//! Pure model of a horizontal swipe: touch-start seeds the drag, touch-move
//! accumulates offset (frozen hard at the first/last page), touch-end
//! resolves the flip decision. No rendering, no animation here - the widget
//! feeds the returned targets into its animated offset, which keeps this
//! module unit-testable without a UI harness.
//!
//! The drag is a tagged state: `current_x` simply does not exist while no
//! finger is down.

use crate::config::{SwipeConfig, SwipeError};

/// Clamp an index into the closed interval `[min, max]`.
///
/// Requires `min <= max`.
pub fn clamp_index(num: isize, min: isize, max: isize) -> isize {
    debug_assert!(min <= max);
    if num < min {
        return min;
    }
    if num > max {
        return max;
    }
    num
}

/// Resolve a completed gesture to the index the pager should land on.
///
/// `moved` is the total displacement from drag start (positive = rightward).
/// A rightward drag reveals the previous page, so it decrements the index;
/// the flip only happens when `|moved / width|` strictly exceeds
/// `sensitivity / 100`. The result is clamped into `[0, max_idx]`.
pub fn resolve_target_index(
    moved: f32,
    width: f32,
    sensitivity: u8,
    idx: usize,
    max_idx: usize,
) -> usize {
    let should_flip = (moved / width).abs() > f32::from(sensitivity) / 100.0;
    let sign: isize = if moved > 0.0 { -1 } else { 1 };
    let idx_change = if should_flip { sign } else { 0 };
    clamp_index(idx as isize + idx_change, 0, max_idx as isize) as usize
}

/// Drag tracking state. Coordinates exist only while a finger is down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// No active gesture
    Idle,
    /// Finger down: `start_x` is where the gesture began, `current_x` the
    /// last position a move was accepted at
    Dragging { start_x: f32, current_x: f32 },
}

impl GesturePhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GesturePhase::Dragging { .. })
    }
}

/// Outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeCommit {
    /// The index the caller should adopt (already clamped)
    pub final_idx: usize,
    /// Strip offset the content settles at: `-final_idx * width`
    pub settle_offset: f32,
}

/// Swipe gesture tracker for a paged strip.
///
/// Owns the committed strip offset (the model value; at rest it equals
/// `-idx * width`) and the drag phase. The current page index is a
/// caller-controlled prop and is passed into each transition rather than
/// stored here.
#[derive(Debug, Clone)]
pub struct SwipeGesture {
    phase: GesturePhase,
    /// Committed horizontal translation of the paged strip
    offset: f32,
    config: SwipeConfig,
    page_count: usize,
}

impl SwipeGesture {
    /// Create a tracker for a validated configuration.
    pub fn new(config: SwipeConfig) -> Result<Self, SwipeError> {
        config.validate()?;
        Ok(Self {
            phase: GesturePhase::Idle,
            offset: 0.0,
            config,
            page_count: 0,
        })
    }

    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Committed strip offset (the model value the animation tracks).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Update the page count (set by the widget when pages are added).
    pub fn set_page_count(&mut self, count: usize) {
        self.page_count = count;
    }

    /// Index of the last page, or `None` without pages.
    pub fn max_idx(&self) -> Option<usize> {
        self.page_count.checked_sub(1)
    }

    /// The rest offset for a given index: `-idx * width`.
    pub fn rest_offset(&self, idx: usize) -> f32 {
        -(idx as f32) * self.config.width
    }

    /// Snap the committed offset to the rest position of `idx`.
    pub fn snap_to_index(&mut self, idx: usize) {
        self.offset = self.rest_offset(idx);
        self.phase = GesturePhase::Idle;
    }

    /// Begin a drag at screen position `x`.
    ///
    /// Without pages the tracker stays inert. Starting over an unfinished
    /// gesture simply re-seeds it (the host never delivered the end event).
    pub fn touch_start(&mut self, x: f32) {
        if self.page_count == 0 {
            tracing::warn!("swipe ignored: container has no pages");
            return;
        }
        self.phase = GesturePhase::Dragging {
            start_x: x,
            current_x: x,
        };
        tracing::trace!(x, "drag started");
    }

    /// Track a finger move to screen position `x`.
    ///
    /// Returns the new committed offset to animate toward, or `None` when
    /// the move is swallowed: no active gesture, or a drag past the first
    /// or last page (the hard-stop edge - no rubber-banding, tracking
    /// position stays frozen where the guard engaged).
    pub fn touch_move(&mut self, x: f32, idx: usize) -> Option<f32> {
        let GesturePhase::Dragging { start_x, current_x } = self.phase else {
            tracing::debug!("touch move without active gesture, ignored");
            return None;
        };
        let max_idx = self.max_idx()?;

        let delta = x - current_x;
        let at_left_edge = idx == 0 && delta > 0.0;
        let at_right_edge = idx == max_idx && delta < 0.0;
        if at_left_edge || at_right_edge {
            return None;
        }

        self.phase = GesturePhase::Dragging {
            start_x,
            current_x: x,
        };
        self.offset += delta;
        tracing::trace!(delta, offset = self.offset, "drag tracked");
        Some(self.offset)
    }

    /// Finish the gesture at screen position `x` and commit a flip decision.
    ///
    /// The decision uses the total displacement from the original drag
    /// start, not the last increment. Returns `None` when no gesture was
    /// active; otherwise the commit the widget must report to its caller -
    /// exactly once, even when the index did not change.
    pub fn touch_end(&mut self, x: f32, idx: usize) -> Option<SwipeCommit> {
        let GesturePhase::Dragging { start_x, .. } = self.phase else {
            tracing::debug!("touch end without active gesture, ignored");
            return None;
        };
        self.phase = GesturePhase::Idle;
        let max_idx = self.max_idx()?;

        let moved = x - start_x;
        let final_idx = resolve_target_index(
            moved,
            self.config.width,
            self.config.flip_sensitivity,
            idx,
            max_idx,
        );
        self.offset = self.rest_offset(final_idx);
        tracing::debug!(moved, idx, final_idx, "swipe committed");

        Some(SwipeCommit {
            final_idx,
            settle_offset: self.offset,
        })
    }

    /// Abort the gesture (host takeover, e.g. a system navigation gesture).
    ///
    /// Restores the committed offset to the rest position of the current
    /// index and returns it for the widget to animate back to. No flip
    /// decision is made and no index change must be reported.
    pub fn touch_cancel(&mut self, idx: usize) -> Option<f32> {
        if !self.phase.is_dragging() {
            return None;
        }
        self.phase = GesturePhase::Idle;
        self.offset = self.rest_offset(idx);
        tracing::debug!(idx, "drag cancelled, restoring rest offset");
        Some(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(width: f32, sensitivity: u8, pages: usize) -> SwipeGesture {
        let mut g = SwipeGesture::new(
            SwipeConfig::new(width).with_flip_sensitivity(sensitivity),
        )
        .unwrap();
        g.set_page_count(pages);
        g
    }

    #[test]
    fn test_clamp_index_properties() {
        assert_eq!(clamp_index(5, 0, 10), 5);
        assert_eq!(clamp_index(-3, 0, 10), 0);
        assert_eq!(clamp_index(42, 0, 10), 10);
        assert_eq!(clamp_index(0, 0, 0), 0);
        assert_eq!(clamp_index(-1, -5, -1), -1);
        assert_eq!(clamp_index(-7, -5, -1), -5);
    }

    #[test]
    fn test_no_move_past_first_page() {
        let mut g = gesture(300.0, 50, 3);
        g.touch_start(100.0);

        // idx 0, rightward drag (toward a page before the first)
        assert_eq!(g.touch_move(140.0, 0), None);
        assert_eq!(g.offset(), 0.0);
    }

    #[test]
    fn test_no_move_past_last_page() {
        let mut g = gesture(300.0, 50, 3);
        g.snap_to_index(2);
        g.touch_start(200.0);

        // idx == max_idx, leftward drag (toward a page after the last)
        assert_eq!(g.touch_move(150.0, 2), None);
        assert_eq!(g.offset(), -600.0);
    }

    #[test]
    fn test_ignored_move_freezes_tracking_position() {
        let mut g = gesture(300.0, 50, 3);
        g.touch_start(100.0);

        // Outward wiggle at the edge is swallowed without updating current_x
        assert_eq!(g.touch_move(130.0, 0), None);
        // The next inward move is measured from the frozen position
        assert_eq!(g.touch_move(90.0, 0), Some(-10.0));
        assert_eq!(g.offset(), -10.0);
    }

    #[test]
    fn test_moves_accumulate_offset() {
        let mut g = gesture(300.0, 50, 3);
        g.snap_to_index(1);
        g.touch_start(200.0);

        assert_eq!(g.touch_move(180.0, 1), Some(-320.0));
        assert_eq!(g.touch_move(150.0, 1), Some(-350.0));
        assert!(g.is_dragging());
    }

    #[test]
    fn test_flip_forward_above_threshold() {
        // width 300, sensitivity 50 -> 150px threshold; 200px leftward flips
        let mut g = gesture(300.0, 50, 3);
        g.touch_start(250.0);
        g.touch_move(50.0, 0);
        let commit = g.touch_end(50.0, 0).unwrap();

        assert_eq!(commit.final_idx, 1);
        assert_eq!(commit.settle_offset, -300.0);
        assert!(!g.is_dragging());
    }

    #[test]
    fn test_no_flip_below_threshold() {
        let mut g = gesture(300.0, 50, 3);
        g.touch_start(250.0);
        g.touch_move(150.0, 0);
        let commit = g.touch_end(150.0, 0).unwrap();

        // 100px < 150px threshold: commit still happens, index unchanged
        assert_eq!(commit.final_idx, 0);
        assert_eq!(commit.settle_offset, 0.0);
    }

    #[test]
    fn test_exact_threshold_does_not_flip() {
        // Strictly-greater comparison: exactly 50% of the width stays put
        assert_eq!(resolve_target_index(-150.0, 300.0, 50, 0, 2), 0);
        assert_eq!(resolve_target_index(-150.1, 300.0, 50, 0, 2), 1);
    }

    #[test]
    fn test_flip_clamped_at_last_page() {
        let mut g = gesture(300.0, 50, 3);
        g.snap_to_index(2);
        g.touch_start(250.0);
        let commit = g.touch_end(50.0, 2).unwrap();

        assert_eq!(commit.final_idx, 2);
        assert_eq!(commit.settle_offset, -600.0);
    }

    #[test]
    fn test_flip_clamped_at_first_page() {
        let mut g = gesture(300.0, 50, 3);
        g.touch_start(50.0);
        let commit = g.touch_end(250.0, 0).unwrap();

        assert_eq!(commit.final_idx, 0);
        assert_eq!(commit.settle_offset, 0.0);
    }

    #[test]
    fn test_rightward_drag_reveals_previous_page() {
        let mut g = gesture(300.0, 50, 3);
        g.snap_to_index(2);
        g.touch_start(50.0);
        g.touch_move(250.0, 2);
        let commit = g.touch_end(250.0, 2).unwrap();

        assert_eq!(commit.final_idx, 1);
        assert_eq!(commit.settle_offset, -300.0);
    }

    #[test]
    fn test_settle_invariant() {
        // After any completed touch-end the committed offset is exactly
        // -final_idx * width
        let mut g = gesture(320.0, 30, 5);
        g.snap_to_index(1);
        g.touch_start(300.0);
        g.touch_move(120.0, 1);
        let commit = g.touch_end(120.0, 1).unwrap();

        assert_eq!(g.offset(), -(commit.final_idx as f32) * 320.0);
    }

    #[test]
    fn test_decision_uses_total_displacement() {
        // Incremental moves wander, but the flip is judged from start to end
        let mut g = gesture(300.0, 50, 3);
        g.snap_to_index(1);
        g.touch_start(200.0);
        g.touch_move(40.0, 1); // far left...
        g.touch_move(190.0, 1); // ...mostly back

        let commit = g.touch_end(190.0, 1).unwrap();
        assert_eq!(commit.final_idx, 1);
    }

    #[test]
    fn test_sensitivity_monotonicity() {
        // Lowering sensitivity never turns a flip into a non-flip
        let moved = -120.0;
        let hard = resolve_target_index(moved, 300.0, 80, 0, 2);
        let easy = resolve_target_index(moved, 300.0, 20, 0, 2);

        assert_eq!(hard, 0);
        assert_eq!(easy, 1);
        assert!(easy >= hard);
    }

    #[test]
    fn test_events_without_gesture_are_noops() {
        let mut g = gesture(300.0, 50, 3);

        assert_eq!(g.touch_move(120.0, 0), None);
        assert_eq!(g.touch_end(120.0, 0), None);
        assert_eq!(g.touch_cancel(0), None);
        assert_eq!(g.offset(), 0.0);
    }

    #[test]
    fn test_no_pages_is_inert() {
        let mut g = gesture(300.0, 50, 0);

        g.touch_start(100.0);
        assert!(!g.is_dragging());
        assert_eq!(g.touch_end(50.0, 0), None);
    }

    #[test]
    fn test_cancel_restores_rest_offset() {
        let mut g = gesture(300.0, 50, 3);
        g.snap_to_index(1);
        g.touch_start(200.0);
        g.touch_move(120.0, 1);
        assert_eq!(g.offset(), -380.0);

        assert_eq!(g.touch_cancel(1), Some(-300.0));
        assert_eq!(g.offset(), -300.0);
        assert!(!g.is_dragging());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(SwipeGesture::new(SwipeConfig::new(0.0)).is_err());
        assert!(
            SwipeGesture::new(SwipeConfig::new(300.0).with_flip_sensitivity(0)).is_err()
        );
    }
}
