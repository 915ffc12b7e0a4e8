use log::debug;

/// Default width of the left pane when the layout is first shown
pub const DEFAULT_PANE_WIDTH: f32 = 360.0;

/// Fixed clamp boundaries the draggable divider may not cross.
/// `start_anchor` is reserved at the left edge, `end_anchor` at the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorConfig {
    pub start_anchor: f32,
    pub end_anchor: f32,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            start_anchor: 360.0,
            end_anchor: 360.0,
        }
    }
}

/// Owns the left pane's width and keeps it inside the anchor range.
///
/// All mutation happens on the UI thread: drag deltas come in through
/// `apply_drag_delta`, viewport resizes through `set_container_width`, and
/// once a drag settles the caller runs `settle()` so the snap rule in
/// `reanchor` gets a chance to move the divider.
#[derive(Debug, Clone)]
pub struct PaneWidthController {
    width: f32,
    container_width: f32,
    anchors: AnchorConfig,
    // Set whenever width changes, cleared by settle()
    dirty: bool,
}

impl PaneWidthController {
    pub fn new(container_width: f32, anchors: AnchorConfig) -> Self {
        Self {
            width: DEFAULT_PANE_WIDTH,
            container_width,
            anchors,
            dirty: false,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = self.clamped(width);
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    fn max_width(&self) -> f32 {
        self.container_width - self.anchors.end_anchor
    }

    // Upper bound is applied first, so when the container is too narrow to
    // satisfy both anchors (max_width < start_anchor) the start anchor wins.
    fn clamped(&self, value: f32) -> f32 {
        value.min(self.max_width()).max(self.anchors.start_anchor)
    }

    /// Apply one frame's worth of horizontal drag. The result is always
    /// clamped into `[start_anchor, container_width - end_anchor]`.
    pub fn apply_drag_delta(&mut self, delta: f32) {
        let new_width = self.clamped(self.width + delta);
        if new_width != self.width {
            debug!("drag delta {delta:+.1} -> width {new_width:.1}");
            self.width = new_width;
            self.dirty = true;
        }
    }

    /// Snap rule evaluated after the width settles. The three checks run in
    /// this fixed order and the first true branch wins.
    ///
    /// TODO: confirm with design whether the unconditional midpoint snap is
    /// intended; as written the divider can never rest between the start
    /// anchor and 50% of the container once re-anchoring runs.
    pub fn reanchor(&mut self) {
        let midpoint = self.container_width * 0.5;
        if self.width < self.anchors.start_anchor {
            self.width = self.anchors.start_anchor;
        } else if self.width > self.max_width() {
            self.width = self.max_width();
        } else if self.width < midpoint {
            debug!("re-anchor: {:.1} -> midpoint {:.1}", self.width, midpoint);
            self.width = midpoint;
        }
    }

    /// Run `reanchor` once if the width changed since the last settle.
    pub fn settle(&mut self) {
        if self.dirty {
            self.reanchor();
            self.dirty = false;
        }
    }

    /// The viewport resized. Re-clamps the width and re-evaluates the snap
    /// rule so the derived pane widths stay consistent.
    pub fn set_container_width(&mut self, container_width: f32) {
        if container_width == self.container_width {
            return;
        }
        debug!(
            "container width {:.1} -> {:.1}",
            self.container_width, container_width
        );
        self.container_width = container_width;
        self.width = self.clamped(self.width);
        self.reanchor();
    }

    /// Width left over for the second pane. Derived, never stored.
    pub fn second_pane_width(&self, divider_width: f32) -> f32 {
        self.container_width - self.width - divider_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(container: f32, start: f32, end: f32) -> PaneWidthController {
        PaneWidthController::new(
            container,
            AnchorConfig {
                start_anchor: start,
                end_anchor: end,
            },
        )
    }

    #[test]
    fn test_drag_clamps_to_upper_bound() {
        let mut c = controller(800.0, 360.0, 360.0);
        c.apply_drag_delta(500.0);
        assert_eq!(c.width(), 440.0);
        c.settle();
        // 440 is within bounds and not below the 400 midpoint, so no snap
        assert_eq!(c.width(), 440.0);
    }

    #[test]
    fn test_drag_clamps_to_start_anchor() {
        let mut c = controller(800.0, 360.0, 360.0);
        c.apply_drag_delta(-10.0);
        assert_eq!(c.width(), 360.0);
        // the width never actually changed, so settling must not snap it
        // to the midpoint
        c.settle();
        assert_eq!(c.width(), 360.0);
    }

    #[test]
    fn test_clamp_invariant_over_drag_sequence() {
        let mut c = controller(800.0, 360.0, 360.0);
        for delta in [-500.0, 30.0, 1000.0, -75.5, 0.0, -2000.0, 12.25] {
            c.apply_drag_delta(delta);
            assert!(c.width() >= 360.0, "width {} below start anchor", c.width());
            assert!(c.width() <= 440.0, "width {} above upper bound", c.width());
        }
    }

    #[test]
    fn test_reanchor_snaps_to_midpoint() {
        let mut c = controller(800.0, 360.0, 360.0).with_width(390.0);
        c.reanchor();
        assert_eq!(c.width(), 400.0);
    }

    #[test]
    fn test_reanchor_is_idempotent() {
        let mut c = controller(800.0, 360.0, 360.0).with_width(390.0);
        c.reanchor();
        let once = c.width();
        c.reanchor();
        assert_eq!(c.width(), once);
    }

    #[test]
    fn test_degenerate_clamp_prefers_start_anchor() {
        // container too narrow for both anchors: 500 - 360 < 360
        let mut c = controller(500.0, 360.0, 360.0);
        c.apply_drag_delta(200.0);
        assert_eq!(c.width(), 360.0);
        c.apply_drag_delta(-200.0);
        assert_eq!(c.width(), 360.0);
    }

    #[test]
    fn test_second_pane_width_derivation() {
        let c = controller(1000.0, 360.0, 360.0).with_width(450.0);
        assert_eq!(c.second_pane_width(10.0), 540.0);
    }

    #[test]
    fn test_settle_only_runs_after_a_change() {
        let mut c = controller(800.0, 360.0, 360.0);
        // No drag yet: settle must not snap the default width to the midpoint
        c.settle();
        assert_eq!(c.width(), DEFAULT_PANE_WIDTH);

        c.apply_drag_delta(5.0);
        c.settle();
        // 365 < 400 midpoint, snapped up
        assert_eq!(c.width(), 400.0);
    }

    #[test]
    fn test_container_resize_reclamps_and_reanchors() {
        let mut c = controller(1200.0, 360.0, 360.0).with_width(840.0);
        c.set_container_width(800.0);
        // re-clamped to 440, which is >= the new 400 midpoint
        assert_eq!(c.width(), 440.0);

        c.set_container_width(1000.0);
        // 440 < 500 midpoint, snapped to it
        assert_eq!(c.width(), 500.0);
    }
}
