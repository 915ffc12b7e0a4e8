// Custom draggable divider for egui
// Built the same way as hand-rolled splitters for egui, since the built-in
// resizable panels don't give us control over the clamp/snap behaviour

use egui::{CursorIcon, Pos2, Rect, Response, Rounding, Sense, Ui, Vec2};

use crate::pane_width::PaneWidthController;

/// The vertical handle between the two panes. Dragging it feeds horizontal
/// deltas into the width controller; releasing it lets the controller settle.
pub struct Divider {
    width: f32,
    stroke: f32,
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

impl Divider {
    pub fn new() -> Self {
        Self {
            width: 8.0,
            stroke: 2.0,
        }
    }

    /// Hit area width in points
    pub fn width(mut self, points: f32) -> Self {
        self.width = points;
        self
    }

    /// Painted stroke width in points
    pub fn stroke(mut self, points: f32) -> Self {
        self.stroke = points;
        self
    }

    /// Show the divider with its top-left corner at `top_left` and route drag
    /// input into `controller`.
    pub fn show(
        &self,
        ui: &mut Ui,
        top_left: Pos2,
        height: f32,
        controller: &mut PaneWidthController,
    ) -> Response {
        let rect = Rect::from_min_size(top_left, Vec2::new(self.width, height.max(0.0)));
        let resp = ui.allocate_rect(rect, Sense::hover().union(Sense::click_and_drag()));

        // Thin centered stroke inside the wider hit area
        let draw_rect = Rect::from_min_size(
            Pos2::new(rect.min.x + self.width / 2.0 - self.stroke / 2.0, rect.min.y),
            Vec2::new(self.stroke, rect.height()),
        );
        ui.painter().rect_filled(
            draw_rect,
            Rounding::ZERO,
            ui.style().visuals.noninteractive().bg_stroke.color,
        );

        if resp.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeColumn);
        }

        if resp.dragged() {
            controller.apply_drag_delta(resp.drag_delta().x);
        }
        if resp.drag_stopped() {
            controller.settle();
        }

        resp
    }
}
