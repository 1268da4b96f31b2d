//! Off-screen paint buffer.
//!
//! Notifications draw into a [`PaintBuffer`] first and the finished frame is
//! replayed onto the host painter in one go, so the window never shows a
//! partially painted state.

use crate::host::Painter;
use overlay_notifications_util::{Color, FontId, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Fill(Rect, Color),
    Stroke(Rect, Color),
    Text {
        rect: Rect,
        text: String,
        font: FontId,
        color: Color,
    },
    CloseButton {
        rect: Rect,
        hover: bool,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PaintBuffer {
    ops: Vec<PaintOp>,
}

impl PaintBuffer {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Replay the recorded frame onto `target` and empty the buffer.
    pub fn flush(&mut self, target: &mut dyn Painter) {
        for op in self.ops.drain(..) {
            match op {
                PaintOp::Fill(rect, color) => target.fill_rect(rect, color),
                PaintOp::Stroke(rect, color) => target.stroke_rect(rect, color),
                PaintOp::Text {
                    rect,
                    text,
                    font,
                    color,
                } => target.draw_text(rect, &text, font, color),
                PaintOp::CloseButton { rect, hover, color } => {
                    target.draw_close_button(rect, hover, color)
                }
            }
        }
    }
}

impl Painter for PaintBuffer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::Stroke(rect, color));
    }

    fn draw_text(&mut self, rect: Rect, text: &str, font: FontId, color: Color) {
        self.ops.push(PaintOp::Text {
            rect,
            text: text.to_string(),
            font,
            color,
        });
    }

    fn draw_close_button(&mut self, rect: Rect, hover: bool, color: Color) {
        self.ops.push(PaintOp::CloseButton { rect, hover, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_replays_in_order_and_empties() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let mut buffer = PaintBuffer::new();
        buffer.fill_rect(Rect::new(0, 0, 10, 10), red);
        buffer.draw_text(Rect::new(1, 1, 5, 5), "hi", FontId(0), red);

        let mut target = PaintBuffer::default();
        buffer.flush(&mut target);

        assert!(buffer.ops().is_empty());
        assert_eq!(target.ops().len(), 2);
        assert!(matches!(target.ops()[0], PaintOp::Fill(..)));
        assert!(matches!(&target.ops()[1], PaintOp::Text { text, .. } if text == "hi"));
    }
}
