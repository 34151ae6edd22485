pub mod chart;
pub mod geometry;
pub mod network;
pub mod overlay;

pub use geometry::Point;

/// Minimal drawing-surface capability: everything the network view needs and
/// nothing more, so the geometry/overlay logic can be exercised against a
/// recording fake instead of a real 2D context.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    /// Resync the backing store to its container size; layout geometry
    /// depends on it, so callers redraw right after.
    fn resize(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Point, radius: f64, color: &'static str);
    fn stroke_circle(&mut self, center: Point, radius: f64, color: &'static str, width: f64);
    fn stroke_line(&mut self, from: Point, to: Point, color: &'static str, width: f64, alpha: f64);
    /// Text centered on `at`, both axes.
    fn fill_text(&mut self, text: &str, at: Point, color: &'static str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillCircle { center: Point, radius: f64, color: &'static str },
    StrokeCircle { center: Point, radius: f64, color: &'static str, width: f64 },
    Line { from: Point, to: Point, color: &'static str, width: f64, alpha: f64 },
    Text { text: String, at: Point, color: &'static str },
}

/// Surface that records every draw call. Used by the binary (the dashboard is
/// headless; redraw activity is reported through logs) and by tests to assert
/// on exact draw sequences.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::FillCircle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Text { .. }))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &'static str) {
        self.ops.push(DrawOp::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: &'static str, width: f64) {
        self.ops.push(DrawOp::StrokeCircle { center, radius, color, width });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &'static str, width: f64, alpha: f64) {
        self.ops.push(DrawOp::Line { from, to, color, width, alpha });
    }

    fn fill_text(&mut self, text: &str, at: Point, color: &'static str) {
        self.ops.push(DrawOp::Text { text: text.to_string(), at, color });
    }
}
