pub mod arrows;
pub mod highlight;
pub mod renderer;

#[cfg(test)]
mod renderer_test;

pub use highlight::{Checkers, HighlightDirective, MoveHighlight};
pub use renderer::{OverlayRenderer, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed hues of the overlay, one per kind of annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayColor {
    Danger,
    Neutral,
    Engine,
    Suggestion,
    Undo,
}

impl OverlayColor {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Danger => "red",
            Self::Neutral => "black",
            Self::Engine => "yellow",
            Self::Suggestion => "green",
            Self::Undo => "orange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: OverlayColor,
    pub width: f64,
}

/// Drawing target of the overlay. The browser client backs this with a 2D
/// canvas context.
pub trait Surface {
    fn clear(&mut self);
    /// Straight line with round caps.
    fn stroke_segment(&mut self, from: Point, to: Point, stroke: Stroke);
    /// Closed triangle, outlined and filled with the stroke color.
    fn fill_triangle(&mut self, corners: [Point; 3], stroke: Stroke);
    /// Square outline with its top-left corner at `origin`.
    fn stroke_square(&mut self, origin: Point, side: f64, stroke: Stroke);
}
