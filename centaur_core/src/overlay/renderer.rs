use crate::geometry::{square_origin, Square};
use crate::overlay::arrows::{arrow_shapes, Shape, ARROW_WIDTH};
use crate::overlay::{
    Checkers, HighlightDirective, MoveHighlight, OverlayColor, Point, Stroke, Surface,
};
use crate::rules::Turn;

const OUTLINE_WIDTH: f64 = 10.0;

/// Everything besides the directive that shapes a repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub reversed: bool,
    pub turn: Turn,
    pub square_size: f64,
    pub kings_checks: bool,
    pub previous_move: bool,
}

/// Paints move highlights over the board. Only a change of directive or
/// orientation triggers a repaint; settings are read at paint time.
#[derive(Debug, Default)]
pub struct OverlayRenderer {
    painted: Option<(HighlightDirective, bool)>,
}

impl OverlayRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn needs_repaint(&self, directive: &HighlightDirective, reversed: bool) -> bool {
        self.painted
            .as_ref()
            .map_or(true, |(d, r)| d != directive || *r != reversed)
    }

    /// Repaints when the directive or orientation changed since the last
    /// paint. Returns whether anything was drawn.
    pub fn repaint<S: Surface>(
        &mut self,
        surface: &mut S,
        directive: &HighlightDirective,
        ctx: &RenderContext,
    ) -> bool {
        if !self.needs_repaint(directive, ctx.reversed) {
            return false;
        }
        Self::paint(surface, directive, ctx);
        self.painted = Some((directive.clone(), ctx.reversed));
        true
    }

    pub fn paint<S: Surface>(surface: &mut S, directive: &HighlightDirective, ctx: &RenderContext) {
        surface.clear();
        let Some(highlight) = directive.active() else {
            return;
        };
        let mut pen = Pen { surface, ctx };
        match highlight {
            MoveHighlight::Checkers(checkers) => {
                if ctx.kings_checks {
                    pen.checks(checkers);
                }
            }
            MoveHighlight::ComputerMove(uci) => pen.arrow(uci, OverlayColor::Engine),
            MoveHighlight::TipMove(uci) => pen.arrow(uci, OverlayColor::Suggestion),
            MoveHighlight::TipMoves(moves) => {
                for uci in moves {
                    pen.outline(uci, OverlayColor::Suggestion);
                    pen.arrow(uci, OverlayColor::Suggestion);
                }
            }
            MoveHighlight::LastMove(uci) => {
                if ctx.previous_move {
                    pen.outline(uci, OverlayColor::Neutral);
                    pen.arrow(uci, OverlayColor::Neutral);
                }
            }
            MoveHighlight::UndoMove(uci) => {
                pen.arrow(uci.get(..2).unwrap_or(uci), OverlayColor::Undo);
                pen.arrow(uci, OverlayColor::Undo);
            }
        }
    }
}

struct Pen<'a, S> {
    surface: &'a mut S,
    ctx: &'a RenderContext,
}

impl<S: Surface> Pen<'_, S> {
    fn arrow(&mut self, uci: &str, color: OverlayColor) {
        let stroke = Stroke {
            color,
            width: ARROW_WIDTH,
        };
        for shape in arrow_shapes(uci, self.ctx.reversed, self.ctx.square_size) {
            match shape {
                Shape::Segment { from, to } => self.surface.stroke_segment(from, to, stroke),
                Shape::Head(corners) => self.surface.fill_triangle(corners, stroke),
            }
        }
    }

    /// Outlines the square named by the first two characters of `text`.
    fn outline(&mut self, text: &str, color: OverlayColor) {
        let Some(square) = Square::parse(text) else {
            return;
        };
        let (x, y) = square_origin(square, self.ctx.reversed, self.ctx.square_size);
        self.surface.stroke_square(
            Point::new(x, y),
            self.ctx.square_size,
            Stroke {
                color,
                width: OUTLINE_WIDTH,
            },
        );
    }

    fn checks(&mut self, checkers: &Checkers) {
        let Some(king) = checkers.kings.get(1 - self.ctx.turn.index()) else {
            log::warn!("check highlight without king squares: {checkers:?}");
            return;
        };
        self.outline(king, OverlayColor::Danger);
        for checker in &checkers.checkers {
            self.arrow(&format!("{checker}{king}"), OverlayColor::Danger);
        }
    }
}
