use crate::geometry::{cell_center, square_to_board_coords, Square};
use crate::overlay::Point;
use std::f64::consts::PI;

/// Fraction of a square each arrow end is pulled in from the square center.
pub const INSET: f64 = 0.2;
pub const ARROW_WIDTH: f64 = 15.0;
pub const HEAD_LENGTH: f64 = 15.0;
pub const HEAD_ANGLE: f64 = PI / 6.0;

/// Four characters of squares plus one separator.
const CHUNK_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Segment { from: Point, to: Point },
    Head([Point; 3]),
}

type Cell = (i32, i32);

fn board_cell(square: Square, reversed: bool) -> Cell {
    let (col, row) = square_to_board_coords(square, reversed);
    (i32::from(col), i32::from(row))
}

/// Source and destination cells of one chunk. A two character chunk is a
/// degenerate arrow that starts and ends on the same square.
fn chunk_cells(chunk: &str, reversed: bool) -> Option<(Cell, Cell)> {
    let from = Square::parse(chunk)?;
    let to = match chunk.get(2..4) {
        Some(text) => Square::parse(text)?,
        None => from,
    };
    Some((board_cell(from, reversed), board_cell(to, reversed)))
}

/// Pulls both ends of a span toward each other.
fn inset(a: f64, b: f64) -> (f64, f64) {
    if b > a {
        (a + INSET, b - INSET)
    } else if b < a {
        (a - INSET, b + INSET)
    } else {
        (a, b)
    }
}

const fn is_knight_jump(dx: i32, dy: i32) -> bool {
    matches!((dx.abs(), dy.abs()), (2, 1) | (1, 2))
}

fn head(from: Point, to: Point) -> [Point; 3] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let tip = Point::new(
        ARROW_WIDTH.mul_add(-angle.cos(), to.x),
        ARROW_WIDTH.mul_add(-angle.sin(), to.y),
    );
    let corner = |a: f64| {
        Point::new(
            HEAD_LENGTH.mul_add(-a.cos(), tip.x),
            HEAD_LENGTH.mul_add(-a.sin(), tip.y),
        )
    };
    [tip, corner(angle - HEAD_ANGLE), corner(angle + HEAD_ANGLE)]
}

struct Builder {
    square_size: f64,
    shapes: Vec<Shape>,
}

impl Builder {
    fn point(&self, col: f64, row: f64) -> Point {
        let (x, y) = cell_center(col, row, self.square_size);
        Point::new(x, y)
    }

    fn segment(&mut self, from: (f64, f64), to: (f64, f64), headed: bool) {
        let from = self.point(from.0, from.1);
        let to = self.point(to.0, to.1);
        self.shapes.push(Shape::Segment { from, to });
        if headed && from != to {
            self.shapes.push(Shape::Head(head(from, to)));
        }
    }
}

/// Shapes of an arrow in canvas pixels.
///
/// `uci` holds one or more segments (`"e2e4"`, `"e2e4 e4e6"`). A segment whose
/// destination starts the next one continues the path and gets no head. A
/// final knight jump is drawn as an elbow: the long leg first, then the short
/// leg into the destination square. The corner sits on the source square's
/// centre line, level with the destination centre, so the two legs are
/// perpendicular; only the start and the tip are inset.
#[must_use]
pub fn arrow_shapes(uci: &str, reversed: bool, square_size: f64) -> Vec<Shape> {
    let mut builder = Builder {
        square_size,
        shapes: Vec::new(),
    };
    let mut rest = uci;
    while !rest.is_empty() {
        let chunk = rest.get(..4).unwrap_or(rest);
        rest = rest.get(CHUNK_LEN..).unwrap_or("");

        let Some(((sx, sy), (dx, dy))) = chunk_cells(chunk, reversed) else {
            log::debug!("skipping malformed arrow segment {chunk:?}");
            continue;
        };
        let (x0, x1) = inset(f64::from(sx), f64::from(dx));
        let (y0, y1) = inset(f64::from(sy), f64::from(dy));

        if rest.is_empty() && is_knight_jump(dx - sx, dy - sy) {
            let (sx, sy, dx, dy) = (f64::from(sx), f64::from(sy), f64::from(dx), f64::from(dy));
            if (dx - sx).abs() > (dy - sy).abs() {
                builder.segment((x0, sy), (dx, sy), false);
                builder.segment((dx, sy), (dx, y1), true);
            } else {
                builder.segment((sx, y0), (sx, dy), false);
                builder.segment((sx, dy), (x1, dy), true);
            }
            continue;
        }

        let continues = chunk
            .get(2..4)
            .is_some_and(|to| rest.get(..2) == Some(to));
        builder.segment((x0, y0), (x1, y1), !continues);
    }
    builder.shapes
}
