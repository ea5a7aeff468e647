use crate::overlay::arrows::{arrow_shapes, Shape};
use crate::overlay::{
    Checkers, HighlightDirective, OverlayColor, OverlayRenderer, Point, RenderContext, Stroke,
    Surface,
};
use crate::rules::Turn;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Segment(Point, Point, OverlayColor),
    Triangle(OverlayColor),
    Square(Point, OverlayColor),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn stroke_segment(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.ops.push(Op::Segment(from, to, stroke.color));
    }

    fn fill_triangle(&mut self, _corners: [Point; 3], stroke: Stroke) {
        self.ops.push(Op::Triangle(stroke.color));
    }

    fn stroke_square(&mut self, origin: Point, _side: f64, stroke: Stroke) {
        self.ops.push(Op::Square(origin, stroke.color));
    }
}

impl Recorder {
    fn colors(&self) -> Vec<OverlayColor> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Clear => None,
                Op::Segment(_, _, c) | Op::Triangle(c) | Op::Square(_, c) => Some(*c),
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

const fn ctx() -> RenderContext {
    RenderContext {
        reversed: false,
        turn: Turn::White,
        square_size: 50.0,
        kings_checks: true,
        previous_move: true,
    }
}

fn paint(directive: &HighlightDirective, ctx: &RenderContext) -> Recorder {
    let mut recorder = Recorder::default();
    OverlayRenderer::paint(&mut recorder, directive, ctx);
    recorder
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn blank_directive_only_clears() {
    let recorder = paint(&HighlightDirective::default(), &ctx());
    assert_eq!(recorder.ops, vec![Op::Clear]);
}

#[test]
fn only_the_highest_precedence_tag_is_painted() {
    let directive = HighlightDirective {
        computer_uci_move: Some("e2e4".into()),
        tip_uci_move: Some("d2d4".into()),
        uci_move: Some("g1f3".into()),
        uci_undo_move: Some("b1c3".into()),
        ..HighlightDirective::default()
    };
    let recorder = paint(&directive, &ctx());
    assert_eq!(recorder.ops.first(), Some(&Op::Clear));
    assert!(!recorder.colors().is_empty());
    assert!(recorder.colors().iter().all(|c| *c == OverlayColor::Engine));
}

#[test]
fn checkers_outline_king_and_point_at_it() {
    let directive = HighlightDirective {
        checkers: Some(Checkers {
            checkers: vec!["b4".into(), "e7".into()],
            kings: vec!["e1".into(), "e8".into()],
        }),
        uci_move: Some("f8b4".into()),
        ..HighlightDirective::default()
    };
    let recorder = paint(&directive, &ctx());
    assert!(recorder.colors().iter().all(|c| *c == OverlayColor::Danger));
    // e1 seen from white's side: column 5, row 8.
    assert!(recorder.ops.contains(&Op::Square(
        Point::new(199.0, 349.0),
        OverlayColor::Danger
    )));
    assert_eq!(recorder.count(|op| matches!(op, Op::Triangle(_))), 2);
}

#[test]
fn checkers_use_the_king_of_the_side_to_move() {
    let directive = HighlightDirective {
        checkers: Some(Checkers {
            checkers: vec![],
            kings: vec!["e1".into(), "e8".into()],
        }),
        ..HighlightDirective::default()
    };
    let recorder = paint(
        &directive,
        &RenderContext {
            turn: Turn::Black,
            ..ctx()
        },
    );
    assert_eq!(
        recorder.ops,
        vec![
            Op::Clear,
            Op::Square(Point::new(199.0, -1.0), OverlayColor::Danger)
        ]
    );
}

#[test]
fn settings_gate_checks_and_previous_move() {
    let checks = HighlightDirective {
        checkers: Some(Checkers {
            checkers: vec!["b4".into()],
            kings: vec!["e1".into(), "e8".into()],
        }),
        ..HighlightDirective::default()
    };
    let last = HighlightDirective::last_move("e2e4");
    let quiet = RenderContext {
        kings_checks: false,
        previous_move: false,
        ..ctx()
    };
    assert_eq!(paint(&checks, &quiet).ops, vec![Op::Clear]);
    assert_eq!(paint(&last, &quiet).ops, vec![Op::Clear]);

    let shown = paint(&last, &ctx());
    assert!(shown.colors().iter().all(|c| *c == OverlayColor::Neutral));
    assert_eq!(shown.count(|op| matches!(op, Op::Square(..))), 1);
}

#[test]
fn engine_and_tip_arrows_ignore_settings() {
    let quiet = RenderContext {
        kings_checks: false,
        previous_move: false,
        ..ctx()
    };
    let computer = HighlightDirective {
        computer_uci_move: Some("e2e4".into()),
        ..HighlightDirective::default()
    };
    let tip = HighlightDirective {
        tip_uci_move: Some("e2e4".into()),
        ..HighlightDirective::default()
    };
    assert_eq!(paint(&computer, &quiet).colors().first(), Some(&OverlayColor::Engine));
    assert_eq!(paint(&tip, &quiet).colors().first(), Some(&OverlayColor::Suggestion));
}

#[test]
fn tip_moves_outline_each_source() {
    let directive = HighlightDirective {
        tip_uci_moves: Some(vec!["e2e4".into(), "d2d4".into(), "g1f3".into()]),
        ..HighlightDirective::default()
    };
    let recorder = paint(&directive, &ctx());
    assert_eq!(recorder.count(|op| matches!(op, Op::Square(..))), 3);
    assert_eq!(recorder.count(|op| matches!(op, Op::Triangle(_))), 3);
    assert!(recorder.colors().iter().all(|c| *c == OverlayColor::Suggestion));
}

#[test]
fn undo_move_marks_source_then_draws_arrow() {
    let directive = HighlightDirective {
        uci_undo_move: Some("e2e4".into()),
        ..HighlightDirective::default()
    };
    let recorder = paint(&directive, &ctx());
    let Some(Op::Segment(from, to, OverlayColor::Undo)) = recorder.ops.get(1) else {
        panic!("expected a degenerate segment, got {:?}", recorder.ops);
    };
    assert!(close(*from, *to));
    assert!(close(*from, Point::new(225.0, 325.0)));
    assert_eq!(recorder.count(|op| matches!(op, Op::Triangle(_))), 1);
    assert!(recorder.colors().iter().all(|c| *c == OverlayColor::Undo));
}

#[test]
fn straight_arrow_is_inset_and_headed() {
    let shapes = arrow_shapes("e2e4", false, 50.0);
    let [Shape::Segment { from, to }, Shape::Head([tip, left, right])] = shapes.as_slice() else {
        panic!("unexpected shapes {shapes:?}");
    };
    assert!(close(*from, Point::new(225.0, 315.0)));
    assert!(close(*to, Point::new(225.0, 235.0)));
    assert!(close(*tip, Point::new(225.0, 250.0)));
    // Back corners sit 15px behind the tip, 30 degrees off the shaft.
    for corner in [left, right] {
        let len = (corner.x - tip.x).hypot(corner.y - tip.y);
        assert!((len - 15.0).abs() < 1e-9);
        assert!(corner.y > tip.y);
    }
    assert!((left.x - right.x).abs() > 14.9);
}

#[test]
fn reversed_board_mirrors_the_arrow() {
    let shapes = arrow_shapes("e2e4", true, 50.0);
    let Some(Shape::Segment { from, to }) = shapes.first() else {
        panic!("unexpected shapes {shapes:?}");
    };
    assert!(close(*from, Point::new(175.0, 85.0)));
    assert!(close(*to, Point::new(175.0, 165.0)));
}

#[test]
fn knight_move_renders_as_elbow() {
    let shapes = arrow_shapes("g1f3", false, 50.0);
    let [Shape::Segment { from: a, to: b }, Shape::Segment { from: c, to: d }, Shape::Head(_)] =
        shapes.as_slice()
    else {
        panic!("unexpected shapes {shapes:?}");
    };
    // Long leg runs up the g-file, short leg turns onto the f3 rank.
    assert!(close(*a, Point::new(325.0, 365.0)));
    assert!(close(*b, Point::new(325.0, 275.0)));
    assert!(close(*c, *b));
    assert!(close(*d, Point::new(285.0, 275.0)));
    let dot = (b.x - a.x).mul_add(d.x - c.x, (b.y - a.y) * (d.y - c.y));
    assert!(dot.abs() < 1e-9, "legs must be perpendicular");
}

#[test]
fn chained_segments_head_only_the_end() {
    let shapes = arrow_shapes("e2e4 e4e6", false, 50.0);
    let segments = shapes
        .iter()
        .filter(|s| matches!(s, Shape::Segment { .. }))
        .count();
    let heads = shapes.iter().filter(|s| matches!(s, Shape::Head(_))).count();
    assert_eq!((segments, heads), (2, 1));
    assert!(matches!(shapes.last(), Some(Shape::Head(_))));
}

#[test]
fn malformed_moves_draw_nothing() {
    assert!(arrow_shapes("z9z9", false, 50.0).is_empty());
    assert!(arrow_shapes("", false, 50.0).is_empty());
}

#[test]
fn repaint_only_on_directive_or_orientation_change() {
    let mut renderer = OverlayRenderer::new();
    let mut surface = Recorder::default();
    let directive = HighlightDirective::last_move("e2e4");
    assert!(renderer.repaint(&mut surface, &directive, &ctx()));
    let quiet = RenderContext {
        previous_move: false,
        ..ctx()
    };
    assert!(!renderer.repaint(&mut surface, &directive, &quiet));
    let flipped = RenderContext {
        reversed: true,
        ..ctx()
    };
    assert!(renderer.repaint(&mut surface, &directive, &flipped));
    assert!(renderer.repaint(
        &mut surface,
        &HighlightDirective::last_move("d2d4"),
        &flipped
    ));
}
