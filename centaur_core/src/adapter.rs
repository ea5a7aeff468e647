//! Keeps the imperative board widget in step with application state.

use crate::store::{Action, BoardAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[must_use]
    pub const fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::Black
        } else {
            Self::White
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// What happens to a piece once a drag ends. The device is the source of
/// truth, so the piece always returns and the real position arrives later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapPolicy {
    Snapback,
}

impl SnapPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Snapback => "snapback",
        }
    }
}

pub const SNAP_POLICY: SnapPolicy = SnapPolicy::Snapback;

/// The third-party board widget.
pub trait BoardWidget {
    fn set_position(&mut self, fen: &str);
    fn set_orientation(&mut self, side: Side);
    fn set_draggable(&mut self, draggable: bool);
    fn resize(&mut self);
    /// Width of the board as currently laid out.
    fn rendered_width(&self) -> f64;
}

/// The slice of state the widget mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub fen: Option<&'a str>,
    pub reversed: bool,
    pub draggable: bool,
}

/// Sole owner of the widget. Pushes only what changed.
#[derive(Debug)]
pub struct BoardAdapter<W> {
    widget: W,
    draggable: Option<bool>,
    reversed: Option<bool>,
    position: Option<String>,
}

impl<W: BoardWidget> BoardAdapter<W> {
    pub const fn new(widget: W) -> Self {
        Self {
            widget,
            draggable: None,
            reversed: None,
            position: None,
        }
    }

    pub const fn widget(&self) -> &W {
        &self.widget
    }

    pub fn sync(&mut self, view: &BoardView<'_>) {
        if self.draggable != Some(view.draggable) {
            self.widget.set_draggable(view.draggable);
            self.widget.resize();
            self.draggable = Some(view.draggable);
        }
        if self.reversed != Some(view.reversed) {
            self.widget.set_orientation(Side::from_reversed(view.reversed));
            self.widget.resize();
            self.reversed = Some(view.reversed);
        }
        if let Some(fen) = view.fen.filter(|fen| !fen.is_empty()) {
            if self.position.as_deref() != Some(fen) {
                self.widget.set_position(fen);
                self.position = Some(fen.to_string());
            }
        }
    }

    /// Refits the widget to its container and reports the new board size.
    pub fn on_container_resize(&mut self) -> Action {
        self.widget.resize();
        Action::Chessboard(crate::store::ChessboardAction::SetBoardSize(
            self.widget.rendered_width(),
        ))
    }
}

/// A drag may start only while the board is active.
#[must_use]
pub const fn can_drag(active_board: bool) -> bool {
    active_board
}

/// A dropped piece is always accepted visually; the board stays
/// unsynchronized until the device reports its position.
#[must_use]
pub const fn drop_intent() -> Action {
    Action::Board(BoardAction::SetSynchronized(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ChessboardAction;

    #[derive(Debug, Default)]
    struct FakeWidget {
        calls: Vec<String>,
        width: f64,
    }

    impl BoardWidget for FakeWidget {
        fn set_position(&mut self, fen: &str) {
            self.calls.push(format!("position {fen}"));
        }

        fn set_orientation(&mut self, side: Side) {
            self.calls.push(format!("orientation {}", side.name()));
        }

        fn set_draggable(&mut self, draggable: bool) {
            self.calls.push(format!("draggable {draggable}"));
        }

        fn resize(&mut self) {
            self.calls.push("resize".into());
            self.width += 8.0;
        }

        fn rendered_width(&self) -> f64 {
            self.width
        }
    }

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn first_sync_pushes_everything() {
        let mut adapter = BoardAdapter::new(FakeWidget::default());
        adapter.sync(&BoardView {
            fen: Some(START),
            reversed: true,
            draggable: false,
        });
        assert_eq!(
            adapter.widget().calls,
            vec![
                "draggable false".to_string(),
                "resize".into(),
                "orientation black".into(),
                "resize".into(),
                format!("position {START}"),
            ]
        );
    }

    #[test]
    fn unchanged_state_pushes_nothing() {
        let mut adapter = BoardAdapter::new(FakeWidget::default());
        let view = BoardView {
            fen: Some(START),
            reversed: false,
            draggable: true,
        };
        adapter.sync(&view);
        let before = adapter.widget().calls.len();
        adapter.sync(&view);
        assert_eq!(adapter.widget().calls.len(), before);
    }

    #[test]
    fn empty_or_missing_position_is_not_pushed() {
        let mut adapter = BoardAdapter::new(FakeWidget::default());
        for fen in [None, Some("")] {
            adapter.sync(&BoardView {
                fen,
                reversed: false,
                draggable: false,
            });
        }
        assert!(!adapter
            .widget()
            .calls
            .iter()
            .any(|c| c.starts_with("position")));
    }

    #[test]
    fn resize_reports_rendered_width() {
        let mut adapter = BoardAdapter::new(FakeWidget::default());
        assert_eq!(
            adapter.on_container_resize(),
            Action::Chessboard(ChessboardAction::SetBoardSize(8.0))
        );
    }

    #[test]
    fn drag_policy() {
        assert!(can_drag(true));
        assert!(!can_drag(false));
        assert_eq!(drop_intent(), Action::Board(BoardAction::SetSynchronized(false)));
        assert_eq!(SNAP_POLICY.name(), "snapback");
    }
}
