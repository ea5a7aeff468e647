use crate::overlay::HighlightDirective;

/// Options for driving the board widget and its overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ChessboardState {
    pub board_size: f64,
    pub move_highlight: HighlightDirective,
}

impl Default for ChessboardState {
    fn default() -> Self {
        Self {
            board_size: 384.0,
            move_highlight: HighlightDirective::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChessboardAction {
    SetBoardSize(f64),
    /// Replaces the highlight wholesale.
    SetMoveHighlight(HighlightDirective),
}

impl ChessboardState {
    pub fn reduce(&mut self, action: ChessboardAction) {
        match action {
            ChessboardAction::SetBoardSize(size) => self.board_size = size,
            ChessboardAction::SetMoveHighlight(directive) => self.move_highlight = directive,
        }
    }
}
