use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkers {
    pub checkers: Vec<String>,
    /// King squares indexed by side, white first.
    pub kings: Vec<String>,
}

/// Move highlight as pushed by the device. Several tags may be present at
/// once, only the first one in precedence order is painted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightDirective {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkers: Option<Checkers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_uci_move: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_uci_move: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_uci_moves: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uci_move: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uci_undo_move: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveHighlight<'a> {
    Checkers(&'a Checkers),
    ComputerMove(&'a str),
    TipMove(&'a str),
    TipMoves(&'a [String]),
    LastMove(&'a str),
    UndoMove(&'a str),
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl HighlightDirective {
    /// The single highlight to paint: checkers, then computer move, tip move,
    /// tip moves, last move and finally the undo move.
    #[must_use]
    pub fn active(&self) -> Option<MoveHighlight<'_>> {
        if let Some(checkers) = &self.checkers {
            return Some(MoveHighlight::Checkers(checkers));
        }
        if let Some(mv) = present(self.computer_uci_move.as_ref()) {
            return Some(MoveHighlight::ComputerMove(mv));
        }
        if let Some(mv) = present(self.tip_uci_move.as_ref()) {
            return Some(MoveHighlight::TipMove(mv));
        }
        if let Some(moves) = &self.tip_uci_moves {
            return Some(MoveHighlight::TipMoves(moves));
        }
        if let Some(mv) = present(self.uci_move.as_ref()) {
            return Some(MoveHighlight::LastMove(mv));
        }
        present(self.uci_undo_move.as_ref()).map(MoveHighlight::UndoMove)
    }

    /// Lenient decode of a device payload. Garbage yields an empty directive.
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|e| {
            log::warn!("ignoring move highlight {text:?}: {e}");
            Self::default()
        })
    }

    #[must_use]
    pub fn last_move(uci: impl Into<String>) -> Self {
        Self {
            uci_move: Some(uci.into()),
            ..Self::default()
        }
    }
}
