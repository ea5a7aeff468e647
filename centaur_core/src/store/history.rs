use crate::rules::{parse_pgn, Ply};

/// Positions reached in the game shown, with a cursor into them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub fens: Vec<String>,
    pub plies: Vec<Ply>,
    pub index: usize,
    /// Movetext, one move pair per line.
    pub pgn: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// Moves the cursor. Negative positions count back from the end.
    Go(isize),
    InitFromPgn(String),
    /// Replaces the positions with a single one. The movetext is kept.
    SetCurrentFen(String),
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgnRow {
    pub move_index: usize,
    pub white: String,
    /// Empty when white made the last move.
    pub black: String,
}

impl PgnRow {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}. {} {}", self.move_index + 1, self.white, self.black)
    }

    #[must_use]
    pub const fn white_index(&self) -> usize {
        2 * self.move_index
    }

    #[must_use]
    pub const fn black_index(&self) -> usize {
        2 * self.move_index + 1
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index / 2 == self.move_index
    }
}

impl HistoryState {
    pub fn reduce(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::Go(position) => self.go(position),
            HistoryAction::InitFromPgn(pgn) => match parse_pgn(&pgn, false) {
                Ok(replay) => {
                    self.fens = replay.fens().map(String::from).collect();
                    self.pgn = replay.movetext();
                    self.plies = replay.plies;
                    self.go(-1);
                }
                Err(e) => log::warn!("ignoring game: {e}"),
            },
            HistoryAction::SetCurrentFen(fen) => {
                self.fens = vec![fen];
                self.plies.clear();
                self.go(0);
            }
        }
    }

    fn go(&mut self, position: isize) {
        let len = self.fens.len();
        let index = if position < 0 {
            len.checked_sub(position.unsigned_abs()).unwrap_or_default()
        } else {
            position.unsigned_abs()
        };
        self.index = index.min(len.saturating_sub(1));
    }

    #[must_use]
    pub fn current_fen(&self) -> Option<&str> {
        self.fens.get(self.index).map(String::as_str)
    }

    /// Coordinates of the move that led to the current position.
    #[must_use]
    pub fn last_move(&self) -> Option<&str> {
        self.plies.get(self.index).map(|ply| ply.uci.as_str())
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub const fn can_go_forward(&self) -> bool {
        self.index + 1 < self.fens.len()
    }

    #[must_use]
    pub fn pgn_list(&self) -> Vec<PgnRow> {
        self.pgn
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(move_index, line)| {
                let mut items = line.split_whitespace().skip(1);
                PgnRow {
                    move_index,
                    white: items.next().unwrap_or_default().to_string(),
                    black: items.next().unwrap_or_default().to_string(),
                }
            })
            .collect()
    }
}
