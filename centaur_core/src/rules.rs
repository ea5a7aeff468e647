//! Thin wrapper over `shakmaty`, the chess rules collaborator: replays move
//! lists, reads and writes PGN movetext, and reports the side to move.

use serde::{Deserialize, Serialize};
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{Chess, EnPassantMode, Move, Position};
use std::fmt;

/// Side to move, with the numeric encoding the device uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Black = 0,
    White = 1,
}

impl Turn {
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

/// Reads the side-to-move field of a FEN string. Anything but `w` is black.
#[must_use]
pub fn turn_of_fen(fen: &str) -> Turn {
    if fen.split_whitespace().nth(1) == Some("w") {
        Turn::White
    } else {
        Turn::Black
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    InvalidMove(String),
    IllegalMove(String),
    UnterminatedComment,
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMove(token) => write!(f, "Invalid move in PGN: {token}"),
            Self::IllegalMove(token) => write!(f, "Illegal move: {token}"),
            Self::UnterminatedComment => write!(f, "Unterminated comment in PGN"),
        }
    }
}

impl std::error::Error for RulesError {}

/// One half-move and the position it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    pub uci: String,
    pub san: String,
    pub fen: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replay {
    pub plies: Vec<Ply>,
}

impl Replay {
    fn push(&mut self, pos: &mut Chess, mv: &Move) {
        let uci = UciMove::from_standard(mv).to_string();
        let san = SanPlus::from_move_and_play_unchecked(pos, mv).to_string();
        let fen = Fen(pos.clone().into_setup(EnPassantMode::Legal)).to_string();
        self.plies.push(Ply { uci, san, fen });
    }

    pub fn fens(&self) -> impl Iterator<Item = &str> {
        self.plies.iter().map(|ply| ply.fen.as_str())
    }

    /// Movetext with one move pair per line, `"1. e4 e5"`.
    #[must_use]
    pub fn movetext(&self) -> String {
        self.plies
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                let sans: Vec<&str> = pair.iter().map(|ply| ply.san.as_str()).collect();
                format!("{}. {}", i + 1, sans.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Plays UCI moves from the initial position. Empty entries are skipped.
///
/// # Errors
/// Returns the first move that does not parse or is not legal.
pub fn replay_uci<S: AsRef<str>>(moves: &[S]) -> Result<Replay, RulesError> {
    let mut pos = Chess::default();
    let mut replay = Replay::default();
    for text in moves.iter().map(AsRef::as_ref).filter(|m| !m.is_empty()) {
        let uci: UciMove = text
            .parse()
            .map_err(|_| RulesError::InvalidMove(text.to_string()))?;
        let mv = uci
            .to_move(&pos)
            .map_err(|_| RulesError::IllegalMove(text.to_string()))?;
        replay.push(&mut pos, &mv);
    }
    Ok(replay)
}

/// Strips everything but move tokens: tag pairs, comments, variations,
/// numeric annotation glyphs, move numbers and the game result.
fn movetext_tokens(pgn: &str) -> Result<Vec<String>, RulesError> {
    let body = pgn
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('[') && !line.starts_with('%'))
        .map(|line| line.split(';').next().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");

    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut rest = body.as_str();
    while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
        rest = rest.get(start..).unwrap_or_default();
        if let Some(comment) = rest.strip_prefix('{') {
            let end = comment.find('}').ok_or(RulesError::UnterminatedComment)?;
            rest = comment.get(end + 1..).unwrap_or_default();
            continue;
        }
        let end = rest
            .find(|c: char| c.is_whitespace() || matches!(c, '{' | '(' | ')'))
            .unwrap_or(rest.len())
            .max(1);
        let token = rest.get(..end).unwrap_or_default();
        rest = rest.get(end..).unwrap_or_default();
        match token {
            "(" => depth += 1,
            ")" => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            "1-0" | "0-1" | "1/2-1/2" | "*" => break,
            _ if token.starts_with('$') => {}
            _ => {
                let mv = token
                    .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.')
                    .trim_end_matches(['!', '?']);
                if !mv.is_empty() {
                    tokens.push(mv.to_string());
                }
            }
        }
    }
    Ok(tokens)
}

/// Replays a PGN game. Unless `strict`, coordinate moves such as `e2e4` are
/// accepted where SAN is expected.
///
/// # Errors
/// Fails on an unterminated comment or the first move that does not replay.
pub fn parse_pgn(pgn: &str, strict: bool) -> Result<Replay, RulesError> {
    let mut pos = Chess::default();
    let mut replay = Replay::default();
    for token in movetext_tokens(pgn)? {
        let token = token.as_str();
        let mv = match token.parse::<SanPlus>() {
            Ok(san) => san.san.to_move(&pos).ok(),
            Err(_) => None,
        };
        let mv = match mv {
            Some(mv) => mv,
            None if !strict => token
                .parse::<UciMove>()
                .ok()
                .and_then(|uci| uci.to_move(&pos).ok())
                .ok_or_else(|| RulesError::InvalidMove(token.to_string()))?,
            None => return Err(RulesError::InvalidMove(token.to_string())),
        };
        replay.push(&mut pos, &mv);
    }
    Ok(replay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_uci_moves_into_fens_and_san() {
        let replay = replay_uci(&["e2e4", "", "e7e5", "g1f3"]).unwrap();
        let sans: Vec<&str> = replay.plies.iter().map(|p| p.san.as_str()).collect();
        assert_eq!(sans, ["e4", "e5", "Nf3"]);
        assert_eq!(
            replay.plies.last().unwrap().fen,
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
        assert_eq!(replay.movetext(), "1. e4 e5\n2. Nf3");
    }

    #[test]
    fn illegal_uci_move_is_reported() {
        assert_eq!(
            replay_uci(&["e2e5"]),
            Err(RulesError::IllegalMove("e2e5".into()))
        );
        assert_eq!(
            replay_uci(&["nope"]),
            Err(RulesError::InvalidMove("nope".into()))
        );
    }

    #[test]
    fn parses_pgn_with_headers_comments_and_variations() {
        let pgn = "[Event \"Casual\"]\n[White \"A\"]\n\n1. e4 {best by test} e5 (1... c5 2. Nf3) 2. Nf3 $1 Nc6!? 1-0";
        let replay = parse_pgn(pgn, true).unwrap();
        let sans: Vec<&str> = replay.plies.iter().map(|p| p.san.as_str()).collect();
        assert_eq!(sans, ["e4", "e5", "Nf3", "Nc6"]);
        assert_eq!(replay.plies.first().unwrap().uci, "e2e4");
    }

    #[test]
    fn strict_pgn_rejects_coordinate_moves() {
        assert_eq!(
            parse_pgn("1. e2e4", true).unwrap_err().to_string(),
            "Invalid move in PGN: e2e4"
        );
        assert_eq!(parse_pgn("1. e2e4", false).unwrap().plies.len(), 1);
    }

    #[test]
    fn illegal_san_is_reported_verbatim() {
        let err = parse_pgn("1. e4 e5 2. Ke3", true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid move in PGN: Ke3");
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        assert_eq!(
            parse_pgn("1. e4 {oops", true),
            Err(RulesError::UnterminatedComment)
        );
    }

    #[test]
    fn side_to_move_from_fen() {
        assert_eq!(
            turn_of_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Turn::White
        );
        assert_eq!(turn_of_fen("8/8/8/8/8/8/8/8 b - - 0 1"), Turn::Black);
        assert_eq!(turn_of_fen(""), Turn::Black);
    }
}
