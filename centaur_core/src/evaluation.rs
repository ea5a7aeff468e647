//! Text protocol spoken with the evaluation engine worker and the mapping of
//! its scores onto the 0..=100 evaluation bar (50 is even).

use crate::rules::Turn;

/// Search depth requested for each live evaluation.
pub const EVALUATION_DEPTH: u8 = 1;
/// Centipawn scores beyond this are clamped.
pub const MAX_CENTIPAWNS: i32 = 1500;
/// Bar offset reported for a forced mate.
pub const MATE_SCORE: f64 = 50.0;
pub const EVEN: f64 = 50.0;

#[must_use]
pub fn position_command(fen: &str) -> String {
    format!("position fen {fen}")
}

#[must_use]
pub fn go_command(depth: u8) -> String {
    format!("go depth {depth}")
}

/// Offset from even, in `-50.0..=50.0`, for a centipawn score.
/// The sign flips when black is to move.
#[must_use]
pub fn scaled_centipawns(centipawns: i32, turn: Turn) -> f64 {
    let value = match turn {
        Turn::Black => centipawns.saturating_neg(),
        Turn::White => centipawns,
    }
    .clamp(-MAX_CENTIPAWNS, MAX_CENTIPAWNS);
    f64::from(value) / f64::from(MAX_CENTIPAWNS * 2) * 100.0
}

fn bar_value(offset: f64) -> f64 {
    (EVEN + offset).clamp(0.0, 100.0)
}

fn centipawns(line: &str) -> Option<i32> {
    let (_, tail) = line.split_once("score cp ")?;
    tail.split_whitespace().next()?.parse().ok()
}

/// Follows the engine's `info` lines and reports a bar value when an
/// evaluation completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationTracker {
    pending: f64,
}

impl Default for EvaluationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: 0.0 }
    }

    /// Returns a new bar value when `line` finalizes an evaluation. Lines that
    /// cannot be read leave the last value in place.
    pub fn handle_line(&mut self, line: &str, turn: Turn) -> Option<f64> {
        let mut finished = None;
        if line.contains("bestmove") {
            finished = Some(bar_value(self.pending));
        }
        if line.contains("score cp") {
            match centipawns(line) {
                Some(cp) => self.pending = scaled_centipawns(cp, turn),
                None => log::debug!("unreadable engine score: {line}"),
            }
        }
        if line.contains("score mate") {
            self.pending = match turn {
                Turn::Black => -MATE_SCORE,
                Turn::White => MATE_SCORE,
            };
            finished = Some(bar_value(self.pending));
        }
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn commands_follow_uci() {
        assert_eq!(position_command("8/8/8/8/8/8/8/8 w - - 0 1"), "position fen 8/8/8/8/8/8/8/8 w - - 0 1");
        assert_eq!(go_command(EVALUATION_DEPTH), "go depth 1");
    }

    #[test]
    fn centipawns_scale_and_flip_with_turn() {
        let expected = 537.0 / 3000.0 * 100.0;
        assert!(approx(scaled_centipawns(537, Turn::White), expected));
        assert!(approx(scaled_centipawns(537, Turn::Black), -expected));
        assert!(approx(scaled_centipawns(9000, Turn::White), 50.0));
        assert!(approx(scaled_centipawns(-9000, Turn::White), -50.0));
    }

    #[test]
    fn bestmove_publishes_the_pending_score() {
        let mut tracker = EvaluationTracker::new();
        let info = "info depth 1 seldepth 1 multipv 1 score cp 537 nodes 20 nps 10000";
        assert_eq!(tracker.handle_line(info, Turn::White), None);
        let value = tracker.handle_line("bestmove e2e4 ponder e7e5", Turn::White).unwrap();
        assert!(approx(value, 50.0 + 537.0 / 30.0));
    }

    #[test]
    fn negative_scores_are_read() {
        let mut tracker = EvaluationTracker::new();
        tracker.handle_line("info depth 1 score cp -300 nodes 1", Turn::White);
        let value = tracker.handle_line("bestmove d2d4", Turn::White).unwrap();
        assert!(approx(value, 40.0));
    }

    #[test]
    fn mate_jumps_to_the_extreme() {
        let mut tracker = EvaluationTracker::new();
        assert_eq!(tracker.handle_line("info depth 3 score mate 2 nodes 99", Turn::White), Some(100.0));
        assert_eq!(tracker.handle_line("info depth 3 score mate 2 nodes 99", Turn::Black), Some(0.0));
    }

    #[test]
    fn unreadable_score_keeps_last_value() {
        let mut tracker = EvaluationTracker::new();
        tracker.handle_line("info score cp 150 nodes 1", Turn::White);
        assert_eq!(tracker.handle_line("info score cp lots nodes 1", Turn::White), None);
        let value = tracker.handle_line("bestmove a2a3", Turn::White).unwrap();
        assert!(approx(value, 55.0));
        assert_eq!(tracker.handle_line("readyok", Turn::White), None);
    }
}
