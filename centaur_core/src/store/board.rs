use crate::rules::Turn;

/// Current state of the game as reported by the device.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    /// Evaluation bar, 0..=100 with 50 even.
    pub evaluation: f64,
    pub loading: bool,
    pub plugin: Option<String>,
    /// False while a local drag waits for the device to confirm it.
    pub synchronized: bool,
    pub turn: Turn,
    pub turn_caption: String,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            evaluation: 50.0,
            loading: false,
            plugin: None,
            synchronized: true,
            turn: Turn::White,
            turn_caption: "--".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardUpdate {
    pub evaluation: Option<f64>,
    pub loading: Option<bool>,
    pub plugin: Option<Option<String>>,
    pub synchronized: Option<bool>,
    pub turn: Option<Turn>,
    pub turn_caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    SetEvaluation(f64),
    SetLoading(bool),
    SetPlugin(Option<String>),
    SetSynchronized(bool),
    SetTurnCaption(String),
    UpdateBoard(BoardUpdate),
}

#[must_use]
pub fn turn_caption(turn: Turn) -> String {
    format!("turn → {}", turn.name())
}

impl BoardState {
    pub fn reduce(&mut self, action: BoardAction) {
        match action {
            BoardAction::SetEvaluation(evaluation) => self.evaluation = evaluation,
            BoardAction::SetLoading(loading) => self.loading = loading,
            BoardAction::SetPlugin(plugin) => self.plugin = plugin,
            BoardAction::SetSynchronized(synchronized) => self.synchronized = synchronized,
            BoardAction::SetTurnCaption(caption) => self.turn_caption = caption,
            BoardAction::UpdateBoard(update) => self.apply(update),
        }
    }

    fn apply(&mut self, update: BoardUpdate) {
        if let Some(evaluation) = update.evaluation {
            self.evaluation = evaluation;
        }
        if let Some(loading) = update.loading {
            self.loading = loading;
        }
        if let Some(plugin) = update.plugin {
            self.plugin = plugin;
        }
        if let Some(synchronized) = update.synchronized {
            self.synchronized = synchronized;
        }
        if let Some(turn) = update.turn {
            self.turn = turn;
        }
        if let Some(caption) = update.turn_caption {
            self.turn_caption = caption;
        }
    }
}
