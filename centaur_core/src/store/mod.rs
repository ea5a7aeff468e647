//! Application state: six slices, each with its own reducer, plus the
//! coordinators that need more than one slice or a collaborator.

pub mod board;
pub mod chessboard;
pub mod display;
pub mod editor;
pub mod history;
pub mod menu;

pub use board::{turn_caption, BoardAction, BoardState, BoardUpdate};
pub use chessboard::{ChessboardAction, ChessboardState};
pub use display::{Dialog, DisplayAction, DisplayState, SettingId, Settings, WEB_SETTINGS};
pub use editor::{EditorAction, EditorState, EditorUpdate, SyntaxMode};
pub use history::{HistoryAction, HistoryState, PgnRow};
pub use menu::{default_menu, MenuAction, MenuCommand, MenuItem, MenuKind, MenuState};

use crate::adapter::Side;
use crate::overlay::HighlightDirective;
use crate::rules::{parse_pgn, replay_uci, turn_of_fen, RulesError};
use editor::{IMPORT_PGN_ID, LIVE_SCRIPT_ID};
use std::collections::HashMap;

/// String key-value persistence, the browser's local storage in production.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Board(BoardAction),
    Chessboard(ChessboardAction),
    Display(DisplayAction),
    Editor(EditorAction),
    History(HistoryAction),
    Menu(MenuAction),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub board: BoardState,
    pub chessboard: ChessboardState,
    pub display: DisplayState,
    pub editor: EditorState,
    pub history: HistoryState,
    pub menu: MenuState,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            display: DisplayState::new(settings),
            menu: MenuState {
                items: default_menu(),
            },
            ..Self::default()
        }
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Board(action) => self.board.reduce(action),
            Action::Chessboard(action) => self.chessboard.reduce(action),
            Action::Display(action) => self.display.reduce(action),
            Action::Editor(action) => self.editor.reduce(action),
            Action::History(action) => self.history.reduce(action),
            Action::Menu(action) => self.menu.reduce(action),
        }
    }
}

pub struct Store {
    state: AppState,
    storage: Box<dyn KeyValueStore>,
    /// Highlight last placed by `highlight_cursor_move`.
    cursor_highlight: Option<HighlightDirective>,
}

impl Store {
    /// Builds the initial state, restoring settings from `storage`.
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        let settings = Settings::load(storage.as_ref());
        Self {
            state: AppState::new(settings),
            storage,
            cursor_highlight: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn into_storage(self) -> Box<dyn KeyValueStore> {
        self.storage
    }

    pub fn dispatch(&mut self, action: Action) {
        let persist = matches!(action, Action::Display(DisplayAction::UpdateSettings(_)));
        self.state.reduce(action);
        if persist {
            self.state.display.settings.save(self.storage.as_mut());
        }
    }

    /// Applies a position reported by the device.
    pub fn set_fen(&mut self, fen: &str) {
        if self.state.board.synchronized && self.state.history.current_fen() == Some(fen) {
            return;
        }
        let turn = turn_of_fen(fen);
        self.dispatch(Action::Board(BoardAction::UpdateBoard(BoardUpdate {
            turn: Some(turn),
            turn_caption: Some(turn_caption(turn)),
            synchronized: Some(true),
            ..BoardUpdate::default()
        })));
        self.dispatch(Action::History(HistoryAction::SetCurrentFen(fen.to_string())));
    }

    /// Points the overlay at the move that led to the position under the
    /// cursor. When there is no such move, a highlight placed here earlier is
    /// cleared; one pushed by the device since then is left alone.
    pub fn highlight_cursor_move(&mut self) {
        if let Some(uci) = self.state.history.last_move() {
            let directive = HighlightDirective::last_move(uci);
            self.cursor_highlight = Some(directive.clone());
            self.dispatch(Action::Chessboard(ChessboardAction::SetMoveHighlight(directive)));
        } else if let Some(placed) = self.cursor_highlight.take() {
            if self.state.chessboard.move_highlight == placed {
                self.dispatch(Action::Chessboard(ChessboardAction::SetMoveHighlight(
                    HighlightDirective::default(),
                )));
            }
        }
    }

    pub fn backward(&mut self) {
        let history = &self.state.history;
        if history.can_go_back() {
            let index = history.index.saturating_sub(1);
            self.go(index);
        }
    }

    pub fn forward(&mut self) {
        let history = &self.state.history;
        if history.can_go_forward() {
            let index = history.index + 1;
            self.go(index);
        }
    }

    fn go(&mut self, index: usize) {
        let position = isize::try_from(index).unwrap_or(isize::MAX);
        self.dispatch(Action::History(HistoryAction::Go(position)));
    }

    /// Replaces the history with the game reached by `moves`.
    ///
    /// # Errors
    /// Fails on the first move that is malformed or illegal; the history is
    /// then left untouched.
    pub fn init_from_moves<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<(), RulesError> {
        let replay = replay_uci(moves)?;
        self.dispatch(Action::History(HistoryAction::InitFromPgn(replay.movetext())));
        Ok(())
    }

    /// Runs the editor buffer: an imported game replaces the history, any
    /// other buffer is kept as the live script.
    ///
    /// # Errors
    /// Returns the parse error of an imported game that does not replay.
    pub fn execute_editor(&mut self) -> Result<(), RulesError> {
        let editor = &self.state.editor;
        if editor.id == IMPORT_PGN_ID {
            parse_pgn(&editor.text, true)?;
            let pgn = editor.text.clone();
            self.dispatch(Action::History(HistoryAction::InitFromPgn(pgn)));
            self.dispatch(Action::Board(BoardAction::SetSynchronized(false)));
            self.dispatch(Action::Display(DisplayAction::ShowEditor(false)));
        } else {
            self.storage.set(LIVE_SCRIPT_ID, &editor.text);
        }
        Ok(())
    }

    fn open_editor(&mut self, update: EditorUpdate) {
        self.dispatch(Action::Editor(EditorAction::Update(update)));
        self.dispatch(Action::Display(DisplayAction::ShowEditor(true)));
    }

    pub fn run(&mut self, command: MenuCommand) {
        match command {
            MenuCommand::ShowWebSettings => {
                self.dispatch(Action::Display(DisplayAction::ShowWebSettings));
            }
            MenuCommand::ViewPgn => {
                let pgn = self.state.history.pgn.clone();
                self.dispatch(Action::Display(DisplayAction::ShowDialog(Dialog::ViewPgn(
                    pgn,
                ))));
            }
            MenuCommand::ShowPreviousGames => {
                self.dispatch(Action::Display(DisplayAction::ShowDrawer(true)));
            }
            MenuCommand::FlipBoard => {
                let reversed = self.state.display.settings.reversed_board;
                self.dispatch(Action::Display(DisplayAction::UpdateSettings(vec![(
                    SettingId::ReversedBoard,
                    !reversed,
                )])));
            }
            MenuCommand::ChooseColor => {
                self.dispatch(Action::Display(DisplayAction::ShowDialog(
                    Dialog::ConfirmColor,
                )));
            }
            MenuCommand::EditLiveScript => {
                let text = self.storage.get(LIVE_SCRIPT_ID).unwrap_or_default();
                self.open_editor(EditorUpdate {
                    can_execute: Some(true),
                    editable_name: Some(false),
                    extension: Some("js".into()),
                    file: Some(LIVE_SCRIPT_ID.into()),
                    id: Some(LIVE_SCRIPT_ID.into()),
                    new_file: Some(String::new()),
                    text: Some(text),
                });
            }
            MenuCommand::Unknown => log::debug!("ignoring unknown menu command"),
            MenuCommand::ImportPgn => self.open_editor(EditorUpdate {
                can_execute: Some(true),
                editable_name: Some(false),
                extension: Some("pgn".into()),
                file: Some("import.pgn".into()),
                id: Some(IMPORT_PGN_ID.into()),
                new_file: Some(String::new()),
                text: Some(String::new()),
            }),
        }
    }

    /// Closes the colour dialog, turning the board to the chosen side.
    pub fn choose_color(&mut self, side: Side) {
        self.dispatch(Action::Display(DisplayAction::ShowDialog(Dialog::None)));
        self.dispatch(Action::Display(DisplayAction::UpdateSettings(vec![(
            SettingId::ReversedBoard,
            side == Side::Black,
        )])));
    }
}
