use crate::rules::parse_pgn;

/// Buffer id of the script executed in the browser.
pub const LIVE_SCRIPT_ID: &str = "live_script";
/// Buffer id of a PGN typed in to replace the move history.
pub const IMPORT_PGN_ID: &str = "import_pgn";

/// Highlighting applied by the code editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxMode {
    /// `key = value` files: engine and device configuration.
    Properties,
    Plain,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub can_execute: bool,
    pub editable_name: bool,
    pub extension: String,
    pub file: String,
    pub id: String,
    pub new_file: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorUpdate {
    pub can_execute: Option<bool>,
    pub editable_name: Option<bool>,
    pub extension: Option<String>,
    pub file: Option<String>,
    pub id: Option<String>,
    pub new_file: Option<String>,
    pub text: Option<String>,
}

impl EditorUpdate {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    Update(EditorUpdate),
}

impl EditorState {
    pub fn reduce(&mut self, action: EditorAction) {
        let EditorAction::Update(update) = action;
        if let Some(v) = update.can_execute {
            self.can_execute = v;
        }
        if let Some(v) = update.editable_name {
            self.editable_name = v;
        }
        if let Some(v) = update.extension {
            self.extension = v;
        }
        if let Some(v) = update.file {
            self.file = v;
        }
        if let Some(v) = update.id {
            self.id = v;
        }
        if let Some(v) = update.new_file {
            self.new_file = v;
        }
        if let Some(v) = update.text {
            self.text = v;
        }
    }

    #[must_use]
    pub fn syntax_mode(&self) -> SyntaxMode {
        if self.id == LIVE_SCRIPT_ID {
            return SyntaxMode::Plain;
        }
        match self.extension.as_str() {
            "ini" | "uci" => SyntaxMode::Properties,
            _ => SyntaxMode::Plain,
        }
    }

    /// Why the buffer is not a valid game, for `.pgn` files only.
    #[must_use]
    pub fn parse_error(&self) -> Option<String> {
        if self.extension != "pgn" {
            return None;
        }
        parse_pgn(&self.text, true).err().map(|e| e.to_string())
    }
}
