use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage key of the persisted settings blob.
pub const SETTINGS_KEY: &str = "display";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub active_board: bool,
    pub centaur_screen: bool,
    pub chat_panel: bool,
    pub kings_checks: bool,
    pub live_evaluation: bool,
    pub pgn_panel: bool,
    pub previous_move: bool,
    pub reversed_board: bool,
    /// Keys written by other releases, kept as they are.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_board: false,
            centaur_screen: true,
            chat_panel: true,
            kings_checks: false,
            live_evaluation: true,
            pgn_panel: true,
            previous_move: true,
            reversed_board: false,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingId {
    PreviousMove,
    KingsChecks,
    LiveEvaluation,
    CentaurScreen,
    PgnPanel,
    ChatPanel,
    ReversedBoard,
    ActiveBoard,
}

impl SettingId {
    /// Name of the setting in the persisted blob.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PreviousMove => "previousMove",
            Self::KingsChecks => "kingsChecks",
            Self::LiveEvaluation => "liveEvaluation",
            Self::CentaurScreen => "centaurScreen",
            Self::PgnPanel => "pgnPanel",
            Self::ChatPanel => "chatPanel",
            Self::ReversedBoard => "reversedBoard",
            Self::ActiveBoard => "activeBoard",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        WEB_SETTINGS
            .into_iter()
            .map(|(id, _)| id)
            .find(|id| id.key() == key)
    }
}

/// Toggles offered by the web settings dialog, in display order.
pub const WEB_SETTINGS: [(SettingId, &str); 8] = [
    (SettingId::PreviousMove, "Previous move displayed"),
    (SettingId::KingsChecks, "Kings checks displayed"),
    (SettingId::LiveEvaluation, "Live evaluation displayed"),
    (SettingId::CentaurScreen, "Centaur screen displayed"),
    (SettingId::PgnPanel, "PGN panel displayed"),
    (SettingId::ChatPanel, "Chat panel displayed"),
    (SettingId::ReversedBoard, "Board is reversed"),
    (SettingId::ActiveBoard, "Board is active"),
];

impl Settings {
    #[must_use]
    pub const fn get(&self, id: SettingId) -> bool {
        match id {
            SettingId::ActiveBoard => self.active_board,
            SettingId::CentaurScreen => self.centaur_screen,
            SettingId::ChatPanel => self.chat_panel,
            SettingId::KingsChecks => self.kings_checks,
            SettingId::LiveEvaluation => self.live_evaluation,
            SettingId::PgnPanel => self.pgn_panel,
            SettingId::PreviousMove => self.previous_move,
            SettingId::ReversedBoard => self.reversed_board,
        }
    }

    pub fn set(&mut self, id: SettingId, value: bool) {
        let slot = match id {
            SettingId::ActiveBoard => &mut self.active_board,
            SettingId::CentaurScreen => &mut self.centaur_screen,
            SettingId::ChatPanel => &mut self.chat_panel,
            SettingId::KingsChecks => &mut self.kings_checks,
            SettingId::LiveEvaluation => &mut self.live_evaluation,
            SettingId::PgnPanel => &mut self.pgn_panel,
            SettingId::PreviousMove => &mut self.previous_move,
            SettingId::ReversedBoard => &mut self.reversed_board,
        };
        *slot = value;
    }

    /// Persisted values merged over the defaults. A blob that does not parse
    /// is dropped in favour of the defaults.
    #[must_use]
    pub fn load(storage: &dyn KeyValueStore) -> Self {
        let Some(json) = storage.get(SETTINGS_KEY) else {
            return Self::default();
        };
        let stored = match serde_json::from_str::<Map<String, Value>>(&json) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("discarding stored settings: {e}");
                return Self::default();
            }
        };
        let mut settings = Self::default();
        for (key, value) in stored {
            match (SettingId::from_key(&key), value) {
                (Some(id), Value::Bool(flag)) => settings.set(id, flag),
                (Some(_), other) => log::warn!("ignoring stored {key}: {other}"),
                (None, other) => {
                    settings.extra.insert(key, other);
                }
            }
        }
        settings
    }

    pub fn save(&self, storage: &mut dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => storage.set(SETTINGS_KEY, &json),
            Err(e) => log::warn!("could not store settings: {e}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    None,
    WebSettings,
    ViewPgn(String),
    ConfirmColor,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub alerts: Vec<String>,
    pub dialog: Dialog,
    pub release: String,
    pub settings: Settings,
    pub show_drawer: bool,
    pub show_editor: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayAction {
    EvaluationDisabled(bool),
    Release(String),
    RemoveAlert(String),
    ShowAlert(String),
    ShowDialog(Dialog),
    ShowDrawer(bool),
    ShowEditor(bool),
    ShowWebSettings,
    /// Shallow merge; the store persists the result.
    UpdateSettings(Vec<(SettingId, bool)>),
}

impl DisplayState {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn reduce(&mut self, action: DisplayAction) {
        match action {
            DisplayAction::EvaluationDisabled(disabled) => {
                self.settings.live_evaluation = !disabled;
            }
            DisplayAction::Release(release) => self.release = release,
            DisplayAction::RemoveAlert(message) => self.alerts.retain(|a| *a != message),
            DisplayAction::ShowAlert(message) => {
                self.alerts.retain(|a| *a != message);
                self.alerts.push(message);
            }
            DisplayAction::ShowDialog(dialog) => self.dialog = dialog,
            DisplayAction::ShowDrawer(show) => self.show_drawer = show,
            DisplayAction::ShowEditor(show) => self.show_editor = show,
            DisplayAction::ShowWebSettings => self.dialog = Dialog::WebSettings,
            DisplayAction::UpdateSettings(changes) => {
                for (id, value) in changes {
                    self.settings.set(id, value);
                }
            }
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("DGTCentaurMods {}", self.release)
    }

    #[must_use]
    pub const fn setting(&self, id: SettingId) -> bool {
        self.settings.get(id)
    }
}
