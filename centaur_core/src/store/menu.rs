use serde::{Deserialize, Serialize};

/// What a menu entry does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCommand {
    ShowWebSettings,
    ViewPgn,
    ShowPreviousGames,
    FlipBoard,
    ChooseColor,
    EditLiveScript,
    ImportPgn,
    /// A command from a newer firmware.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuKind {
    #[default]
    Item,
    Divider,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub id: Option<String>,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: MenuKind,
    pub command: Option<MenuCommand>,
    pub disabled: bool,
    /// A non-empty list turns the entry into a submenu.
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    fn action(id: &str, label: &str, command: MenuCommand) -> Self {
        Self {
            id: Some(id.to_string()),
            label: label.to_string(),
            command: Some(command),
            ..Self::default()
        }
    }

    fn submenu(label: &str, items: Vec<Self>) -> Self {
        Self {
            label: label.to_string(),
            items,
            ..Self::default()
        }
    }

    fn divider() -> Self {
        Self {
            kind: MenuKind::Divider,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_submenu(&self) -> bool {
        !self.items.is_empty()
    }

    fn is_known(&self) -> bool {
        self.kind != MenuKind::Unknown && self.command != Some(MenuCommand::Unknown)
    }
}

/// Drops entries this client cannot show, at any depth.
fn retain_known(items: &mut Vec<MenuItem>) {
    items.retain(MenuItem::is_known);
    for item in items {
        retain_known(&mut item.items);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    UpdateMenu(Vec<MenuItem>),
    DisableMenu(String),
    EnableMenu(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub items: Vec<MenuItem>,
}

fn set_disabled(items: &mut [MenuItem], id: &str, disabled: bool) {
    for item in items {
        set_disabled(&mut item.items, id, disabled);
        if item.id.as_deref() == Some(id) {
            item.disabled = disabled;
        }
    }
}

impl MenuState {
    pub fn reduce(&mut self, action: MenuAction) {
        match action {
            MenuAction::UpdateMenu(mut items) => {
                retain_known(&mut items);
                self.items = items;
            }
            MenuAction::DisableMenu(id) => set_disabled(&mut self.items, &id, true),
            MenuAction::EnableMenu(id) => set_disabled(&mut self.items, &id, false),
        }
    }
}

#[must_use]
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::submenu(
            "Game",
            vec![
                MenuItem::action("view_pgn", "View PGN", MenuCommand::ViewPgn),
                MenuItem::action("import_pgn", "Import PGN", MenuCommand::ImportPgn),
                MenuItem::action(
                    "previous_games",
                    "Previous games",
                    MenuCommand::ShowPreviousGames,
                ),
                MenuItem::divider(),
                MenuItem::action("choose_color", "Play as...", MenuCommand::ChooseColor),
            ],
        ),
        MenuItem::submenu(
            "Board",
            vec![MenuItem::action(
                "flip_board",
                "Flip board",
                MenuCommand::FlipBoard,
            )],
        ),
        MenuItem::submenu(
            "Settings",
            vec![
                MenuItem::action(
                    "web_settings",
                    "Web settings",
                    MenuCommand::ShowWebSettings,
                ),
                MenuItem::action("live_script", "Live script", MenuCommand::EditLiveScript),
            ],
        ),
    ]
}
