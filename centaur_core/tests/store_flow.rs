use centaur_core::adapter::Side;
use centaur_core::overlay::HighlightDirective;
use centaur_core::rules::Turn;
use centaur_core::store::{
    Action, ChessboardAction, Dialog, DisplayAction, EditorAction, EditorUpdate, HistoryAction, KeyValueStore,
    MemoryStore, MenuCommand, SettingId, Store,
};

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

fn store() -> Store {
    Store::new(Box::new(MemoryStore::default()))
}

#[test]
fn loading_moves_fills_history_and_move_list() {
    let mut store = store();
    store
        .init_from_moves(&["e2e4", "e7e5", "g1f3"])
        .expect("legal moves");

    let history = &store.state().history;
    assert_eq!(history.fens.len(), 3);
    assert_eq!(history.index, 2);
    assert_eq!(
        history.current_fen(),
        Some("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2")
    );
    let labels: Vec<String> = history.pgn_list().iter().map(|row| row.label()).collect();
    assert_eq!(labels, ["1. e4 e5", "2. Nf3 "]);
}

#[test]
fn illegal_moves_leave_history_untouched() {
    let mut store = store();
    store.init_from_moves(&["e2e4"]).expect("legal move");
    assert!(store.init_from_moves(&["e2e4", "e2e4"]).is_err());
    assert_eq!(store.state().history.fens.len(), 1);
}

#[test]
fn cursor_never_leaves_the_history() {
    let mut store = store();
    store
        .init_from_moves(&["d2d4", "d7d5", "c2c4", "e7e6", "b1c3"])
        .expect("legal moves");
    let len = store.state().history.fens.len();

    let steps = [false, false, true, false, false, false, false, false, true, true];
    for _ in 0..3 {
        for &forward in &steps {
            if forward {
                store.forward();
            } else {
                store.backward();
            }
            assert!(store.state().history.index < len);
        }
    }

    store.dispatch(Action::History(HistoryAction::Go(-1)));
    assert_eq!(store.state().history.index, len - 1);
    store.dispatch(Action::History(HistoryAction::Go(len as isize + 3)));
    assert_eq!(store.state().history.index, len - 1);
    store.dispatch(Action::History(HistoryAction::Go(0)));
    store.backward();
    assert_eq!(store.state().history.index, 0);
}

#[test]
fn settings_survive_a_reload() {
    let mut store = store();
    store.dispatch(Action::Display(DisplayAction::UpdateSettings(vec![(
        SettingId::PreviousMove,
        false,
    )])));

    let reloaded = Store::new(store.into_storage());
    let settings = &reloaded.state().display.settings;
    assert!(!settings.previous_move);
    assert!(settings.centaur_screen);
    assert!(settings.live_evaluation);
    assert!(!settings.kings_checks);
    assert!(!settings.reversed_board);
}

#[test]
fn disabling_evaluation_is_not_persisted() {
    let mut store = store();
    store.dispatch(Action::Display(DisplayAction::EvaluationDisabled(true)));
    assert!(!store.state().display.settings.live_evaluation);
    let reloaded = Store::new(store.into_storage());
    assert!(reloaded.state().display.settings.live_evaluation);
}

#[test]
fn device_position_sets_turn_and_resynchronizes() {
    let mut store = store();
    store.set_fen(AFTER_E4);
    let board = &store.state().board;
    assert_eq!(board.turn, Turn::Black);
    assert_eq!(board.turn_caption, "turn → black");
    assert_eq!(store.state().history.current_fen(), Some(AFTER_E4));

    store.dispatch(centaur_core::adapter::drop_intent());
    assert!(!store.state().board.synchronized);
    store.set_fen(AFTER_E4);
    assert!(store.state().board.synchronized);

    store.set_fen(START);
    assert_eq!(store.state().board.turn, Turn::White);
    assert_eq!(store.state().history.fens, [START]);
}

#[test]
fn same_position_while_synchronized_is_ignored() {
    let mut store = store();
    store.set_fen(START);
    store.dispatch(Action::Board(centaur_core::store::BoardAction::SetTurnCaption(
        "custom".into(),
    )));
    store.set_fen(START);
    assert_eq!(store.state().board.turn_caption, "custom");
}

#[test]
fn menu_commands_open_dialogs_and_flip_the_board() {
    let mut store = store();
    store.init_from_moves(&["e2e4"]).expect("legal move");

    store.run(MenuCommand::ViewPgn);
    assert_eq!(
        store.state().display.dialog,
        Dialog::ViewPgn("1. e4".into())
    );

    store.run(MenuCommand::ShowWebSettings);
    assert_eq!(store.state().display.dialog, Dialog::WebSettings);

    store.run(MenuCommand::ShowPreviousGames);
    assert!(store.state().display.show_drawer);

    store.run(MenuCommand::FlipBoard);
    assert!(store.state().display.settings.reversed_board);

    store.run(MenuCommand::ChooseColor);
    assert_eq!(store.state().display.dialog, Dialog::ConfirmColor);
    store.choose_color(Side::White);
    assert_eq!(store.state().display.dialog, Dialog::None);
    assert!(!store.state().display.settings.reversed_board);
}

#[test]
fn imported_game_replaces_history() {
    let mut store = store();
    store.run(MenuCommand::ImportPgn);
    assert!(store.state().display.show_editor);

    store.dispatch(Action::Editor(EditorAction::Update(EditorUpdate::text(
        "[Event \"?\"]\n\n1. d4 d5 2. c4 *",
    ))));
    assert_eq!(store.state().editor.parse_error(), None);
    store.execute_editor().expect("valid game");

    assert!(!store.state().display.show_editor);
    assert!(!store.state().board.synchronized);
    assert_eq!(store.state().history.fens.len(), 3);
    assert_eq!(store.state().history.pgn, "1. d4 d5\n2. c4");
}

#[test]
fn broken_import_reports_the_bad_move() {
    let mut store = store();
    store.run(MenuCommand::ImportPgn);
    store.dispatch(Action::Editor(EditorAction::Update(EditorUpdate::text(
        "1. d4 d5 2. Bxh7",
    ))));
    let err = store.execute_editor().expect_err("illegal move");
    assert_eq!(err.to_string(), "Invalid move in PGN: Bxh7");
    assert!(store.state().display.show_editor);
}

#[test]
fn live_script_is_kept_between_sessions() {
    let mut store = store();
    store.run(MenuCommand::EditLiveScript);
    assert_eq!(store.state().editor.text, "");
    store.dispatch(Action::Editor(EditorAction::Update(EditorUpdate::text(
        "print('hi')",
    ))));
    store.execute_editor().expect("scripts always run");

    let storage = store.into_storage();
    assert_eq!(storage.get("live_script").as_deref(), Some("print('hi')"));

    let mut store = Store::new(storage);
    store.run(MenuCommand::EditLiveScript);
    assert_eq!(store.state().editor.text, "print('hi')");
}

#[test]
fn cursor_move_highlight_follows_history_and_clears_on_new_position() {
    let mut store = store();
    store.init_from_moves(&["e2e4", "e7e5", "g1f3"]).unwrap();
    store.highlight_cursor_move();
    assert_eq!(
        store.state().chessboard.move_highlight,
        HighlightDirective::last_move("g1f3")
    );

    store.set_fen(AFTER_E4);
    assert_eq!(store.state().history.last_move(), None);
    store.highlight_cursor_move();
    assert_eq!(store.state().chessboard.move_highlight, HighlightDirective::default());
}

#[test]
fn device_highlight_survives_a_new_position() {
    let mut store = store();
    store.init_from_moves(&["e2e4", "e7e5"]).unwrap();
    store.highlight_cursor_move();

    let hint = HighlightDirective::from_json(r#"{"tip_uci_move":"g1f3"}"#);
    store.dispatch(Action::Chessboard(ChessboardAction::SetMoveHighlight(hint.clone())));
    store.set_fen(START);
    store.highlight_cursor_move();
    assert_eq!(store.state().chessboard.move_highlight, hint);
}
