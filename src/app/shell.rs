use crate::app::dialogs::Dialogs;
use crate::app::editor::Editor;
use crate::app::menu::Navbar;
use crate::app::previous_games::{Game, PreviousGames};
use crate::app::styles::APP_STYLES;
use crate::app::toasts::Toasts;
use crate::app::AppStore;
use crate::components::content::Content;
use crate::engine::EvaluationWorker;
use crate::network::DeviceEvents;
use crate::storage::LocalStorage;
use centaur_core::overlay::HighlightDirective;
use centaur_core::store::{
    Action, ChessboardAction, DisplayAction, MenuAction, MenuItem, Store,
};
use leptos::{
    component, create_effect, create_memo, create_rw_signal, create_signal, document,
    event_target_checked, on_cleanup, provide_context, view, IntoView, RwSignal, Show, SignalGet,
    SignalSet, SignalWith, WriteSignal,
};

/// Subscribes to everything the device pushes while the page is open.
fn follow_device(store: AppStore, screen: WriteSignal<f64>, games: RwSignal<Vec<Game>>) {
    let mut events = match DeviceEvents::open() {
        Ok(events) => events,
        Err(e) => {
            log::warn!("device events unavailable: {e:?}");
            return;
        }
    };
    let subscribed = [
        events.on("screen", move |_| screen.set(js_sys::Date::now())),
        events.on("fen", move |fen| store.update(|s| s.set_fen(fen.trim()))),
        events.on("highlight", move |json| {
            let directive = HighlightDirective::from_json(&json);
            store.dispatch(Action::Chessboard(ChessboardAction::SetMoveHighlight(directive)));
        }),
        events.on("menu", move |json| match serde_json::from_str::<Vec<MenuItem>>(&json) {
            Ok(items) => store.dispatch(Action::Menu(MenuAction::UpdateMenu(items))),
            Err(e) => log::warn!("ignoring menu: {e}"),
        }),
        events.on("games", move |json| match serde_json::from_str::<Vec<Game>>(&json) {
            Ok(list) => games.set(list),
            Err(e) => log::warn!("ignoring game list: {e}"),
        }),
        events.on("release", move |release| {
            store.dispatch(Action::Display(DisplayAction::Release(release)));
        }),
        events.on("alert", move |message| {
            store.dispatch(Action::Display(DisplayAction::ShowAlert(message)));
        }),
    ];
    for result in subscribed {
        if let Err(e) = result {
            log::warn!("device event not followed: {e:?}");
        }
    }
    on_cleanup(move || drop(events));
}

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(create_rw_signal(Store::new(Box::new(LocalStorage::new()))));
    provide_context(store);
    provide_context(EvaluationWorker::spawn());

    let (screen_stamp, set_screen_stamp) = create_signal(js_sys::Date::now());
    let games = create_rw_signal(Vec::<Game>::new());
    follow_device(store, set_screen_stamp, games);

    let title = create_memo(move |_| store.with(|state| state.display.title()));
    create_effect(move |_| document().set_title(&title.get()));

    // Stepping through the game shows the move that led to each position.
    let last_move = create_memo(move |_| {
        store.with(|state| state.history.last_move().map(String::from))
    });
    create_effect(move |_| {
        last_move.track();
        store.update(Store::highlight_cursor_move);
    });

    let show_drawer = create_memo(move |_| store.with(|state| state.display.show_drawer));
    let show_editor = create_memo(move |_| store.with(|state| state.display.show_editor));

    view! {
        <style>{APP_STYLES}</style>
        <div class="drawer">
            <input
                id="showDrawer"
                type="checkbox"
                class="drawer-toggle"
                prop:checked=move || show_drawer.get()
                on:change=move |ev| {
                    store.dispatch(Action::Display(DisplayAction::ShowDrawer(event_target_checked(&ev))));
                }
            />
            <div class="drawer-content">
                <Show
                    when=move || show_editor.get()
                    fallback=move || view! {
                        <Navbar/>
                        <Content screen_stamp=screen_stamp/>
                    }
                >
                    <Editor/>
                </Show>
                <Dialogs/>
            </div>
            <div class="drawer-side">
                <label class="drawer-overlay" for="showDrawer"></label>
                <PreviousGames games=games/>
            </div>
            <Toasts/>
        </div>
    }
}
