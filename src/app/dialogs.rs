use crate::app::use_store;
use centaur_core::adapter::Side;
use centaur_core::store::{Action, Dialog, DisplayAction, SettingId, WEB_SETTINGS};
use leptos::ev::MouseEvent;
use leptos::{
    component, create_memo, event_target_checked, spawn_local, view, IntoView, Memo, Show,
    SignalGet,
};
use wasm_bindgen_futures::JsFuture;
use web_sys::Clipboard;

const LICHESS_PASTE: &str = "https://lichess.org/paste";

fn modal_class(open: bool) -> &'static str {
    if open {
        "modal modal-open"
    } else {
        "modal"
    }
}

#[component]
pub fn Dialogs() -> impl IntoView {
    let store = use_store();
    let dialog = create_memo(move |_| store.with(|state| state.display.dialog.clone()));

    view! {
        <WebSettings dialog=dialog/>
        <ViewPgn dialog=dialog/>
        <ConfirmColor dialog=dialog/>
    }
}

#[component]
fn WebSettings(dialog: Memo<Dialog>) -> impl IntoView {
    let store = use_store();
    let toggles = WEB_SETTINGS
        .into_iter()
        .map(|(id, label)| view! { <SettingToggle id=id label=label/> })
        .collect::<Vec<_>>();

    view! {
        <dialog class=move || modal_class(dialog.get() == Dialog::WebSettings)>
            <div class="modal-box">
                <h3 class="title">"🕸 Web settings"</h3>
                <ul class="menu">{toggles}</ul>
                <div class="modal-action">
                    <button class="btn btn-primary" on:click=move |_| {
                        store.dispatch(Action::Display(DisplayAction::ShowDialog(Dialog::None)));
                    }>
                        "Close"
                    </button>
                </div>
            </div>
        </dialog>
    }
}

#[component]
fn SettingToggle(id: SettingId, label: &'static str) -> impl IntoView {
    let store = use_store();
    let checked = create_memo(move |_| store.with(|state| state.display.setting(id)));

    view! {
        <li>
            <label>
                <input
                    type="checkbox"
                    class="toggle"
                    prop:checked=move || checked.get()
                    on:change=move |ev| {
                        let value = event_target_checked(&ev);
                        store.dispatch(Action::Display(DisplayAction::UpdateSettings(vec![(id, value)])));
                    }
                />
                {label}
            </label>
        </li>
    }
}

/// The page's clipboard. Browsers only expose it to secure contexts.
fn clipboard() -> Option<Clipboard> {
    let clipboard = web_sys::window()?.navigator().clipboard();
    if clipboard.is_undefined() {
        None
    } else {
        Some(clipboard)
    }
}

async fn copy_text(clipboard: Clipboard, text: String) -> bool {
    match JsFuture::from(clipboard.write_text(&text)).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("could not copy the game: {e:?}");
            false
        }
    }
}

fn open_lichess() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(LICHESS_PASTE, "_blank") {
        log::warn!("could not open {LICHESS_PASTE}: {e:?}");
    }
}

#[component]
fn ViewPgn(dialog: Memo<Dialog>) -> impl IntoView {
    let store = use_store();
    let pgn = move || match dialog.get() {
        Dialog::ViewPgn(pgn) => Some(pgn),
        _ => None,
    };
    let close = move || store.dispatch(Action::Display(DisplayAction::ShowDialog(Dialog::None)));
    let copy = move |_: MouseEvent| {
        let (Some(clipboard), Some(text)) = (clipboard(), pgn()) else {
            return;
        };
        spawn_local(async move {
            copy_text(clipboard, text).await;
        });
    };
    let copy_and_go = move |_: MouseEvent| {
        let (Some(clipboard), Some(text)) = (clipboard(), pgn()) else {
            return;
        };
        spawn_local(async move {
            if copy_text(clipboard, text).await {
                open_lichess();
                close();
            }
        });
    };

    view! {
        <dialog class=move || modal_class(pgn().is_some())>
            <div class="modal-box">
                <h3 class="title">"View current PGN"</h3>
                <textarea class="pgn-text" readonly=true prop:value=move || pgn().unwrap_or_default()></textarea>
                <div class="modal-action">
                    <Show
                        when=move || clipboard().is_some()
                        fallback=|| view! { <button class="btn" on:click=|_| open_lichess()>"Lichess"</button> }
                    >
                        <button class="btn" on:click=copy>"Copy"</button>
                        <button class="btn" on:click=copy_and_go>"Copy & go"</button>
                    </Show>
                    <button class="btn btn-primary" on:click=move |_| close()>
                        "Close"
                    </button>
                </div>
            </div>
        </dialog>
    }
}

#[component]
fn ConfirmColor(dialog: Memo<Dialog>) -> impl IntoView {
    let store = use_store();
    let open = move || dialog.get() == Dialog::ConfirmColor;

    view! {
        <Show when=open>
            <dialog class="modal modal-open">
                <div class="modal-box">
                    <h3 class="title">"What color do you play?"</h3>
                    <div class="modal-action">
                        <button class="btn" on:click=move |_| store.update(|s| s.choose_color(Side::White))>
                            "WHITE"
                        </button>
                        <button class="btn" on:click=move |_| store.update(|s| s.choose_color(Side::Black))>
                            "BLACK"
                        </button>
                        <button class="btn btn-primary" on:click=move |_| {
                            store.dispatch(Action::Display(DisplayAction::ShowDialog(Dialog::None)));
                        }>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </dialog>
        </Show>
    }
}
