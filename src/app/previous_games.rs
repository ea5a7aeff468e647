use crate::app::use_store;
use centaur_core::store::{Action, BoardAction, DisplayAction};
use leptos::{component, view, For, IntoView, RwSignal, SignalGet, SignalUpdate};
use serde::Deserialize;

/// A game recorded by the device.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Game {
    pub id: u64,
    #[serde(default)]
    pub white: String,
    #[serde(default)]
    pub black: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub created_at: String,
}

/// Drawer listing the games stored on the device.
#[component]
pub fn PreviousGames(games: RwSignal<Vec<Game>>) -> impl IntoView {
    let store = use_store();

    let load_game = move |id: u64| {
        log::info!("loading game {id}");
        store.dispatch(Action::Board(BoardAction::SetSynchronized(false)));
        store.dispatch(Action::Display(DisplayAction::ShowDrawer(false)));
    };
    let remove_game = move |id: u64| games.update(|games| games.retain(|game| game.id != id));

    view! {
        <div class="previous-games">
            <ul class="menu">
                <For
                    each=move || games.get()
                    key=|game| game.id
                    children=move |game| {
                        let id = game.id;
                        view! {
                            <li>
                                <button class="btn btn-circle btn-error" on:click=move |_| remove_game(id)>
                                    "🗑"
                                </button>
                                <div on:click=move |_| load_game(id)>
                                    <h3>{format!("{} vs. {} {}", game.white, game.black, game.result)}</h3>
                                    {game.created_at}
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
