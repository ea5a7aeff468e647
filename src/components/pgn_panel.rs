use crate::app::use_store;
use centaur_core::store::{Action, HistoryAction};
use leptos::{component, create_memo, view, For, IntoView, SignalGet};

fn cursor_class(current: bool) -> &'static str {
    if current {
        "current"
    } else {
        ""
    }
}

/// Moves of the game, one pair per row. Clicking a move shows its position.
#[component]
pub fn PgnPanel() -> impl IntoView {
    let store = use_store();
    let rows = create_memo(move |_| store.with(|state| state.history.pgn_list()));
    let index = create_memo(move |_| store.with(|state| state.history.index));

    let go = move |position: usize| {
        let position = isize::try_from(position).unwrap_or(isize::MAX);
        store.dispatch(Action::History(HistoryAction::Go(position)));
    };

    view! {
        <div class="pgn-panel">
            <For
                each=move || rows.get()
                key=|row| (row.move_index, row.white.clone(), row.black.clone())
                children=move |row| {
                    let (white, black) = (row.white_index(), row.black_index());
                    let number = row.move_index;
                    view! {
                        <div class="pgn-row">
                            <span class=move || cursor_class(index.get() / 2 == number)>
                                {format!("{}.", number + 1)}
                            </span>
                            " "
                            <a class=move || cursor_class(index.get() == white) on:click=move |_| go(white)>
                                {row.white}
                            </a>
                            " "
                            <a class=move || cursor_class(index.get() == black) on:click=move |_| go(black)>
                                {row.black}
                            </a>
                        </div>
                    }
                }
            />
        </div>
    }
}
