use crate::app::use_store;
use centaur_core::store::{Action, DisplayAction};
use leptos::{component, create_memo, view, For, IntoView, SignalGet};

#[component]
pub fn Toasts() -> impl IntoView {
    let store = use_store();
    let alerts = create_memo(move |_| store.with(|state| state.display.alerts.clone()));

    view! {
        <div class="toast">
            <For
                each=move || alerts.get()
                key=Clone::clone
                children=move |alert| {
                    let dismissed = alert.clone();
                    view! {
                        <div class="alert">
                            <span>{alert}</span>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| store.dispatch(Action::Display(DisplayAction::RemoveAlert(dismissed.clone())))
                            >
                                "Got it!"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
