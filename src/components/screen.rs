use crate::network::screen_url;
use centaur_core::layout::SCREEN_WIDTH;
use leptos::{component, view, IntoView, ReadSignal, SignalGet};

/// Mirror of the device's e-paper screen. `stamp` changes whenever the
/// device reports a redraw.
#[component]
pub fn CentaurScreen(stamp: ReadSignal<f64>) -> impl IntoView {
    view! {
        <div class="centaur-screen">
            <img class="upside-down" src=move || screen_url(stamp.get()) width=SCREEN_WIDTH height="296"/>
        </div>
    }
}
