use crate::app::use_store;
use crate::components::board::Chessboard;
use crate::components::evaluation::Evaluation;
use crate::components::pgn_panel::PgnPanel;
use crate::components::screen::CentaurScreen;
use crate::components::SizeWatcher;
use centaur_core::layout::{compute_layout, Layout, Size, SCREEN_WIDTH};
use leptos::html::Div;
use leptos::{
    component, create_effect, create_memo, create_node_ref, create_signal, on_cleanup,
    store_value, view, IntoView, NodeRef, ReadSignal, Show, SignalGet, SignalSet,
};
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Board column, device screen and move list, arranged to leave the move
/// list as much room as possible.
#[component]
pub fn Content(screen_stamp: ReadSignal<f64>) -> impl IntoView {
    let store = use_store();
    let container_ref: NodeRef<Div> = create_node_ref();
    let evaluation_ref: NodeRef<Div> = create_node_ref();
    let (layout, set_layout) = create_signal(Layout::default());
    let watcher = store_value(None::<SizeWatcher>);

    let show_screen = create_memo(move |_| store.with(|state| state.display.settings.centaur_screen));
    let show_pgn = create_memo(move |_| store.with(|state| state.display.settings.pgn_panel));

    create_effect(move |_| {
        let (Some(container), Some(evaluation)) = (container_ref.get(), evaluation_ref.get()) else {
            return;
        };
        if watcher.with_value(Option::is_some) {
            return;
        }
        let container: Element = (*container).clone().unchecked_into();
        let evaluation: Element = (*evaluation).clone().unchecked_into();
        let observed = [container.clone(), evaluation.clone()];
        let relayout = move || {
            let bounds = container.get_bounding_client_rect();
            let evaluation_height = evaluation.get_bounding_client_rect().height();
            set_layout.set(compute_layout(
                Size::new(bounds.width(), bounds.height()),
                evaluation_height,
            ));
        };
        match SizeWatcher::observe(&observed, relayout) {
            Ok(resized) => watcher.set_value(Some(resized)),
            Err(e) => log::warn!("layout will not follow the window: {e:?}"),
        }
    });

    on_cleanup(move || watcher.set_value(None));

    let board_size = create_memo(move |_| layout.get().board_size());

    view! {
        <div _ref=container_ref class="content">
            <div class="board-column" style=move || format!("width: {}px;", board_size.get())>
                <Chessboard size=board_size/>
                <div _ref=evaluation_ref>
                    <Evaluation/>
                </div>
            </div>
            <Show when=move || show_screen.get()>
                <div class="screen-column" style=format!("width: {SCREEN_WIDTH}px;")>
                    <CentaurScreen stamp=screen_stamp/>
                </div>
            </Show>
            <Show when=move || show_pgn.get()>
                <div class="pgn-column" style=move || layout.get().panel.style()>
                    <PgnPanel/>
                </div>
            </Show>
        </div>
    }
}
