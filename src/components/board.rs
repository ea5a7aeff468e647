use crate::app::{use_store, AppStore};
use crate::components::arrows::ChessboardArrows;
use crate::components::SizeWatcher;
use crate::network::fetch_fen;
use centaur_core::adapter::{can_drag, drop_intent, BoardAdapter, BoardView, BoardWidget, Side, SNAP_POLICY};
use centaur_core::store::{Action, HistoryAction, Store};
use leptos::html::Div;
use leptos::{
    component, create_effect, create_memo, create_node_ref, ev, on_cleanup, spawn_local,
    store_value, view, window_event_listener, IntoView, MaybeSignal, NodeRef, SignalGet,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

const PIECE_THEME: &str = "/img/chesspieces/wikipedia/{piece}.png";

#[wasm_bindgen]
extern "C" {
    /// A chessboard.js board.
    #[derive(Clone)]
    type ChessboardJs;

    #[wasm_bindgen(js_name = Chessboard)]
    fn create_chessboard(element: &HtmlElement, config: &JsValue) -> ChessboardJs;

    #[wasm_bindgen(method)]
    fn position(this: &ChessboardJs, fen: &str);

    #[wasm_bindgen(method)]
    fn orientation(this: &ChessboardJs, side: &str);

    #[wasm_bindgen(method)]
    fn resize(this: &ChessboardJs);

    #[wasm_bindgen(method, setter)]
    fn set_draggable(this: &ChessboardJs, draggable: bool);
}

struct JsBoard {
    board: ChessboardJs,
    element: HtmlElement,
    _on_drag_start: Closure<dyn Fn() -> bool>,
    _on_drop: Closure<dyn Fn() -> bool>,
    _on_snap_end: Closure<dyn Fn() -> JsValue>,
}

impl JsBoard {
    fn mount(element: HtmlElement, store: AppStore) -> Result<Self, JsValue> {
        let on_drag_start = Closure::<dyn Fn() -> bool>::new(move || {
            store.with_untracked(|state| can_drag(state.display.settings.active_board))
        });
        let on_drop = Closure::<dyn Fn() -> bool>::new(move || {
            store.dispatch(drop_intent());
            true
        });
        let on_snap_end =
            Closure::<dyn Fn() -> JsValue>::new(|| JsValue::from_str(SNAP_POLICY.name()));

        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"onDragStart".into(), on_drag_start.as_ref())?;
        js_sys::Reflect::set(&config, &"onDrop".into(), on_drop.as_ref())?;
        js_sys::Reflect::set(&config, &"onSnapEnd".into(), on_snap_end.as_ref())?;
        js_sys::Reflect::set(&config, &"pieceTheme".into(), &PIECE_THEME.into())?;
        js_sys::Reflect::set(&config, &"showNotation".into(), &JsValue::TRUE)?;

        let board = create_chessboard(&element, &config);
        Ok(Self {
            board,
            element,
            _on_drag_start: on_drag_start,
            _on_drop: on_drop,
            _on_snap_end: on_snap_end,
        })
    }
}

impl BoardWidget for JsBoard {
    fn set_position(&mut self, fen: &str) {
        self.board.position(fen);
    }

    fn set_orientation(&mut self, side: Side) {
        self.board.orientation(side.name());
    }

    fn set_draggable(&mut self, draggable: bool) {
        self.board.set_draggable(draggable);
    }

    fn resize(&mut self) {
        self.board.resize();
    }

    fn rendered_width(&self) -> f64 {
        // chessboard.js sizes its inner board to a multiple of eight pixels.
        match self.element.query_selector(".board-b72b1") {
            Ok(Some(inner)) => inner.get_bounding_client_rect().width(),
            _ => self.element.get_bounding_client_rect().width(),
        }
    }
}

#[component]
pub fn Chessboard(#[prop(into)] size: MaybeSignal<f64>) -> impl IntoView {
    let store = use_store();
    let board_ref: NodeRef<Div> = create_node_ref();
    let adapter = store_value(None::<BoardAdapter<JsBoard>>);
    let watcher = store_value(None::<SizeWatcher>);

    let current_fen = create_memo(move |_| {
        store.with(|state| state.history.current_fen().map(String::from))
    });
    let reversed = create_memo(move |_| store.with(|state| state.display.settings.reversed_board));
    let active = create_memo(move |_| store.with(|state| state.display.settings.active_board));

    spawn_local(async move {
        match fetch_fen().await {
            Ok(fen) if !fen.is_empty() => {
                store.dispatch(Action::History(HistoryAction::SetCurrentFen(fen)));
            }
            Ok(_) => {}
            Err(e) => log::warn!("initial position unavailable: {e:?}"),
        }
    });

    create_effect(move |_| {
        let Some(div) = board_ref.get() else {
            return;
        };
        if adapter.with_value(Option::is_none) {
            let element: HtmlElement = (*div).clone().unchecked_into();
            match JsBoard::mount(element.clone(), store) {
                Ok(widget) => adapter.set_value(Some(BoardAdapter::new(widget))),
                Err(e) => {
                    log::warn!("could not create the board: {e:?}");
                    return;
                }
            }
            let resized = SizeWatcher::observe(&[element.into()], move || {
                let action = adapter
                    .try_update_value(|adapter| adapter.as_mut().map(BoardAdapter::on_container_resize))
                    .flatten();
                if let Some(action) = action {
                    store.dispatch(action);
                }
            });
            match resized {
                Ok(resized) => watcher.set_value(Some(resized)),
                Err(e) => log::warn!("board size will not be tracked: {e:?}"),
            }
        }

        let fen = current_fen.get();
        let board_view = BoardView {
            fen: fen.as_deref(),
            reversed: reversed.get(),
            draggable: active.get(),
        };
        adapter.update_value(|adapter| {
            if let Some(adapter) = adapter {
                adapter.sync(&board_view);
            }
        });
    });

    let keys = window_event_listener(ev::keydown, move |e: KeyboardEvent| {
        match e.code().as_str() {
            "ArrowLeft" => store.update(Store::backward),
            "ArrowRight" => store.update(Store::forward),
            _ => return,
        }
        e.prevent_default();
    });

    on_cleanup(move || {
        keys.remove();
        watcher.set_value(None);
    });

    view! {
        <div class="board-frame" style=move || { let side = size.get(); format!("width: {side}px; height: {side}px;") }>
            <div _ref=board_ref class="board-widget"></div>
            <ChessboardArrows/>
        </div>
    }
}
