use crate::app::use_store;
use crate::engine::EvaluationWorker;
use centaur_core::evaluation::EvaluationTracker;
use centaur_core::store::{Action, BoardAction};
use leptos::{
    component, create_effect, create_memo, on_cleanup, use_context, view, IntoView, Show,
    SignalGet,
};

/// Side to move and the engine's opinion of the position.
#[component]
pub fn Evaluation() -> impl IntoView {
    let store = use_store();
    let worker = use_context::<Option<EvaluationWorker>>().flatten();

    let synchronized = create_memo(move |_| store.with(|state| state.board.synchronized));
    let caption = create_memo(move |_| store.with(|state| state.board.turn_caption.clone()));
    let evaluation = create_memo(move |_| store.with(|state| state.board.evaluation));
    let live = create_memo(move |_| store.with(|state| state.display.settings.live_evaluation));
    let current_fen = create_memo(move |_| {
        store.with(|state| state.history.current_fen().map(String::from))
    });

    if let Some(worker) = worker {
        let mut tracker = EvaluationTracker::new();
        let listener = worker.listen(move |line| {
            let turn = store.with_untracked(|state| state.board.turn);
            if let Some(value) = tracker.handle_line(line, turn) {
                store.dispatch(Action::Board(BoardAction::SetEvaluation(value)));
            }
        });
        match listener {
            Ok(listener) => on_cleanup(move || drop(listener)),
            Err(e) => log::warn!("cannot follow the engine: {e:?}"),
        }

        create_effect(move |_| {
            if !live.get() {
                return;
            }
            if let Some(fen) = current_fen.get() {
                worker.evaluate(&fen);
            }
        });
    }

    view! {
        <div class="evaluation">
            <Show
                when=move || synchronized.get()
                fallback=|| view! { <h3 class="caption">"--"</h3> }
            >
                <h3 class="caption">{move || caption.get()}</h3>
                <Show when=move || live.get()>
                    <progress class="progress" max="100" value=move || evaluation.get()></progress>
                </Show>
            </Show>
        </div>
    }
}
