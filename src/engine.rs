use centaur_core::evaluation::{go_command, position_command, EVALUATION_DEPTH};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, Worker};

const STOCKFISH_URL: &str = "/stockfish/stockfish.js";

/// The engine worker that scores positions for the evaluation bar. One per
/// page, shared through context.
#[derive(Clone)]
pub struct EvaluationWorker {
    worker: Worker,
}

impl EvaluationWorker {
    pub fn spawn() -> Option<Self> {
        match Worker::new(STOCKFISH_URL) {
            Ok(worker) => Some(Self { worker }),
            Err(e) => {
                log::warn!("evaluation engine unavailable: {e:?}");
                None
            }
        }
    }

    pub fn evaluate(&self, fen: &str) {
        for command in [position_command(fen), go_command(EVALUATION_DEPTH)] {
            if let Err(e) = self.worker.post_message(&JsValue::from_str(&command)) {
                log::warn!("engine refused {command:?}: {e:?}");
            }
        }
    }

    /// Forwards every line the engine prints until the listener is dropped.
    pub fn listen(
        &self,
        mut on_line: impl FnMut(&str) + 'static,
    ) -> Result<EngineListener, JsValue> {
        let callback = Closure::<dyn FnMut(MessageEvent)>::new(move |e: MessageEvent| {
            if let Some(line) = e.data().as_string() {
                on_line(&line);
            }
        });
        self.worker
            .add_event_listener_with_callback("message", callback.as_ref().unchecked_ref())?;
        Ok(EngineListener {
            worker: self.worker.clone(),
            callback,
        })
    }
}

pub struct EngineListener {
    worker: Worker,
    callback: Closure<dyn FnMut(MessageEvent)>,
}

impl Drop for EngineListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .worker
            .remove_event_listener_with_callback("message", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("engine listener not removed: {e:?}");
        }
    }
}
