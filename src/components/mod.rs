pub mod arrows;
pub mod board;
pub mod content;
pub mod evaluation;
pub mod pgn_panel;
pub mod screen;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver};

/// Runs `on_resize` whenever one of the observed elements changes size.
/// Observation stops on drop.
pub struct SizeWatcher {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl SizeWatcher {
    pub fn observe(elements: &[Element], on_resize: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(on_resize);
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        for element in elements {
            observer.observe(element);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SizeWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
