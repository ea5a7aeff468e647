use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{EventSource, MessageEvent, Response};

const FEN_ENDPOINT: &str = "/api/fen";
const SCREEN_ENDPOINT: &str = "/api/screen";
const EVENTS_ENDPOINT: &str = "/events";

/// Position currently on the device.
pub async fn fetch_fen() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(FEN_ENDPOINT))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "{FEN_ENDPOINT} answered {}",
            response.status()
        )));
    }
    let body = JsFuture::from(response.text()?).await?;
    body.as_string()
        .map(|fen| fen.trim().to_string())
        .ok_or_else(|| JsValue::from_str("position is not text"))
}

/// Image of the device screen; the stamp defeats the browser cache.
pub fn screen_url(stamp: f64) -> String {
    format!("{SCREEN_ENDPOINT}?{stamp}")
}

type EventCallback = Closure<dyn FnMut(MessageEvent)>;

/// Server-sent events pushed by the device. Listeners are removed and the
/// connection closed on drop.
pub struct DeviceEvents {
    source: EventSource,
    listeners: Vec<(&'static str, EventCallback)>,
}

impl DeviceEvents {
    pub fn open() -> Result<Self, JsValue> {
        Ok(Self {
            source: EventSource::new(EVENTS_ENDPOINT)?,
            listeners: Vec::new(),
        })
    }

    /// Calls `handler` with the payload of every `event`.
    pub fn on(
        &mut self,
        event: &'static str,
        mut handler: impl FnMut(String) + 'static,
    ) -> Result<(), JsValue> {
        let callback = EventCallback::new(move |e: MessageEvent| {
            handler(e.data().as_string().unwrap_or_default());
        });
        self.source
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push((event, callback));
        Ok(())
    }
}

impl Drop for DeviceEvents {
    fn drop(&mut self) {
        for (event, callback) in &self.listeners {
            if let Err(e) = self
                .source
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("{event} listener not removed: {e:?}");
            }
        }
        self.source.close();
    }
}
