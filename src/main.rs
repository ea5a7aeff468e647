mod app;
mod components;
mod engine;
mod network;
mod storage;

use app::App;
use leptos::{mount_to_body, view};

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    mount_to_body(|| view! { <App/> });
}
