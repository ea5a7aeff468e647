pub mod dialogs;
pub mod editor;
pub mod menu;
pub mod previous_games;
pub mod shell;
pub mod styles;
pub mod toasts;

pub use shell::App;

use centaur_core::store::{Action, AppState, Store};
use leptos::{expect_context, RwSignal, SignalUpdate, SignalWith, SignalWithUntracked};

/// Handle to the application store shared through context.
#[derive(Clone, Copy)]
pub struct AppStore(RwSignal<Store>);

impl AppStore {
    pub const fn new(store: RwSignal<Store>) -> Self {
        Self(store)
    }

    pub fn dispatch(self, action: Action) {
        self.0.update(|store| store.dispatch(action));
    }

    /// Runs a coordinator against the store.
    pub fn update(self, f: impl FnOnce(&mut Store)) {
        self.0.update(f);
    }

    /// Reads state, subscribing the caller to changes.
    pub fn with<R>(self, f: impl FnOnce(&AppState) -> R) -> R {
        self.0.with(|store| f(store.state()))
    }

    pub fn with_untracked<R>(self, f: impl FnOnce(&AppState) -> R) -> R {
        self.0.with_untracked(|store| f(store.state()))
    }
}

pub fn use_store() -> AppStore {
    expect_context::<AppStore>()
}
