use crate::app::{use_store, AppStore};
use centaur_core::store::{MenuItem, MenuKind};
use leptos::ev::MouseEvent;
use leptos::{component, create_memo, document, view, CollectView, IntoView, SignalGet, View};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

const OPEN_SUBMENUS: &str = ".navbar details[open]";

/// Folds the navbar's open submenus, except those holding `keep`.
fn close_submenus(keep: Option<&Node>) {
    let open = match document().query_selector_all(OPEN_SUBMENUS) {
        Ok(open) => open,
        Err(e) => {
            log::warn!("could not look up open submenus: {e:?}");
            return;
        }
    };
    for index in 0..open.length() {
        let Some(details) = open.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if keep.is_some_and(|node| details.contains(Some(node))) {
            continue;
        }
        if let Err(e) = details.remove_attribute("open") {
            log::warn!("could not fold submenu: {e:?}");
        }
    }
}

fn menu_list(items: Vec<MenuItem>, class: &'static str, store: AppStore) -> View {
    let entries = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let key = item.id.clone().unwrap_or_else(|| index.to_string());
            let class = if item.disabled { "disabled" } else { "" };
            view! { <li class=class data-id=key>{menu_entry(item, store)}</li> }
        })
        .collect_view();
    view! { <ul class=format!("menu {class}")>{entries}</ul> }.into_view()
}

fn menu_entry(item: MenuItem, store: AppStore) -> View {
    if item.is_submenu() {
        // Opening one submenu folds the unrelated ones.
        let on_summary = |ev: MouseEvent| {
            let target = ev.target().and_then(|target| target.dyn_into::<Node>().ok());
            close_submenus(target.as_ref());
        };
        return view! {
            <details>
                <summary on:click=on_summary>{item.label}</summary>
                {menu_list(item.items, "menu-vertical", store)}
            </details>
        }
        .into_view();
    }
    match (item.kind, item.command) {
        (MenuKind::Divider, _) => view! { <hr/> }.into_view(),
        (MenuKind::Item, Some(command)) if !item.disabled => view! {
            <a on:click=move |_| {
                close_submenus(None);
                store.update(|s| s.run(command));
            }>{item.label}</a>
        }
        .into_view(),
        (MenuKind::Item, Some(_)) => view! { <a>{item.label}</a> }.into_view(),
        (MenuKind::Item | MenuKind::Unknown, None) | (MenuKind::Unknown, Some(_)) => {
            ().into_view()
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_store();
    let items = create_memo(move |_| store.with(|state| state.menu.items.clone()));

    view! {
        <div class="navbar">
            {move || menu_list(items.get(), "menu-horizontal", store)}
        </div>
    }
}
