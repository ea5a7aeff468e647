use crate::app::use_store;
use centaur_core::store::{Action, DisplayAction, EditorAction, EditorUpdate, SyntaxMode};
use leptos::ev::MouseEvent;
use leptos::{component, create_memo, event_target_value, view, IntoView, Show, SignalGet};

/// Full-page editor for device files and the live script.
#[component]
pub fn Editor() -> impl IntoView {
    let store = use_store();
    let editor = create_memo(move |_| store.with(|state| state.editor.clone()));
    let parse_error = create_memo(move |_| editor.get().parse_error());
    let text_class = move || match editor.get().syntax_mode() {
        SyntaxMode::Properties => "code properties",
        SyntaxMode::Plain => "code",
    };

    let back = move |_: MouseEvent| store.dispatch(Action::Display(DisplayAction::ShowEditor(false)));
    let execute = move |_: MouseEvent| {
        store.update(|s| match s.execute_editor() {
            Ok(()) => s.dispatch(Action::Display(DisplayAction::ShowEditor(false))),
            Err(e) => log::warn!("not executed: {e}"),
        });
    };

    view! {
        <div class="editor">
            <div class="join">
                <div class="join-item file-name">
                    <Show
                        when=move || editor.get().editable_name
                        fallback=move || {
                            let state = editor.get();
                            let extension = if state.extension.is_empty() {
                                String::new()
                            } else {
                                format!(".{}", state.extension)
                            };
                            view! { <h2>{state.file}{extension}</h2> }
                        }
                    >
                        <label>
                            <input
                                class="input"
                                prop:value=move || editor.get().new_file
                                on:input=move |ev| {
                                    store.dispatch(Action::Editor(EditorAction::Update(EditorUpdate {
                                        new_file: Some(event_target_value(&ev)),
                                        ..EditorUpdate::default()
                                    })));
                                }
                            />
                            {move || format!(".{}", editor.get().extension)}
                        </label>
                    </Show>
                </div>
                <Show when=move || editor.get().can_execute>
                    <button
                        class="btn join-item"
                        prop:disabled=move || parse_error.get().is_some()
                        on:click=execute
                    >
                        "Execute"
                    </button>
                </Show>
                <button class="btn btn-primary join-item" on:click=back>"Back"</button>
                <div class="join-item">
                    <h2 class="text-error">{move || parse_error.get().unwrap_or_default()}</h2>
                </div>
            </div>
            <textarea
                class=text_class
                spellcheck="false"
                autofocus=true
                prop:value=move || editor.get().text
                on:input=move |ev| {
                    store.dispatch(Action::Editor(EditorAction::Update(EditorUpdate::text(
                        event_target_value(&ev),
                    ))));
                }
            ></textarea>
        </div>
    }
}
