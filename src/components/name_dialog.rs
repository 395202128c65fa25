//! First-visit dialog asking for the visitor's name.
//!
//! Replaces the blocking browser prompt: the page renders underneath and the
//! greeting stays empty until the dialog resolves. Skipping or answering with
//! whitespace falls back to the guest name. The answer is persisted once and
//! never asked for again.

use leptos::prelude::*;

use crate::state::greeting;

/// Shows the name dialog until a name exists.
#[component]
pub fn NameDialog() -> impl IntoView {
    let name = expect_context::<RwSignal<Option<String>>>();

    view! {
        <Show when=move || name.get().is_none()>
            <NameDialogForm/>
        </Show>
    }
}

#[component]
fn NameDialogForm() -> impl IntoView {
    let name = expect_context::<RwSignal<Option<String>>>();
    let draft = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let resolve = move |raw: String| {
        let resolved = greeting::normalize_name(&raw);
        greeting::store_name(&resolved);
        name.set(Some(resolved));
    };

    let submit = move || resolve(draft.get());
    let cancel = move || resolve(String::new());

    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog" aria-label="Welcome">
                <h2>"Welcome to OMORO's Jewelry!"</h2>
                <label class="dialog__label">
                    "What's your name?"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder=greeting::DEFAULT_NAME
                        node_ref=input_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>"Skip"</button>
                    <button class="btn btn--primary" on:click=move |_| submit()>"Continue"</button>
                </div>
            </div>
        </div>
    }
}
