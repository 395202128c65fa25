//! Price/tax calculator modal.

use leptos::prelude::*;

use crate::state::calculator::{self, CalculatorState, Quote};

/// Calculator modal host.
///
/// The dialog is rendered fresh on each open, so the form always resets to
/// one unit and the default jurisdiction with the previous result cleared.
/// Escape closes it without computing, like the cancel control.
#[component]
pub fn PriceCalculator() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && calculator.get_untracked().is_open() {
            calculator.update(CalculatorState::close);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || calculator.get().is_open()>
            <CalculatorDialog/>
        </Show>
    }
}

#[component]
fn CalculatorDialog() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    let quantity = RwSignal::new("1".to_owned());
    let jurisdiction = RwSignal::new(calculator::DEFAULT_JURISDICTION.to_owned());
    let result = RwSignal::new(None::<String>);

    // Opening focuses the quantity field.
    let quantity_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move || {
        if let Some(input) = quantity_ref.get() {
            let _ = input.focus();
        }
    });

    let heading = move || {
        calculator
            .get()
            .session
            .map(|s| format!("Price calculator: {}", s.product))
            .unwrap_or_default()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = calculator.get_untracked().session else {
            return;
        };
        let qty = calculator::parse_quantity(&quantity.get_untracked());
        let quote = Quote::compute(session.unit_price, qty, &jurisdiction.get_untracked());
        result.set(Some(quote.summary()));
    };

    view! {
        <div id="price-modal" class="dialog-backdrop" aria-hidden="false">
            <div class="dialog" role="dialog" aria-label="Price calculator">
                <h2>{heading}</h2>
                <form id="price-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Quantity"
                        <input
                            id="calc-quantity"
                            class="dialog__input"
                            type="number"
                            node_ref=quantity_ref
                            prop:value=move || quantity.get()
                            on:input=move |ev| quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "State"
                        <select
                            id="calc-state"
                            class="dialog__input"
                            prop:value=move || jurisdiction.get()
                            on:change=move |ev| jurisdiction.set(event_target_value(&ev))
                        >
                            {calculator::JURISDICTIONS
                                .iter()
                                .copied()
                                .map(|code| view! { <option value=code>{code}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <p id="price-result" class="dialog__result">{move || result.get()}</p>
                    <div class="dialog__actions">
                        <button
                            id="calc-cancel"
                            type="button"
                            class="btn"
                            on:click=move |_| calculator.update(CalculatorState::close)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">"Calculate"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
