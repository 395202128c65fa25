//! One product card: image, price, tally counter, and calculator trigger.

use std::time::Duration;

use leptos::prelude::*;

use crate::catalog::Product;
use crate::state::animation::{self, AnimationMode};
use crate::state::calculator::CalculatorState;
use crate::state::counters::{self, CounterAction, Counters};
use crate::state::lightbox::Lightbox;
use crate::util::browser;

/// Card for a single catalog product.
///
/// `index` is the card's 0-based page position, shared by the lightbox image
/// list and the staggered entrance animation.
#[component]
pub fn ProductCard(
    product: Product,
    index: usize,
    animation_mode: RwSignal<AnimationMode>,
) -> impl IntoView {
    let counters_sig = expect_context::<RwSignal<Counters>>();
    let lightbox = expect_context::<RwSignal<Lightbox>>();
    let calculator = expect_context::<RwSignal<CalculatorState>>();

    let highlight = RwSignal::new(false);

    let mutate = move |action: CounterAction| {
        counters_sig.update(|c| c.apply(product.id, action));
        counters_sig.get_untracked().persist();
        highlight.set(true);
        browser::clear_flag_after(highlight, Duration::from_millis(counters::HIGHLIGHT_MS));
    };

    let open_lightbox = move || lightbox.update(|lb| lb.open(index));

    let open_calculator = move |_| {
        calculator.update(|c| c.open(product.name, product.unit_price));
    };

    let count = move || counters_sig.get().get(product.id);
    let style = move || animation::card_style(animation_mode.get(), index).unwrap_or_default();

    view! {
        <article class="product" style=style>
            <img
                class="product__image"
                src=product.image_src
                alt=product.image_alt
                tabindex="0"
                role="button"
                on:click=move |_| open_lightbox()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        ev.prevent_default();
                        open_lightbox();
                    }
                }
            />
            <h2 class="product__name">{product.name}</h2>
            <p class="product__price">{format!("${:.2}", product.unit_price)}</p>

            <div class="product__counter">
                <button
                    class="counter-btn"
                    data-product=product.id.as_str()
                    data-action="decrement"
                    aria-label="Remove one"
                    on:click=move |_| mutate(CounterAction::Decrement)
                >"\u{2212}"</button>
                <span
                    id=format!("{}-counter", product.id.as_str())
                    class="product__count"
                    class:highlight=move || highlight.get()
                >{count}</span>
                <button
                    class="counter-btn"
                    data-product=product.id.as_str()
                    data-action="increment"
                    aria-label="Add one"
                    on:click=move |_| mutate(CounterAction::Increment)
                >"+"</button>
            </div>

            <button
                class="price-calculator btn"
                data-product=product.name
                data-price=product.unit_price.to_string()
                on:click=open_calculator
            >
                "Price calculator"
            </button>
        </article>
    }
}
