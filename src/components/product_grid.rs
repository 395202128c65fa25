//! Product grid with the entrance-animation controls.

use leptos::prelude::*;

use crate::catalog::PRODUCTS;
use crate::components::product_card::ProductCard;
use crate::state::animation::AnimationMode;

/// The catalog grid plus the animation start/stop controls.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let mode = RwSignal::new(AnimationMode::default());

    view! {
        <section class="catalog">
            <div class="catalog__controls">
                <button
                    id="start-animation"
                    class="btn"
                    on:click=move |_| mode.set(AnimationMode::Running)
                >
                    "Start animation"
                </button>
                <button
                    id="stop-animation"
                    class="btn"
                    on:click=move |_| mode.set(AnimationMode::Halted)
                >
                    "Stop animation"
                </button>
            </div>
            <div class="catalog__grid">
                {PRODUCTS
                    .iter()
                    .enumerate()
                    .map(|(index, product)| {
                        view! { <ProductCard product=*product index=index animation_mode=mode/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
