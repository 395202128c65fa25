//! The showcase page, composing every controller's UI.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::header::Header;
use crate::components::lightbox::LightboxViewer;
use crate::components::name_dialog::NameDialog;
use crate::components::price_calculator::PriceCalculator;
use crate::components::product_grid::ProductGrid;

/// The product showcase page.
#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <div class="showcase-page">
            <Header/>
            <main>
                <ProductGrid/>
            </main>
            <LightboxViewer/>
            <PriceCalculator/>
            <NameDialog/>
            <BackToTop/>
        </div>
    }
}
