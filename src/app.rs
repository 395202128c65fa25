//! Root application component: startup resolution and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::catalog::PRODUCTS;
use crate::pages::showcase::ShowcasePage;
use crate::state::calculator::CalculatorState;
use crate::state::counters::Counters;
use crate::state::greeting;
use crate::state::lightbox::Lightbox;
use crate::state::theme;
use crate::util::browser;

/// Local wall-clock hour captured once at startup, for the greeting line.
#[derive(Clone, Copy, Debug)]
pub struct StartupHour(pub u32);

/// Root component.
///
/// Resolves persisted state once, provides each controller's state cell as a
/// context, and renders the single showcase page. Controllers share nothing
/// beyond these contexts and the localStorage namespace.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Theme: stored preference, else system signal, else light; applied and
    // persisted immediately.
    let theme = RwSignal::new(theme::init());

    // Greeting: stored name, or `None` until the name dialog resolves one.
    let name = RwSignal::new(greeting::load_name());
    let hour = StartupHour(browser::local_hour());

    // Counters: malformed or missing stored data resets to zeros.
    let counters = RwSignal::new(Counters::load());

    // The lightbox image list is fixed for the life of the page.
    let lightbox = RwSignal::new(Lightbox::from_catalog(&PRODUCTS));

    let calculator = RwSignal::new(CalculatorState::default());

    log::info!("showcase ready, theme {}", theme.get_untracked().as_str());

    provide_context(theme);
    provide_context(name);
    provide_context(hour);
    provide_context(counters);
    provide_context(lightbox);
    provide_context(calculator);

    view! {
        <Title text="OMORO's Jewelry"/>
        <ShowcasePage/>
    }
}
