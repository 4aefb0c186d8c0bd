//! Card Slider App
//!
//! Landing page with a heading above the card carousel.

use leptos::prelude::*;

use crate::components::CardSlider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <h1 class="page-title">"Powered by DeTA"</h1>
            <CardSlider />
        </main>
    }
}
