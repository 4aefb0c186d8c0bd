//! Card Slider Component
//!
//! Loads cards once on mount and shows them in a draggable horizontal row.

use futures::future::abortable;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragscroll::{
    create_drag_scroll_signals, end_drag, make_on_mousedown, make_on_mousemove,
    make_on_touchmove, make_on_touchstart, scroll_by_step,
};

use crate::components::{CardItem, SkeletonCard};
use crate::config::load_source_config;
use crate::state::{run_load, DisplayState, LoadState};

/// Pixels scrolled per navigation button click
const NAV_STEP_PX: f64 = 320.0;

/// Horizontally scrollable card carousel
#[component]
pub fn CardSlider() -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::Loading);

    // Load cards once on mount
    Effect::new(move |_| {
        let config = match load_source_config() {
            Ok(config) => config,
            Err(e) => {
                log::error!("[CardSlider] {}", e);
                set_load_state.set(LoadState::Failed(e.to_string()));
                return;
            }
        };

        let (load, abort_handle) =
            abortable(async move { card_source::load_items(&config).await });
        // Unmounting drops the in-flight request; its result is never applied
        on_cleanup(move || abort_handle.abort());

        spawn_local(async move {
            run_load(load, |state| set_load_state.set(state)).await;
        });
    });

    let container = NodeRef::<Div>::new();
    let drag = create_drag_scroll_signals(container);

    view! {
        {move || load_state.with(|state| match state.display() {
            DisplayState::Skeletons(count) => view! {
                <div class="card-slider-loading">
                    <div class="card-row">
                        {(0..count).map(|_| view! { <SkeletonCard /> }).collect_view()}
                    </div>
                </div>
            }.into_any(),
            DisplayState::Error(message) => view! {
                <div class="card-slider-error">{message.to_string()}</div>
            }.into_any(),
            DisplayState::Empty => view! {
                <div class="card-slider-empty">"No cards available."</div>
            }.into_any(),
            DisplayState::Cards(items) => {
                let items = items.to_vec();
                view! {
                    <div class="card-slider">
                        <button
                            class="nav-button nav-left"
                            on:click=move |_| scroll_by_step(container, -NAV_STEP_PX)
                        >
                            "‹"
                            <span class="sr-only">"Scroll left"</span>
                        </button>

                        <div
                            node_ref=container
                            class=move || if drag.is_dragging() { "card-container dragging" } else { "card-container" }
                            on:mousedown=make_on_mousedown(drag)
                            on:mouseup=move |_| end_drag(&drag)
                            on:mouseleave=move |_| end_drag(&drag)
                            on:mousemove=make_on_mousemove(drag)
                            on:touchstart=make_on_touchstart(drag)
                            on:touchend=move |_| end_drag(&drag)
                            on:touchmove=make_on_touchmove(drag)
                        >
                            {items.into_iter().map(|item| view! { <CardItem item=item /> }).collect_view()}
                        </div>

                        <button
                            class="nav-button nav-right"
                            on:click=move |_| scroll_by_step(container, NAV_STEP_PX)
                        >
                            "›"
                            <span class="sr-only">"Scroll right"</span>
                        </button>
                    </div>
                }.into_any()
            }
        })}
    }
}
