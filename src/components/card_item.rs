//! Card Item Component
//!
//! A single card: image with its own load/error state, text, optional link.

use card_source::DisplayItem;
use leptos::prelude::*;

use crate::state::ImageState;

#[component]
pub fn CardItem(item: DisplayItem) -> impl IntoView {
    let (image_state, set_image_state) = signal(ImageState::default());

    let src = item.image_src().to_string();
    let alt = item.alt_text().to_string();
    let title = item.display_title().to_string();
    let description = item.display_description().to_string();
    let author = item.display_author().to_string();

    let has_link = item.link.is_some();
    let link = item.link;
    let open_link = move |_| {
        let Some(url) = link.as_deref() else { return };
        let Some(win) = web_sys::window() else { return };
        if let Err(e) = win.open_with_url_and_target(url, "_blank") {
            log::warn!("[CardItem] Could not open {}: {:?}", url, e);
        }
    };

    view! {
        <div class="card" class:clickable=has_link on:click=open_link>
            <div class="card-image">
                <Show when=move || image_state.get().shows_skeleton()>
                    <div class="skeleton card-image-skeleton"></div>
                </Show>
                <Show
                    when=move || !image_state.get().shows_placeholder()
                    fallback=|| view! { <div class="card-image-placeholder">"Image not available"</div> }
                >
                    <img
                        src=src.clone()
                        alt=alt.clone()
                        class:loaded=move || image_state.get() == ImageState::Loaded
                        on:load=move |_| set_image_state.update(|s| *s = s.on_load())
                        on:error=move |_| set_image_state.update(|s| *s = s.on_error())
                    />
                </Show>
            </div>

            <div class="card-body">
                <h3 class="card-title">{title}</h3>
                <p class="card-description">{description}</p>
                <p class="card-author">"By " {author}</p>
            </div>
        </div>
    }
}
