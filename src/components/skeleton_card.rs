//! Skeleton Card Component

use leptos::prelude::*;

/// Placeholder card shown while cards are loading
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="card skeleton-card">
            <div class="card-image">
                <div class="skeleton"></div>
            </div>
            <div class="skeleton skeleton-title"></div>
            <div class="skeleton skeleton-line"></div>
            <div class="skeleton skeleton-line short"></div>
            <div class="skeleton skeleton-author"></div>
        </div>
    }
}
