//! Inline SVG icons used by the controls and the demo

use leptos::prelude::*;

/// Chevron shown on the right of every select
#[component]
pub fn ChevronDown(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path
                fill-rule="evenodd"
                d="M5.293 7.293a1 1 0 011.414 0L10 10.586l3.293-3.293a1 1 0 111.414 1.414l-4 4a1 1 0 01-1.414 0l-4-4a1 1 0 010-1.414z"
                clip-rule="evenodd"
            />
        </svg>
    }
}

#[component]
pub fn Signpost(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true">
            <path d="M12 3v18M5 6h12l2 2.5L17 11H5zM19 13H7l-2 2.5L7 18h12z" />
        </svg>
    }
}
