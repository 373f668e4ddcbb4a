use leptos::prelude::*;

use crate::models::Motion;

/// A `<div>` that enters, and reacts to hover/tap, as `motion` describes.
#[component]
pub fn Animated(
    motion: Motion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=motion.class(&class)
            style=motion.style()
            data-motion=motion.trigger_attr()
            data-motion-margin=motion.margin_attr()
        >
            {children()}
        </div>
    }
}
