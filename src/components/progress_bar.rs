use leptos::{ev, prelude::*};

use crate::services::{navigation, with_host};

/// Thin bar pinned to the top of the page, scaled by how far the page has
/// been scrolled.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);

    let read = move || with_host(|host| set_progress.set(navigation::progress(host)));

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| {
        read();
        let on_scroll = window_event_listener(ev::scroll, move |_| read());
        let on_resize = window_event_listener(ev::resize, move |_| read());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    });

    view! {
        <div
            class="progress-bar"
            style:transform=move || format!("scaleX({})", progress.get())
        ></div>
    }
}
