//! Activates motion elements in the browser.
//!
//! Mount-triggered elements go active on the next frame. View-triggered
//! elements are watched by one `IntersectionObserver` per distinct root
//! margin and toggle `is-active` as they enter and leave the viewport.
//! Once an element's own entrance transition ends it is also marked
//! `is-settled`, which drops the entrance delay for later interactions.

use std::collections::HashMap;

use leptos::prelude::request_animation_frame;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::HostError;

const ACTIVE: &str = "is-active";
const SETTLED: &str = "is-settled";

pub fn start(document: &Document) -> Result<(), HostError> {
    let nodes = document.query_selector_all("[data-motion]")?;
    let mut observers: HashMap<String, IntersectionObserver> = HashMap::new();
    let mut mounted = Vec::new();

    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match el.get_attribute("data-motion").as_deref() {
            Some("mount") => {
                settle_after_entrance(&el)?;
                mounted.push(el);
            }
            Some("view") => {
                settle_after_entrance(&el)?;
                let margin = el
                    .get_attribute("data-motion-margin")
                    .unwrap_or_else(|| "0px".to_string());
                if !observers.contains_key(&margin) {
                    let observer = observe_with_margin(&margin)?;
                    observers.insert(margin.clone(), observer);
                }
                observers[&margin].observe(&el);
            }
            _ => {}
        }
    }

    tracing::debug!(
        mounted = mounted.len(),
        observers = observers.len(),
        "motion driver started"
    );

    request_animation_frame(move || {
        for el in mounted {
            toggle(&el, ACTIVE, true);
        }
    });
    Ok(())
}

fn toggle(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        tracing::debug!("class `{class}` not updated: {}", HostError::from(e));
    }
}

/// Marks `el` settled when one of its own transitions ends while active.
/// Transitions bubbling up from nested motion elements are ignored.
fn settle_after_entrance(el: &Element) -> Result<(), HostError> {
    let target = el.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let own = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|t| t == target);
        if own && target.class_list().contains(ACTIVE) {
            toggle(&target, SETTLED, true);
        }
    });
    el.add_event_listener_with_callback("transitionend", callback.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    callback.forget();
    Ok(())
}

fn observe_with_margin(margin: &str) -> Result<IntersectionObserver, HostError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                if entry.is_intersecting() {
                    toggle(&target, ACTIVE, true);
                } else {
                    // Replays the entrance, delay included, on the next entry.
                    toggle(&target, ACTIVE, false);
                    toggle(&target, SETTLED, false);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(margin);
    init.set_threshold(&JsValue::from_f64(0.0));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    // Observers live as long as the page.
    callback.forget();
    Ok(observer)
}
