//! [`Host`] backed by the live browser window.

use std::time::Duration;

use leptos::prelude::set_timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::identity::{fade_transition, FADED_OPACITY, ROOT_ID};
use super::{Host, HostError};

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn current() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn root(&self) -> Result<HtmlElement, HostError> {
        self.document
            .get_element_by_id(ROOT_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| HostError::MissingElement(ROOT_ID.to_string()))
    }

    fn fade_root(&self, duration: Duration) -> Result<(), HostError> {
        let style = self.root()?.style();
        style.set_property("transition", &fade_transition(duration))?;
        style.set_property("opacity", FADED_OPACITY)?;
        Ok(())
    }
}

impl Host for BrowserHost {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top() + self.scroll_offset())
    }

    fn smooth_scroll_to(&self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn fade_out_root(&self, duration: Duration) {
        if let Err(e) = self.fade_root(duration) {
            tracing::debug!("root fade skipped: {e}");
        }
    }

    fn reload_after(&self, delay: Duration) {
        let location = self.window.location();
        set_timeout(
            move || {
                if let Err(e) = location.reload() {
                    tracing::debug!("reload failed: {}", HostError::from(e));
                }
            },
            delay,
        );
    }
}
