use std::time::Duration;

/// The parts of the browser the page logic touches. Everything is read or
/// requested through this trait so the page behaviour runs against a
/// recording fake in tests.
pub trait Host {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;
    /// Total height of the document content.
    fn document_height(&self) -> f64;
    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;
    /// Top edge of the element with `id`, relative to the document rather
    /// than the viewport. `None` when no such element exists.
    fn element_top(&self, id: &str) -> Option<f64>;
    /// Requests an animated scroll; the host owns the animation timing.
    fn smooth_scroll_to(&self, y: f64);
    /// Fades the page root to fully transparent over `duration`.
    fn fade_out_root(&self, duration: Duration);
    /// Reloads the whole page once `delay` has elapsed. Not cancellable.
    fn reload_after(&self, delay: Duration);
}

/// Failures acquiring the browser environment.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Duration;

    use super::Host;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        ScrollTo(f64),
        FadeRoot(Duration),
        Reload(Duration),
    }

    /// Fixed geometry plus a log of every side effect requested.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub scroll_offset: f64,
        pub document_height: f64,
        pub viewport_height: f64,
        pub anchors: HashMap<String, f64>,
        calls: RefCell<Vec<Call>>,
    }

    impl RecordingHost {
        pub fn scrolled(offset: f64, document_height: f64, viewport_height: f64) -> Self {
            Self {
                scroll_offset: offset,
                document_height,
                viewport_height,
                ..Self::default()
            }
        }

        pub fn with_anchor(mut self, id: &str, top: f64) -> Self {
            self.anchors.insert(id.to_string(), top);
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Host for RecordingHost {
        fn scroll_offset(&self) -> f64 {
            self.scroll_offset
        }

        fn document_height(&self) -> f64 {
            self.document_height
        }

        fn viewport_height(&self) -> f64 {
            self.viewport_height
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.anchors.get(id).copied()
        }

        fn smooth_scroll_to(&self, y: f64) {
            self.calls.borrow_mut().push(Call::ScrollTo(y));
        }

        fn fade_out_root(&self, duration: Duration) {
            self.calls.borrow_mut().push(Call::FadeRoot(duration));
        }

        fn reload_after(&self, delay: Duration) {
            self.calls.borrow_mut().push(Call::Reload(delay));
        }
    }
}
