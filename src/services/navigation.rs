//! Section navigation and the scroll progress indicator.

use super::Host;

/// Height of the header the target section must clear.
pub const HEADER_OFFSET: f64 = 80.0;

/// Fraction of the scrollable distance already travelled.
///
/// Zero when the document fits the viewport. Not clamped: overscroll at
/// either end can push the value slightly outside `[0, 1]`.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable == 0.0 {
        0.0
    } else {
        offset / scrollable
    }
}

pub fn progress<H: Host + ?Sized>(host: &H) -> f64 {
    scroll_progress(
        host.scroll_offset(),
        host.document_height(),
        host.viewport_height(),
    )
}

/// Scroll position that puts a section's top edge just below the header.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_OFFSET
}

/// Smooth-scrolls to the section anchored at `id`. Unknown ids are ignored.
pub fn scroll_to_section<H: Host + ?Sized>(host: &H, id: &str) {
    let Some(top) = host.element_top(id) else {
        tracing::debug!(section = id, "no anchor for section, ignoring");
        return;
    };

    let target = scroll_target(top);
    tracing::debug!(section = id, scroll_to = target, "scrolling to section");
    host.smooth_scroll_to(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::host::testing::{Call, RecordingHost};

    #[test]
    fn progress_is_offset_over_scrollable_height() {
        assert_eq!(scroll_progress(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(scroll_progress(1200.0, 2000.0, 800.0), 1.0);
    }

    #[test]
    fn progress_starts_at_zero() {
        assert_eq!(scroll_progress(0.0, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_zero_when_nothing_scrolls() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(15.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_not_clamped() {
        assert!(scroll_progress(-30.0, 2000.0, 800.0) < 0.0);
        assert!(scroll_progress(1260.0, 2000.0, 800.0) > 1.0);
    }

    #[test]
    fn progress_reads_host_geometry() {
        let host = RecordingHost::scrolled(600.0, 2000.0, 800.0);
        assert_eq!(progress(&host), 0.5);
        assert!(host.calls().is_empty());
    }

    #[test]
    fn scrolls_below_the_header() {
        let host = RecordingHost::default().with_anchor("contact", 3000.0);
        scroll_to_section(&host, "contact");
        assert_eq!(host.calls(), vec![Call::ScrollTo(2920.0)]);
    }

    #[test]
    fn target_ignores_current_scroll_position() {
        let host = RecordingHost::scrolled(1500.0, 5000.0, 800.0).with_anchor("about", 1800.0);
        scroll_to_section(&host, "about");
        assert_eq!(host.calls(), vec![Call::ScrollTo(1720.0)]);
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let host = RecordingHost::default().with_anchor("contact", 3000.0);
        scroll_to_section(&host, "pricing");
        assert!(host.calls().is_empty());
    }
}
