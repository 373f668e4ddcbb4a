//! The logo-click reset: fade the page out, then reload it from scratch.

use std::time::Duration;

use super::Host;

/// Fade length and the wait before reloading.
pub const RESET_DELAY: Duration = Duration::from_millis(500);

/// Id of the container the fade is applied to.
pub const ROOT_ID: &str = "root";

/// Opacity the root ends the fade at.
pub const FADED_OPACITY: &str = "0";

/// CSS `transition` value for fading the root over `duration`.
pub fn fade_transition(duration: Duration) -> String {
    format!("opacity {}s ease-in-out", duration.as_secs_f64())
}

pub fn reset_identity<H: Host + ?Sized>(host: &H) {
    tracing::info!(delay_ms = RESET_DELAY.as_millis() as u64, "resetting page");
    host.fade_out_root(RESET_DELAY);
    host.reload_after(RESET_DELAY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::host::testing::{Call, RecordingHost};

    #[test]
    fn fades_before_scheduling_reload() {
        let host = RecordingHost::default();
        reset_identity(&host);
        assert_eq!(
            host.calls(),
            vec![Call::FadeRoot(RESET_DELAY), Call::Reload(RESET_DELAY)]
        );
    }

    #[test]
    fn reload_waits_at_least_half_a_second() {
        let host = RecordingHost::default();
        reset_identity(&host);
        let delay = host
            .calls()
            .into_iter()
            .find_map(|c| match c {
                Call::Reload(d) => Some(d),
                _ => None,
            });
        assert!(delay.is_some_and(|d| d >= Duration::from_millis(500)));
    }

    #[test]
    fn fade_lasts_as_long_as_the_reload_delay() {
        assert_eq!(fade_transition(RESET_DELAY), "opacity 0.5s ease-in-out");
        assert_eq!(fade_transition(Duration::from_secs(2)), "opacity 2s ease-in-out");
        assert_eq!(FADED_OPACITY, "0");
    }

    #[test]
    fn reset_does_not_scroll() {
        let host = RecordingHost::scrolled(400.0, 3000.0, 800.0).with_anchor("about", 1000.0);
        reset_identity(&host);
        assert!(!host.calls().iter().any(|c| matches!(c, Call::ScrollTo(_))));
    }
}
