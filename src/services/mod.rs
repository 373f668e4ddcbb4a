mod host;
pub mod identity;
pub mod navigation;

#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(feature = "hydrate")]
mod motion_driver;

pub use host::{Host, HostError};

/// Runs `f` against the live browser. A no-op while rendering on the server.
#[allow(unused_variables)]
pub fn with_host(f: impl FnOnce(&dyn Host)) {
    #[cfg(feature = "hydrate")]
    {
        match browser::BrowserHost::current() {
            Ok(host) => f(&host),
            Err(e) => tracing::warn!("browser host unavailable: {e}"),
        }
    }
}

/// Hands every `data-motion` element on the page to the browser-side driver.
pub fn start_motion() {
    #[cfg(feature = "hydrate")]
    {
        let started = browser::BrowserHost::current()
            .and_then(|host| motion_driver::start(host.document()));
        if let Err(e) = started {
            tracing::warn!("motion driver not started: {e}");
        }
    }
}
