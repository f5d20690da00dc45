//! Access to `window.location` behind a substitutable trait.

/// Read side of the page URL plus a full reload.
pub trait PageEnvironment {
    /// `location.pathname`, e.g. `/messages`.
    fn pathname(&self) -> String;
    /// `location.search`, including the leading `?` when non-empty.
    fn search(&self) -> String;
    fn reload(&self);
}

/// The real browser location. Outside the browser every read is empty and
/// `reload` does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl PageEnvironment for BrowserLocation {
    fn pathname(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().pathname().ok()).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn search(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.location().search().ok()).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn reload(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().reload();
            }
        }
    }
}
