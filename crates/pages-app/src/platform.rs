//! Browser-side implementations of the row's platform traits.

use std::str::FromStr;

use dioxus::prelude::{Event, Navigator as RouterHandle};
use pages_core::{Clipboard, ClipboardError, Navigator, UiEvent};

use crate::Route;

/// Adapts a dioxus event to [`UiEvent`], remembering whether a handler
/// already stopped it.
pub struct DomEvent<'a, T: ?Sized + 'static> {
    event: &'a Event<T>,
    stopped: bool,
}

impl<'a, T: ?Sized + 'static> DomEvent<'a, T> {
    pub fn new(event: &'a Event<T>) -> Self {
        Self {
            event,
            stopped: false,
        }
    }
}

impl<T: ?Sized + 'static> UiEvent for DomEvent<'_, T> {
    fn prevent_default(&mut self) {
        self.event.prevent_default();
    }

    fn stop_propagation(&mut self) {
        self.event.stop_propagation();
        self.stopped = true;
    }

    fn is_propagation_stopped(&self) -> bool {
        self.stopped
    }
}

/// System clipboard via the async Clipboard API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Write(format!("{err:?}")))
    }

    // Webview hosts: go through the page's own clipboard.
    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use dioxus::prelude::document;

        let mut eval = document::eval(
            r#"
            const text = await dioxus.recv();
            await navigator.clipboard.writeText(text);
            return true;
            "#,
        );
        eval.send(text)
            .map_err(|err| ClipboardError::Write(err.to_string()))?;
        eval.await
            .map(|_| ())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// Pushes in-app hrefs onto the router history.
#[derive(Clone, Copy)]
pub struct RouterNavigator(RouterHandle);

impl RouterNavigator {
    pub fn new(handle: RouterHandle) -> Self {
        Self(handle)
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, href: &str) {
        match Route::from_str(href) {
            Ok(route) => {
                self.0.push(route);
            }
            Err(err) => tracing::warn!(%href, "not an app route: {}", err),
        }
    }
}
