// =============================================================================
// Timeless Web - Viewport Visibility
// =============================================================================
// Wraps `IntersectionObserver` in a guard that disconnects on drop.
// =============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::WebError;

/// One intersection change for the observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityReport {
    pub intersecting: bool,
    pub ratio: f64,
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observation of a single element.
///
/// Dropping the guard disconnects the observer before its callback is freed.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    /// Start observing `target`, reporting whenever it crosses `threshold`.
    pub fn observe(
        target: &Element,
        threshold: f64,
        mut on_change: impl FnMut(VisibilityReport) + 'static,
    ) -> Result<Self, WebError> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(VisibilityReport {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| WebError::Observer(WebError::describe(&err)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::trace!("Visibility observer disconnected");
    }
}
