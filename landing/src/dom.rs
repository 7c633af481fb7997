//! Thin layer over `web_sys` for the few browser facts the widgets need:
//! clocks, scroll metrics, element boxes, viewport observers and frame loops.
//!
//! Everything fallible returns [`DomError`]; callers log and degrade to a
//! static page instead of panicking.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use aspire_motion::{Rect, ViewportTrigger};
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T> = std::result::Result<T, DomError>;

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// High-resolution timestamp in milliseconds, same clock as animation frames.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn scroll_y() -> Result<f64> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_height() -> Result<f64> {
    let height = window()?.inner_height()?;
    Ok(height.as_f64().unwrap_or_default())
}

pub fn page_height() -> Result<f64> {
    let root = window()?
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or(DomError::NoDocument)?;
    Ok(f64::from(root.scroll_height()))
}

pub fn scroll_to_top() -> Result<()> {
    window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

pub fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Cleared when the reactive owner that created it is cleaned up. Frame loops
/// check it before every frame, so unmounted widgets stop animating.
#[derive(Debug, Clone)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    pub fn scoped() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&alive);
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self(alive)
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Call `step` with the frame timestamp once per animation frame until it
/// returns `false` or `lifetime` ends.
pub fn run_frames<F>(lifetime: Lifetime, step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    fn schedule<F>(lifetime: Lifetime, mut step: F)
    where
        F: FnMut(f64) -> bool + 'static,
    {
        request_animation_frame(move || {
            if lifetime.is_alive() && step(now_ms()) {
                schedule(lifetime, step);
            }
        });
    }
    schedule(lifetime, step);
}

/// Run `f` once the current DOM has been painted, so CSS transitions see the
/// initial state first.
pub fn after_first_paint(f: impl FnOnce() + 'static) {
    request_animation_frame(move || request_animation_frame(f));
}

/// Owns an `IntersectionObserver` and the closure it calls. Dropping it
/// disconnects the observer.
#[derive(Debug)]
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Report every intersection change of `target` to `on_change`.
    pub fn observe(
        target: &Element,
        trigger: &ViewportTrigger,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&trigger.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(DomError::NoWindow.to_string(), "no global window");
        assert_eq!(
            DomError::Js("TypeError".into()).to_string(),
            "javascript error: TypeError"
        );
    }
}
