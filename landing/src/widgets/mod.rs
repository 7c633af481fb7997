// Animated building blocks shared by both presentations

mod counter;
mod faq;
mod letters;
mod magnetic;
mod parallax;
mod reveal;
mod scroll_progress;

pub use counter::Counter;
pub use faq::FaqList;
pub use letters::AnimatedLetters;
pub use magnetic::Magnetic;
pub use parallax::ParallaxImg;
pub use reveal::{Reveal, RevealGroup};
pub use scroll_progress::{BRAND_GRADIENT, ScrollProgress};

use aspire_motion::{Trigger, ViewportTrigger, Visibility};
use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::SiteConfig;
use crate::dom::{self, ViewportObserver};

/// Run `reveal` once `node` should start its entrance: after first paint for
/// [`Trigger::Mount`], or on first viewport entry for [`Trigger::InView`].
///
/// If no observer can be created, the element's box is checked against the
/// viewport on every scroll instead.
pub(crate) fn on_first_sight<E>(
    node: NodeRef<E>,
    trigger: Trigger,
    reveal: impl Fn() + Clone + 'static,
) where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let viewport = match trigger {
        Trigger::Mount => {
            dom::after_first_paint(reveal);
            return;
        }
        Trigger::InView(viewport) => viewport,
    };

    let observer = StoredValue::new_local(None::<ViewportObserver>);
    Effect::new(move |_| {
        let Some(target) = node.get() else {
            return;
        };
        let element: &Element = target.unchecked_ref();
        let mut visibility = Visibility::default();
        let on_change = {
            let reveal = reveal.clone();
            move |intersecting| {
                if visibility.observe(&viewport, intersecting) == Some(true) {
                    reveal();
                }
            }
        };
        match ViewportObserver::observe(element, &viewport, on_change) {
            Ok(handle) => observer.set_value(Some(handle)),
            Err(err) => {
                tracing::warn!(%err, "viewport observer unavailable, checking on scroll");
                reveal_on_scroll(element.clone(), viewport, reveal.clone());
            }
        }
    });
}

/// Scroll-driven stand-in for a viewport observer.
fn reveal_on_scroll(element: Element, viewport: ViewportTrigger, reveal: impl Fn() + 'static) {
    let element = StoredValue::new_local(element);
    let reveal = StoredValue::new_local(reveal);
    let visibility = StoredValue::new_local(Visibility::default());

    let check = move || {
        let in_view = match dom::viewport_height() {
            Ok(height) => element.with_value(|el| {
                let rect = dom::rect_of(el);
                viewport.intersects(rect.top, rect.top + rect.height, height)
            }),
            // Without a window there is nothing to wait for.
            Err(_) => true,
        };
        if visibility.try_update_value(|v| v.observe(&viewport, in_view)) == Some(Some(true)) {
            reveal.with_value(|f| f());
        }
    };

    check();
    if visibility.with_value(Visibility::is_latched) {
        return;
    }
    let listener = window_event_listener(leptos::ev::scroll, move |_: web_sys::Event| check());
    on_cleanup(move || listener.remove());
}

/// Site settings from context, or the built-in defaults outside the app.
pub(crate) fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
