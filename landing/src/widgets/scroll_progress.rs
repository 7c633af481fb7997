use aspire_motion::Spring;
use aspire_motion::pointer::page_progress;
use leptos::prelude::*;

use super::site_config;
use crate::dom::{self, Lifetime};

/// Version B paints the bar with the brand gradient.
pub const BRAND_GRADIENT: &str = "linear-gradient(90deg, #9D1DF2, #296CF2)";

fn current_progress() -> f64 {
    match (dom::scroll_y(), dom::page_height(), dom::viewport_height()) {
        (Ok(y), Ok(page), Ok(viewport)) => page_progress(y, page, viewport),
        _ => 0.0,
    }
}

/// Fixed bar across the top of the page, scaled to how far the reader has
/// scrolled. The scale follows a spring so fast scrolling stays smooth.
#[component]
pub fn ScrollProgress(#[prop(optional)] gradient: Option<&'static str>) -> impl IntoView {
    let spring_config = site_config().scroll_progress.spring();
    let spring = match Spring::new(spring_config, current_progress()) {
        Ok(spring) => spring,
        Err(err) => {
            tracing::warn!(%err, "scroll spring rejected, using preset");
            Spring::scroll_progress()
        }
    };
    let spring = StoredValue::new_local(spring);
    let (scale, set_scale) = signal(spring.with_value(Spring::position));
    let lifetime = Lifetime::scoped();
    let animating = StoredValue::new_local(false);
    let last_frame = StoredValue::new_local(0.0_f64);

    let on_scroll = move |_: web_sys::Event| {
        let target = current_progress();
        spring.update_value(|s| s.set_target(target));
        if animating.get_value() {
            return;
        }
        animating.set_value(true);
        last_frame.set_value(dom::now_ms());
        dom::run_frames(lifetime.clone(), move |now| {
            let dt = now - last_frame.get_value();
            last_frame.set_value(now);
            let Some((position, at_rest)) =
                spring.try_update_value(|s| (s.step(dt), s.is_at_rest()))
            else {
                return false;
            };
            set_scale.set(position);
            if at_rest {
                animating.set_value(false);
            }
            !at_rest
        });
    };
    let listener = window_event_listener(leptos::ev::scroll, on_scroll);
    on_cleanup(move || listener.remove());

    let style = move || {
        let background = gradient
            .map(|g| format!(" background: {g};"))
            .unwrap_or_default();
        format!("transform: scaleX({:.4});{background}", scale.get())
    };

    view! { <div class="scroll-progress" style=style></div> }
}
