use aspire_motion::Trigger;
use aspire_motion::counter::Counter as CountUp;
use leptos::prelude::*;

use super::{on_first_sight, site_config};
use crate::dom::{self, Lifetime};

/// Number that counts up from zero the first time it scrolls into view.
#[component]
pub fn Counter(target: u64, #[prop(optional, into)] suffix: String) -> impl IntoView {
    let settings = site_config().counter;
    let model = match CountUp::new(target, suffix.clone()).with_duration(settings.duration_ms) {
        Ok(model) => model,
        Err(err) => {
            tracing::warn!(%err, "counter duration rejected, using default");
            CountUp::new(target, suffix)
        }
    };

    let (text, set_text) = signal(model.display());
    let model = StoredValue::new_local(model);
    let node = NodeRef::<leptos::html::Span>::new();
    let lifetime = Lifetime::scoped();

    on_first_sight(node, Trigger::in_view(settings.margin_px), move || {
        let started = model
            .try_update_value(|m| m.trigger(dom::now_ms()))
            .unwrap_or(false);
        if !started {
            return;
        }
        dom::run_frames(lifetime.clone(), move |now| {
            let Some((display, finished)) = model.try_update_value(|m| {
                m.sample(now);
                (m.display(), m.is_finished())
            }) else {
                return false;
            };
            set_text.set(display);
            !finished
        });
    });

    view! { <span node_ref=node>{text}</span> }
}
