use aspire_motion::pointer::{element_progress, parallax_offset};
use leptos::prelude::*;

use super::site_config;
use crate::dom;

/// Image that drifts vertically against the scroll direction. The image is
/// 120% of its frame so the drift never shows an edge.
#[component]
pub fn ParallaxImg(src: &'static str, alt: &'static str) -> impl IntoView {
    let range = site_config().parallax.range_px;
    let node = NodeRef::<leptos::html::Div>::new();
    let (offset, set_offset) = signal(-range);

    let update = move || {
        let Some(frame) = node.get_untracked() else {
            return;
        };
        match dom::viewport_height() {
            Ok(viewport) => {
                let progress = element_progress(&dom::rect_of(&frame), viewport);
                set_offset.set(parallax_offset(progress, range));
            }
            Err(err) => tracing::warn!(%err, "parallax update skipped"),
        }
    };

    Effect::new(move |_| {
        if node.get().is_some() {
            update();
        }
    });
    let listener = window_event_listener(leptos::ev::scroll, move |_| update());
    on_cleanup(move || listener.remove());

    view! {
        <div node_ref=node class="parallax-frame" style="overflow: hidden; height: 100%; width: 100%;">
            <img
                src=src
                alt=alt
                style=move || {
                    format!(
                        "width: 100%; height: 120%; object-fit: cover; transform: translate3d(0, {:.2}px, 0);",
                        offset.get(),
                    )
                }
            />
        </div>
    }
}
