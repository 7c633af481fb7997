use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::site_config;
use crate::dom::{self, Lifetime};

/// Wrapper that drifts toward the cursor while hovered and springs back on
/// leave.
#[component]
pub fn Magnetic(children: Children) -> impl IntoView {
    let model = StoredValue::new_local(site_config().magnetic.model());
    let (offset, set_offset) = signal((0.0_f64, 0.0_f64));
    let node = NodeRef::<leptos::html::Div>::new();
    let lifetime = Lifetime::scoped();
    let animating = StoredValue::new_local(false);
    let last_frame = StoredValue::new_local(0.0_f64);

    // One frame loop at a time; it ends when both springs settle.
    let animate = move || {
        if animating.get_value() {
            return;
        }
        animating.set_value(true);
        last_frame.set_value(dom::now_ms());
        dom::run_frames(lifetime.clone(), move |now| {
            let dt = now - last_frame.get_value();
            last_frame.set_value(now);
            let Some((position, at_rest)) =
                model.try_update_value(|m| (m.step(dt), m.is_at_rest()))
            else {
                return false;
            };
            set_offset.set(position);
            if at_rest {
                animating.set_value(false);
            }
            !at_rest
        });
    };

    let on_move = {
        let animate = animate.clone();
        move |ev: MouseEvent| {
            let Some(el) = node.get_untracked() else {
                return;
            };
            let rect = dom::rect_of(&el);
            let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            model.update_value(|m| m.pointer_move(&rect, x, y));
            animate();
        }
    };
    let on_leave = move |_: MouseEvent| {
        model.update_value(|m| m.pointer_leave());
        animate();
    };

    let style = move || {
        let (x, y) = offset.get();
        format!("display: inline-block; transform: translate3d({x:.2}px, {y:.2}px, 0);")
    };

    view! {
        <div node_ref=node class="magnetic" style=style on:mousemove=on_move on:mouseleave=on_leave>
            {children()}
        </div>
    }
}
