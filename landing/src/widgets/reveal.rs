//! Entrance animations driven by inline transitions.
//!
//! A [`Reveal`] renders its hidden style first and switches to the visible
//! style once triggered; the browser interpolates between the two. Inside a
//! [`RevealGroup`] a reveal follows the group's trigger and gets a staggered
//! delay from its `order`.

use aspire_motion::viewport::SECTION_MARGIN_PX;
use aspire_motion::{RevealState, Stagger, Trigger, VariantSpec};
use leptos::prelude::*;

use super::on_first_sight;

#[derive(Debug, Clone, Copy)]
struct GroupCtx {
    visible: Signal<bool>,
    stagger: Stagger,
    /// Start of this group's schedule relative to the outermost group.
    offset_s: f64,
}

/// When the child at `order` of a group starting at `offset_s` begins.
fn slot_start(offset_s: f64, stagger: &Stagger, order: usize) -> f64 {
    offset_s + stagger.delay_children_s + order as f64 * stagger.step_s
}

fn default_trigger() -> Trigger {
    Trigger::in_view(SECTION_MARGIN_PX)
}

/// Visibility signal for an element with its own trigger.
fn own_visibility(node: NodeRef<leptos::html::Div>, trigger: Trigger) -> Signal<bool> {
    let visible = RwSignal::new(false);
    on_first_sight(node, trigger, move || visible.set(true));
    visible.into()
}

#[component]
pub fn Reveal(
    spec: VariantSpec,
    /// Index fed to the variant's own delay step.
    #[prop(optional)]
    custom: usize,
    /// Position inside the enclosing group.
    #[prop(optional)]
    order: usize,
    #[prop(optional, into)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    /// Own trigger. Ignored inside a group unless set.
    #[prop(optional)]
    trigger: Option<Trigger>,
    /// Extra delay in seconds.
    #[prop(optional)]
    delay: f64,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let group = use_context::<GroupCtx>();

    let (visible, delay_s) = match (group, trigger) {
        (Some(group), None) => (
            group.visible,
            group.offset_s + group.stagger.delay_for(order, &spec, custom) + delay,
        ),
        (_, trigger) => (
            own_visibility(node, trigger.unwrap_or_else(default_trigger)),
            spec.custom_delay(custom) + delay,
        ),
    };

    let style = move || spec.style(RevealState::from_visible(visible.get()), delay_s);

    view! {
        <div node_ref=node class=class id=id style=style>
            {children()}
        </div>
    }
}

/// Container whose children enter one after another.
///
/// Nested groups inherit the parent's trigger and start at their own slot in
/// the parent's schedule.
#[component]
pub fn RevealGroup(
    stagger: Stagger,
    #[prop(optional)] trigger: Option<Trigger>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    /// Position inside an enclosing group.
    #[prop(optional)]
    order: usize,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let parent = use_context::<GroupCtx>();

    let ctx = match (parent, trigger) {
        (Some(parent), None) => GroupCtx {
            visible: parent.visible,
            stagger,
            offset_s: slot_start(parent.offset_s, &parent.stagger, order),
        },
        (_, trigger) => GroupCtx {
            visible: own_visibility(node, trigger.unwrap_or_else(default_trigger)),
            stagger,
            offset_s: 0.0,
        },
    };
    provide_context(ctx);

    view! {
        <div node_ref=node class=class id=id>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspire_motion::variants::version_a;

    #[test]
    fn nested_group_starts_at_its_slot() {
        let inner = slot_start(0.0, &version_a::STAGGER, 1);
        assert!((inner - 0.17).abs() < 1e-9);
        let grandchild = slot_start(inner, &version_a::STAGGER, 2);
        assert!((grandchild - (0.17 + 0.05 + 0.24)).abs() < 1e-9);
    }

    #[test]
    fn first_slot_waits_for_delay_children() {
        assert!((slot_start(0.0, &version_a::STAGGER, 0) - 0.05).abs() < 1e-9);
        assert_eq!(slot_start(0.4, &Stagger::NONE, 3), 0.4);
    }
}
