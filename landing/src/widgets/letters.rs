use aspire_motion::letters::{LETTER, LETTER_STAGGER, schedule};
use aspire_motion::{RevealState, Trigger};
use leptos::prelude::*;

use super::on_first_sight;

/// Headline whose characters rise into place one after another on mount.
#[component]
pub fn AnimatedLetters(text: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let node = NodeRef::<leptos::html::Span>::new();
    let visible = RwSignal::new(false);
    on_first_sight(node, Trigger::Mount, move || visible.set(true));

    let letters = schedule(text, &LETTER_STAGGER)
        .into_iter()
        .map(|(ch, delay_s)| {
            let glyph = if ch == ' ' { '\u{a0}' } else { ch };
            let style = move || {
                format!(
                    "display: inline-block; transform-origin: bottom; {}",
                    LETTER.style(RevealState::from_visible(visible.get()), delay_s)
                )
            };
            view! { <span style=style>{glyph.to_string()}</span> }
        })
        .collect_view();

    view! {
        <span node_ref=node class=class aria-label=text>
            {letters}
        </span>
    }
}
