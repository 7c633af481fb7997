use aspire_motion::Accordion;
use aspire_motion::accordion::panel_style;
use aspire_motion::variants::version_b;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::Reveal;
use crate::content::Faq;

/// Question list where at most one answer is expanded.
#[component]
pub fn FaqList(
    items: &'static [Faq],
    /// Stagger slot of the first entry inside the enclosing group.
    #[prop(optional)]
    first_order: usize,
) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(items.len()));

    let entries = items
        .iter()
        .enumerate()
        .map(|(index, faq)| {
            let is_open = move || accordion.with(|a| a.is_open(index));
            let toggle = move |_: MouseEvent| {
                if let Some(Err(err)) = accordion.try_update(|a| a.select(index)) {
                    tracing::warn!(%err, "faq selection rejected");
                }
            };
            view! {
                <Reveal spec=version_b::FADE_UP custom=index order={first_order + index}>
                    <div
                        class=move || if is_open() { "vb-faq-item open" } else { "vb-faq-item" }
                        on:click=toggle
                    >
                        <div class="vb-faq-question">
                            {faq.question}
                            <span class="vb-faq-arrow">"\u{2193}"</span>
                        </div>
                        <div
                            class="vb-faq-answer"
                            style=move || panel_style(is_open())
                            aria-hidden=move || (!is_open()).to_string()
                        >
                            <div class="vb-faq-answer-inner">
                                <p>{faq.answer}</p>
                            </div>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! { <div class="vb-faq-list">{entries}</div> }
}
