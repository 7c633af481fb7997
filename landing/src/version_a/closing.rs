use aspire_motion::Trigger;
use aspire_motion::variants::version_a::{FADE_IN, FADE_UP, STAGGER};
use aspire_motion::viewport::GRID_MARGIN_PX;
use leptos::prelude::*;

use crate::content::Person;
use crate::content::version_a::{
    COPYRIGHT, CTA_COPY, CTA_HEADING, CTA_PERSON, FOOTER_BLURB, FOOTER_COLUMNS, FOOTER_LEGAL,
    FOOTER_SOCIAL, NEWSLETTER_HEADING, NEWSLETTER_PERSON,
};
use crate::widgets::{Magnetic, Reveal, RevealGroup};

/// Portrait with name and role. `prefix` selects the section's class names.
fn person(prefix: &'static str, person: Person) -> impl IntoView {
    view! {
        <div class=format!("{prefix}-photo")>
            <img src=person.photo alt=person.name />
        </div>
        <div class=format!("{prefix}-info")>
            <h4>{person.name}</h4>
            <span>{person.role}</span>
        </div>
    }
}

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="cta-section" id="register">
            <div class="cta-glow"></div>
            <RevealGroup stagger=STAGGER>
                <Reveal spec=FADE_UP order=0 class="cta-person">
                    {person("cta-person", CTA_PERSON)}
                </Reveal>
                <Reveal spec=FADE_UP custom=1 order=1>
                    <h2 class="cta-heading">{CTA_HEADING}</h2>
                </Reveal>
                <Reveal spec=FADE_UP custom=2 order=2 class="cta-bottom">
                    <p class="cta-description">{CTA_COPY}</p>
                    <div class="cta-buttons">
                        <Magnetic>
                            <a href="#" class="btn-cta primary">"Register Now \u{2014} Free"</a>
                        </Magnetic>
                        <Magnetic>
                            <a href="#" class="btn-cta secondary">"Request Info"</a>
                        </Magnetic>
                    </div>
                </Reveal>
            </RevealGroup>
        </section>
    }
}

/// Signup block. The email field is not wired to any backend.
#[component]
pub fn Newsletter() -> impl IntoView {
    view! {
        <section class="newsletter" id="contact">
            <RevealGroup stagger=STAGGER trigger=Trigger::in_view(GRID_MARGIN_PX)>
                <div class="section-label">
                    <span class="dot"></span>
                    "STAY UPDATED"
                </div>
                <div class="newsletter-content">
                    <Reveal spec=FADE_UP order=0 class="newsletter-person">
                        {person("newsletter", NEWSLETTER_PERSON)}
                    </Reveal>
                    <div class="newsletter-form-area">
                        <Reveal spec=FADE_UP custom=1 order=1 class="newsletter-heading">
                            <h3>{NEWSLETTER_HEADING}</h3>
                        </Reveal>
                        <Reveal spec=FADE_UP custom=2 order=2 class="newsletter-form">
                            <label for="email">"Your email*"</label>
                            <input type="email" id="email" placeholder="" />
                            <a href="#" class="privacy-link">"I accept the data privacy policy"</a>
                        </Reveal>
                    </div>
                </div>
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <RevealGroup stagger=STAGGER trigger=Trigger::in_view(GRID_MARGIN_PX)>
                <div class="footer-content">
                    <Reveal spec=FADE_UP order=0 class="footer-brand">
                        <p>{FOOTER_BLURB}</p>
                        <div class="footer-social">
                            {FOOTER_SOCIAL
                                .iter()
                                .map(|(label, short)| {
                                    view! { <a href="#" aria-label={*label}>{*short}</a> }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                    {FOOTER_COLUMNS
                        .iter()
                        .enumerate()
                        .map(|(i, column)| {
                            view! {
                                <Reveal spec=FADE_UP custom={i + 1} order={i + 1} class="footer-col">
                                    {column
                                        .iter()
                                        .map(|label| view! { <a href="#">{*label}</a> })
                                        .collect_view()}
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal spec=FADE_IN custom=3 order=3 class="footer-bottom">
                    <span>{COPYRIGHT}</span>
                    <div class="footer-legal">
                        {FOOTER_LEGAL
                            .iter()
                            .map(|label| view! { <a href="#">{*label}</a> })
                            .collect_view()}
                    </div>
                </Reveal>
            </RevealGroup>
        </footer>
    }
}
