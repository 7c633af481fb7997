use aspire_motion::Trigger;
use aspire_motion::variants::version_b::{FADE_IN, FADE_UP, SCALE_IN, STAGGER};
use aspire_motion::viewport::GRID_MARGIN_PX;
use leptos::prelude::*;

use crate::content::version_b::{COPYRIGHT, FAQS, FOOTER_COLUMNS, FOOTER_LEGAL, TICKETS};
use crate::widgets::{FaqList, Reveal, RevealGroup};

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section class="vb-faq" id="faq">
            <RevealGroup stagger=STAGGER>
                <div class="vb-faq-header">
                    <Reveal spec=FADE_IN order=0 class="vb-faq-label">"QUESTIONS"</Reveal>
                    <Reveal spec=FADE_UP order=1>
                        <h2 class="vb-faq-title">"Frequently asked questions"</h2>
                    </Reveal>
                </div>
                <FaqList items={&FAQS} first_order=2 />
            </RevealGroup>
        </section>
    }
}

/// Ticket cards. The inner card carries the hover scale so it does not fight
/// the entrance transform on the wrapper.
#[component]
pub fn Tickets() -> impl IntoView {
    view! {
        <section class="vb-tickets" id="tickets">
            <RevealGroup stagger=STAGGER>
                <div class="vb-tickets-header">
                    <Reveal spec=FADE_IN order=0 class="vb-tickets-label">"REGISTER"</Reveal>
                    <Reveal spec=FADE_UP order=1>
                        <h2 class="vb-tickets-title">"Select your ticket"</h2>
                    </Reveal>
                </div>
                <RevealGroup stagger=STAGGER order=2 class="vb-tickets-grid">
                    {TICKETS
                        .iter()
                        .enumerate()
                        .map(|(i, ticket)| {
                            let [venue, city] = ticket.details;
                            view! {
                                <Reveal spec=SCALE_IN custom=i order=i>
                                    <div class="vb-ticket-card">
                                        <h3>{ticket.title}</h3>
                                        <div class="vb-ticket-details">{venue} <br /> {city}</div>
                                        <div class="vb-ticket-price">{ticket.price}</div>
                                        <div class="vb-ticket-note">{ticket.note}</div>
                                        <a href="#" class="vb-ticket-btn">{ticket.cta}</a>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="vb-footer-dark">
            <RevealGroup stagger=STAGGER trigger=Trigger::in_view(GRID_MARGIN_PX)>
                <div class="vb-footer-top">
                    <Reveal spec=FADE_UP order=0 class="vb-footer-logo">"ASPIRE"</Reveal>
                    <Reveal spec=FADE_UP custom=1 order=1 class="vb-footer-links">
                        {FOOTER_COLUMNS
                            .iter()
                            .map(|column| {
                                view! {
                                    <div class="vb-footer-link-col">
                                        {column
                                            .iter()
                                            .map(|link| view! { <a href=link.href>{link.label}</a> })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </div>
                <Reveal spec=FADE_IN custom=2 order=2 class="vb-footer-bottom">
                    <span class="vb-footer-brand">"eMazzanti"</span>
                    <div class="vb-footer-legal">
                        {FOOTER_LEGAL
                            .iter()
                            .map(|label| view! { <a href="#">{*label}</a> })
                            .collect_view()}
                        <span>{COPYRIGHT}</span>
                    </div>
                </Reveal>
            </RevealGroup>
        </footer>
    }
}
