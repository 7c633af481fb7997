// Version B: light, type-led layout with an oversized animated wordmark

mod closing;
mod program;

use aspire_motion::Trigger;
use aspire_motion::variants::version_b::{
    FADE_IN, FADE_UP, INFO_BAR, INFO_BAR_DELAY_S, STAGGER, TOP_BAR, TOP_BAR_DELAY_S,
};
use aspire_motion::viewport::GRID_MARGIN_PX;
use leptos::prelude::*;

use crate::content::version_b::TAGLINE;
use crate::content::{EVENT_DATE, VENUE};
use crate::widgets::{AnimatedLetters, BRAND_GRADIENT, Reveal, RevealGroup, ScrollProgress};
use closing::{FaqSection, Footer, Tickets};
use program::{Sessions, Stats, Tracks, WhyAttend};

#[component]
pub fn VersionB() -> impl IntoView {
    view! {
        <div class="vb">
            <ScrollProgress gradient=BRAND_GRADIENT />
            <TopBar />
            <InfoBar />
            <section class="vb-hero">
                <AnimatedLetters text="ASPIRE" class="vb-hero-text" />
            </section>
            <RegistrationCta />
            <Tracks />
            <Stats />
            <WhyAttend />
            <Sessions />
            <FaqSection />
            <Tickets />
            <Footer />
        </div>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    view! {
        <Reveal spec=TOP_BAR trigger=Trigger::Mount delay=TOP_BAR_DELAY_S class="vb-topbar">
            <div class="vb-topbar-left">
                <div class="vb-logo">"ASPIRE"</div>
                <div class="vb-tagline">{TAGLINE}</div>
            </div>
            <div class="vb-topbar-right">
                <a href="#faq">"FAQ"</a>
            </div>
        </Reveal>
    }
}

#[component]
fn InfoBar() -> impl IntoView {
    view! {
        <Reveal spec=INFO_BAR trigger=Trigger::Mount delay=INFO_BAR_DELAY_S class="vb-infobar">
            <div class="vb-infobar-items">
                <div class="vb-infobar-item">
                    <strong>{EVENT_DATE}</strong>
                    <span>"In-person & Virtual"</span>
                </div>
                <div class="vb-infobar-item">
                    <strong>{VENUE}</strong>
                    <span>"New York City, NY"</span>
                </div>
            </div>
            <div class="vb-infobar-right">
                <span class="vb-price-tag">"Tickets available now: Free"</span>
                <a href="#tickets" class="vb-btn-register">"Register"</a>
            </div>
        </Reveal>
    }
}

#[component]
fn RegistrationCta() -> impl IntoView {
    view! {
        <section class="vb-reg-cta">
            <RevealGroup stagger=STAGGER trigger=Trigger::in_view(GRID_MARGIN_PX) class="vb-reg-inner">
                <Reveal spec=FADE_IN order=0 class="vb-reg-label">"SAVE YOUR SPOT"</Reveal>
                <Reveal spec=FADE_UP order=1 class="vb-reg-content">
                    <h2>
                        "Registration is open." <br />
                        <a href="#tickets">"Get Aspire tickets \u{2192}"</a>
                    </h2>
                    <div class="vb-reg-virtual">"Virtual is always free."</div>
                </Reveal>
                <Reveal spec=FADE_UP custom=2 order=2 class="vb-reg-price">"FREE"</Reveal>
            </RevealGroup>
        </section>
    }
}
