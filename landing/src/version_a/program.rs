use aspire_motion::Trigger;
use aspire_motion::variants::version_a::{
    FADE_IN, FADE_UP, SCALE_IN, SLIDE_LEFT, SLIDE_RIGHT, STAGGER,
};
use aspire_motion::viewport::GRID_MARGIN_PX;
use leptos::prelude::*;

use crate::content::version_a::{
    EVENT_COPY, EVENT_HEADING, EVENT_IMAGE, HIGHLIGHTS, SPONSORS, SPONSORS_COPY, TRACKS,
};
use crate::widgets::{Magnetic, ParallaxImg, Reveal, RevealGroup};

fn section_label(text: &'static str) -> impl IntoView {
    view! {
        <span class="dot"></span>
        {text}
    }
}

#[component]
pub fn Tracks() -> impl IntoView {
    view! {
        <section class="tracks" id="tracks">
            <RevealGroup stagger=STAGGER class="tracks-header">
                <Reveal spec=FADE_UP order=0 class="section-label">
                    {section_label("STRATEGIC TRACKS")}
                </Reveal>
                <Reveal spec=FADE_IN custom=1 order=1>
                    <a href="#" class="section-link">"Full agenda \u{2192}"</a>
                </Reveal>
            </RevealGroup>

            <RevealGroup
                stagger=STAGGER
                trigger=Trigger::in_view(GRID_MARGIN_PX)
                class="tracks-list"
            >
                {TRACKS
                    .iter()
                    .enumerate()
                    .map(|(i, track)| {
                        view! {
                            <Reveal spec=FADE_UP custom=i order=i class="track-item">
                                <h3>{track.name}</h3>
                                <span class="track-sessions">{track.sessions}</span>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn EventDetail() -> impl IntoView {
    view! {
        <section class="event-detail" id="speakers">
            <Reveal spec=SLIDE_LEFT class="event-detail-image">
                <ParallaxImg src=EVENT_IMAGE alt="Event experience" />
            </Reveal>
            <Reveal spec=SLIDE_RIGHT class="event-detail-content">
                <h3>{EVENT_HEADING}</h3>
                <p>{EVENT_COPY}</p>
                <Magnetic>
                    <a href="#register" class="btn-cyan">
                        "Reserve your spot"
                        <svg
                            width="16"
                            height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d="M5 12h14M13 6l6 6-6 6" />
                        </svg>
                    </a>
                </Magnetic>
            </Reveal>
        </section>
    }
}

#[component]
pub fn Sponsors() -> impl IntoView {
    view! {
        <section class="sponsors">
            <Reveal spec=FADE_UP class="section-label sponsors-label">
                {section_label("TRUSTED PARTNERS")}
            </Reveal>
            <RevealGroup
                stagger=STAGGER
                trigger=Trigger::in_view(GRID_MARGIN_PX)
                class="sponsors-content"
            >
                <Reveal spec=FADE_UP order=0 class="sponsors-description">
                    <p>{SPONSORS_COPY}</p>
                </Reveal>
                <RevealGroup stagger=STAGGER order=1 class="sponsors-names">
                    {SPONSORS
                        .iter()
                        .enumerate()
                        .map(|(i, name)| {
                            view! {
                                <Reveal spec=FADE_UP custom=i order=i>
                                    <h3>{*name}</h3>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </RevealGroup>
            <div class="sponsors-show-all">
                <a href="#">"View all partners \u{2192}"</a>
            </div>
        </section>
    }
}

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="highlights" id="highlights">
            <RevealGroup stagger=STAGGER class="highlights-header">
                <Reveal spec=FADE_UP order=0>
                    <h2 class="highlights-title">
                        <span class="white">"Aspire "</span>
                        <span class="blue">"25 Recap"</span>
                    </h2>
                </Reveal>
                <Reveal spec=FADE_IN custom=1 order=1>
                    <a href="#" class="section-link">"View gallery \u{2192}"</a>
                </Reveal>
            </RevealGroup>

            <RevealGroup
                stagger=STAGGER
                trigger=Trigger::in_view(GRID_MARGIN_PX)
                class="highlights-grid"
            >
                {HIGHLIGHTS
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <Reveal spec=SCALE_IN custom=i order=i class="highlight-card">
                                <ParallaxImg src=item.image alt=item.title />
                                <div class="highlight-overlay">
                                    <div class="highlight-top">
                                        <span class="highlight-tag">{item.tag}</span>
                                        <span class="highlight-company">{item.company}</span>
                                    </div>
                                    <div class="highlight-bottom">
                                        <h3>{item.title}</h3>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </section>
    }
}
