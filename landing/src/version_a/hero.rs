use aspire_motion::Trigger;
use aspire_motion::variants::version_a::{FADE_UP, SCROLL_CUE, SCROLL_CUE_DELAY_S, STAGGER};
use aspire_motion::viewport::GRID_MARGIN_PX;
use leptos::prelude::*;

use super::arrow_icon;
use crate::content::version_a::{ABOUT, HERO_IMAGE, HERO_INFO, STATS};
use crate::widgets::{Counter, Magnetic, Reveal, RevealGroup};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-bg">
                <img src=HERO_IMAGE alt="Aspire 26 Conference" />
            </div>
            <RevealGroup stagger=STAGGER trigger=Trigger::Mount class="hero-content">
                <div class="hero-text">
                    <Reveal spec=FADE_UP order=0>
                        <h1>
                            "Transform your business" <br />
                            <span class="accent">"through technology."</span>
                        </h1>
                    </Reveal>
                    <Reveal spec=FADE_UP custom=2 order=1 class="hero-cta">
                        <Magnetic>
                            <a href="#register" class="btn-hero">"Register Free"</a>
                        </Magnetic>
                        <a href="#tracks" class="arrow-circle">{arrow_icon()}</a>
                    </Reveal>
                </div>
                <Reveal spec=FADE_UP custom=3 order=2 class="hero-info">
                    <p>{HERO_INFO}</p>
                </Reveal>
            </RevealGroup>
            <Reveal
                spec=SCROLL_CUE
                trigger=Trigger::Mount
                delay=SCROLL_CUE_DELAY_S
                class="hero-scroll"
            >
                "SCROLL"
                <div class="scroll-line"></div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <RevealGroup stagger=STAGGER class="about-content">
                <Reveal spec=FADE_UP order=0>
                    <p>{ABOUT}</p>
                </Reveal>
                <Reveal spec=FADE_UP custom=2 order=1 class="about-cta">
                    <Magnetic>
                        <a href="#tracks" class="btn-about">"View all tracks"</a>
                    </Magnetic>
                    <a href="#" class="arrow-circle">{arrow_icon()}</a>
                </Reveal>
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn StatsBar() -> impl IntoView {
    view! {
        <RevealGroup
            stagger=STAGGER
            trigger=Trigger::in_view(GRID_MARGIN_PX)
            class="stats-bar"
        >
            {STATS
                .iter()
                .enumerate()
                .map(|(i, stat)| {
                    view! {
                        <Reveal spec=FADE_UP custom=i order=i class="stat-item">
                            <div class="stat-number">
                                <Counter target=stat.target suffix=stat.suffix />
                            </div>
                            <div class="stat-label">{stat.label}</div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </RevealGroup>
    }
}
