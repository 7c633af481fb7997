// Version A: dark editorial layout with a photo hero and magnetic calls to action

mod closing;
mod hero;
mod program;

use aspire_motion::variants::version_a::{HEADER, HEADER_DELAY_S};
use aspire_motion::{RevealState, Trigger};
use leptos::prelude::*;

use crate::content::version_a::NAV;
use crate::dom;
use crate::widgets::{Magnetic, ScrollProgress, on_first_sight, site_config};
use closing::{Cta, Footer, Newsletter};
use hero::{About, Hero, StatsBar};
use program::{EventDetail, Highlights, Sponsors, Tracks};

#[component]
pub fn VersionA() -> impl IntoView {
    view! {
        <div class="site">
            <ScrollProgress />
            <Header />
            <Hero />
            <About />
            <StatsBar />
            <Tracks />
            <EventDetail />
            <Sponsors />
            <Highlights />
            <Cta />
            <Newsletter />
            <Footer />
        </div>
    }
}

/// Fixed header. Slides in after mount and turns solid once the page has
/// scrolled past the configured threshold.
#[component]
fn Header() -> impl IntoView {
    let threshold = site_config().header.scrolled_threshold_px;
    let is_past = move || dom::scroll_y().is_ok_and(|y| y > threshold);
    let (scrolled, set_scrolled) = signal(is_past());
    let listener = window_event_listener(leptos::ev::scroll, move |_| set_scrolled.set(is_past()));
    on_cleanup(move || listener.remove());

    let node = NodeRef::<leptos::html::Header>::new();
    let entered = RwSignal::new(false);
    on_first_sight(node, Trigger::Mount, move || entered.set(true));

    view! {
        <header
            node_ref=node
            class=move || if scrolled.get() { "header scrolled" } else { "header" }
            style=move || HEADER.style(RevealState::from_visible(entered.get()), HEADER_DELAY_S)
        >
            <div class="header-left">
                <a href="#" class="logo">
                    "ASPIRE\u{a0}"
                    <span class="logo-accent">"26"</span>
                </a>
                <nav class="nav-links">
                    {NAV
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </nav>
            </div>
            <div class="header-right">
                <a href="#" class="btn-header-outline">"Agenda"</a>
                <Magnetic>
                    <a href="#register" class="btn-header-fill">"Register Now"</a>
                </Magnetic>
            </div>
        </header>
    }
}

/// Thin right arrow used on the round link buttons.
fn arrow_icon() -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 24 24"
            fill="none"
            stroke="#fff"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M5 12h14M13 6l6 6-6 6" />
        </svg>
    }
}
