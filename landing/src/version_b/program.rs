use aspire_motion::Trigger;
use aspire_motion::variants::version_b::{FADE_IN, FADE_UP, STAGGER};
use aspire_motion::viewport::GRID_MARGIN_PX;
use leptos::prelude::*;

use crate::content::version_b::{SESSIONS, STATS, TRACKS, WHY_EXPECT, WHY_LEARN, WHY_MEET};
use crate::content::{Session, TrackIcon};
use crate::widgets::{Counter, Reveal, RevealGroup};

fn track_icon(icon: TrackIcon) -> AnyView {
    let paths = match icon {
        TrackIcon::Lightbulb => view! {
            <path d="M12 2a4 4 0 0 1 4 4c0 1.5-.8 2.8-2 3.5v1.5h-4V9.5A4 4 0 0 1 12 2z" />
            <path d="M10 11h4v2a2 2 0 0 1-4 0v-2z" />
            <path d="M9 16h6" />
            <path d="M10 19h4" />
            <path d="M8 22h8" />
        }
        .into_any(),
        TrackIcon::Network => view! {
            <path d="M6.5 19a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z" />
            <path d="M17.5 19a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z" />
            <path d="M12 10a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z" />
            <path d="M12 10v3" />
            <path d="M6.5 14v-1a5.5 5.5 0 0 1 11 0v1" />
        }
        .into_any(),
        TrackIcon::Lock => view! {
            <rect x="3" y="11" width="18" height="11" rx="2" />
            <path d="M7 11V7a5 5 0 0 1 10 0v4" />
            <circle cx="12" cy="16" r="1" />
        }
        .into_any(),
        TrackIcon::Pulse => view! { <path d="M22 12h-4l-3 9L9 3l-3 9H2" /> }.into_any(),
    };

    view! {
        <svg
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {paths}
        </svg>
    }
    .into_any()
}

#[component]
pub fn Tracks() -> impl IntoView {
    view! {
        <section class="vb-tracks">
            <RevealGroup stagger=STAGGER trigger=Trigger::in_view(GRID_MARGIN_PX)>
                <div class="vb-tracks-header">
                    <Reveal spec=FADE_IN order=0 class="vb-tracks-label">"4 STRATEGIC TRACKS"</Reveal>
                    <Reveal spec=FADE_UP order=1>
                        <h2 class="vb-tracks-title">
                            "Deep dives across every dimension of your business"
                        </h2>
                    </Reveal>
                </div>
                <RevealGroup stagger=STAGGER order=2 class="vb-tracks-grid">
                    {TRACKS
                        .iter()
                        .enumerate()
                        .map(|(i, track)| {
                            view! {
                                <Reveal spec=FADE_UP custom=i order=i class="vb-track-card">
                                    <div class="vb-track-icon">{track_icon(track.icon)}</div>
                                    <h3>{track.title}</h3>
                                    <p>{track.description}</p>
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
pub fn Stats() -> impl IntoView {
    view! {
        <section class="vb-stats">
            <RevealGroup stagger=STAGGER>
                <Reveal spec=FADE_IN order=0 class="vb-stats-label">"ASPIRE 26 AT A GLANCE"</Reveal>
                <Reveal spec=FADE_UP order=1 class="vb-stats-numbers">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <h2>
                                    <Counter target=stat.target suffix=stat.suffix />
                                    " "
                                    {stat.label}
                                </h2>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn WhyAttend() -> impl IntoView {
    view! {
        <section class="vb-why">
            <RevealGroup stagger=STAGGER>
                <Reveal spec=FADE_IN order=0 class="vb-why-label">"WHY ATTEND"</Reveal>
                <div class="vb-why-content">
                    <div class="vb-why-grid">
                        <Reveal spec=FADE_UP order=1 class="vb-why-col">
                            <h3>"What you'll learn"</h3>
                            <p>{WHY_LEARN}</p>
                        </Reveal>
                        <Reveal spec=FADE_UP custom=1 order=2 class="vb-why-col">
                            <h3>"Who you'll meet"</h3>
                            <p>{WHY_MEET}</p>
                        </Reveal>
                    </div>
                    <Reveal spec=FADE_UP custom=2 order=3 class="vb-expect">
                        <h3>"What to expect"</h3>
                        <p>{WHY_EXPECT}</p>
                    </Reveal>
                </div>
            </RevealGroup>
        </section>
    }
}

#[component]
pub fn Sessions() -> impl IntoView {
    view! {
        <section class="vb-sessions">
            <RevealGroup stagger=STAGGER>
                <div class="vb-sessions-header">
                    <Reveal spec=FADE_IN order=0 class="vb-sessions-label">"FEATURED SESSIONS"</Reveal>
                    <Reveal spec=FADE_UP order=1>
                        <h2 class="vb-sessions-title">"What's on the agenda"</h2>
                    </Reveal>
                </div>
                <RevealGroup stagger=STAGGER order=2 class="vb-sessions-list">
                    {SESSIONS
                        .iter()
                        .enumerate()
                        .map(|(i, session)| {
                            view! {
                                <Reveal spec=FADE_UP custom=i order=i class="vb-session-card">
                                    <div class="vb-session-number">{Session::number(i)}</div>
                                    <div class="vb-session-content">
                                        <div class="vb-session-track">{session.track}</div>
                                        <h4>{session.title}</h4>
                                        <div class="vb-session-speaker">
                                            <svg
                                                viewBox="0 0 24 24"
                                                fill="none"
                                                stroke="currentColor"
                                                stroke-width="1.5"
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                class="vb-session-speaker-icon"
                                            >
                                                <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
                                                <circle cx="12" cy="7" r="4" />
                                            </svg>
                                            <span>
                                                <strong>{session.speaker}</strong>
                                                {format!(" \u{2014} {}", session.role)}
                                            </span>
                                        </div>
                                    </div>
                                    <div class="vb-session-arrow">"\u{2192}"</div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </RevealGroup>
        </section>
    }
}
