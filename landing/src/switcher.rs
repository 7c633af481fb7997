// Floating A/B presentation toggle

use leptos::prelude::*;
use serde::Deserialize;

use crate::dom;

/// The two presentations of the same content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SiteVersion {
    #[serde(alias = "a")]
    A,
    #[default]
    #[serde(alias = "b")]
    B,
}

impl SiteVersion {
    pub const ALL: [SiteVersion; 2] = [SiteVersion::A, SiteVersion::B];

    pub fn label(self) -> &'static str {
        match self {
            SiteVersion::A => "Version A",
            SiteVersion::B => "Version B",
        }
    }
}

/// What the page has to do after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub changed: bool,
    pub scroll_to_top: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Switcher {
    current: SiteVersion,
}

impl Switcher {
    pub fn new(initial: SiteVersion) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> SiteVersion {
        self.current
    }

    /// Show `version`. The viewport always returns to the top, even when the
    /// version is already showing.
    pub fn select(&mut self, version: SiteVersion) -> SwitchOutcome {
        let changed = self.current != version;
        self.current = version;
        SwitchOutcome {
            changed,
            scroll_to_top: true,
        }
    }
}

#[component]
pub fn VersionSwitcher(switcher: RwSignal<Switcher>) -> impl IntoView {
    let choose = move |version: SiteVersion| {
        let Some(outcome) = switcher.try_update(|s| s.select(version)) else {
            return;
        };
        tracing::debug!(?version, changed = outcome.changed, "version selected");
        if outcome.scroll_to_top {
            if let Err(err) = dom::scroll_to_top() {
                tracing::warn!(%err, "could not scroll to top");
            }
        }
    };

    view! {
        <div class="version-switcher">
            {SiteVersion::ALL
                .into_iter()
                .map(|version| {
                    view! {
                        <button
                            class=move || {
                                if switcher.with(|s| s.current() == version) {
                                    "vs-btn active"
                                } else {
                                    "vs-btn"
                                }
                            }
                            on:click=move |_| choose(version)
                        >
                            {version.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_configured_version() {
        assert_eq!(Switcher::default().current(), SiteVersion::B);
        assert_eq!(Switcher::new(SiteVersion::A).current(), SiteVersion::A);
    }

    #[test]
    fn selecting_a_from_b_changes_version_and_scrolls_up() {
        let mut switcher = Switcher::new(SiteVersion::B);
        let outcome = switcher.select(SiteVersion::A);
        assert_eq!(
            outcome,
            SwitchOutcome {
                changed: true,
                scroll_to_top: true
            }
        );
        assert_eq!(switcher.current(), SiteVersion::A);
    }

    #[test]
    fn reselecting_still_scrolls_to_top() {
        let mut switcher = Switcher::new(SiteVersion::B);
        let outcome = switcher.select(SiteVersion::B);
        assert!(!outcome.changed);
        assert!(outcome.scroll_to_top);
    }

    #[test]
    fn labels() {
        assert_eq!(SiteVersion::A.label(), "Version A");
        assert_eq!(SiteVersion::B.label(), "Version B");
    }
}
