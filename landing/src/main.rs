// Aspire 26 landing page - Leptos 0.8 CSR

mod config;
mod content;
mod dom;
mod styles;
mod switcher;
mod telemetry;
mod version_a;
mod version_b;
mod widgets;

use anyhow::Context;
use leptos::prelude::*;
use tracing::Level;

use config::SiteConfig;
use switcher::{SiteVersion, Switcher, VersionSwitcher};
use version_a::VersionA;
use version_b::VersionB;

fn main() {
    console_error_panic_hook::set_once();

    let config = match boot() {
        Ok(config) => config,
        Err(err) => {
            telemetry::init(Level::INFO);
            tracing::warn!("{err:#}; using built-in settings");
            SiteConfig::default()
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        initial = ?config.default_version,
        "aspire landing starting"
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// Parse the embedded settings and install logging at the configured level.
fn boot() -> anyhow::Result<SiteConfig> {
    let config = SiteConfig::from_toml_str(config::EMBEDDED).context("loading site.toml")?;
    telemetry::init(config.logging.level()?);
    Ok(config)
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let switcher = RwSignal::new(Switcher::new(config.default_version));
    provide_context(config);

    // Re-selecting the shown version must not remount it.
    let current = Memo::new(move |_| switcher.with(Switcher::current));
    let page = move || match current.get() {
        SiteVersion::A => view! { <VersionA /> }.into_any(),
        SiteVersion::B => view! { <VersionB /> }.into_any(),
    };

    view! {
        <style>{styles::SITE_CSS}</style>
        {page}
        <VersionSwitcher switcher=switcher />
    }
}
