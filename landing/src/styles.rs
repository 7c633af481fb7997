//! Stylesheet for both presentations and the version switcher.
//!
//! Injected once by the root component. Entrance animations set `opacity`,
//! `transform` and `transition` inline, so nothing here targets those
//! properties on animated wrappers.
//!
//! - `.site` scopes Version A (dark, photographic)
//! - `.vb` scopes Version B (light, typographic)
//! - `.version-switcher` floats above both

/// Complete CSS for the landing page.
pub const SITE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body {
  font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
  -webkit-font-smoothing: antialiased;
}
img { display: block; max-width: 100%; }
a { color: inherit; text-decoration: none; }

.scroll-progress {
  position: fixed; top: 0; left: 0; right: 0; height: 3px; z-index: 200;
  transform-origin: 0 50%;
  background: #00b4d8;
}
.magnetic { will-change: transform; }
.parallax-frame img { will-change: transform; }

/* ===== Version switcher ===== */
.version-switcher {
  position: fixed; right: 24px; bottom: 24px; z-index: 300;
  display: flex; gap: 4px; padding: 4px;
  background: rgba(20, 20, 24, 0.85); border-radius: 999px;
  backdrop-filter: blur(12px);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
}
.vs-btn {
  border: 0; cursor: pointer; padding: 8px 16px; border-radius: 999px;
  font: 600 13px/1 inherit; color: #bbb; background: transparent;
  transition: background 0.2s, color 0.2s;
}
.vs-btn:hover { color: #fff; }
.vs-btn.active { background: #fff; color: #111; }

/* ===== Version A ===== */
.site { background: #0a0a0c; color: #f4f4f5; min-height: 100vh; overflow-x: hidden; }
.site section { padding: 120px 6vw; }

.header {
  position: fixed; top: 0; left: 0; right: 0; z-index: 100;
  display: flex; justify-content: space-between; align-items: center;
  padding: 24px 6vw;
}
.header.scrolled { background: rgba(10, 10, 12, 0.9); backdrop-filter: blur(16px); padding: 14px 6vw; }
.header-left, .header-right { display: flex; align-items: center; gap: 32px; }
.logo { font-weight: 800; font-size: 20px; letter-spacing: 0.04em; }
.logo-accent { color: #00b4d8; }
.nav-links { display: flex; gap: 24px; font-size: 14px; color: #a1a1aa; }
.nav-links a:hover { color: #fff; }
.btn-header-outline { border: 1px solid #3f3f46; padding: 10px 20px; border-radius: 999px; font-size: 14px; }
.btn-header-fill { background: #fff; color: #0a0a0c; padding: 10px 20px; border-radius: 999px; font-size: 14px; font-weight: 600; }

.site .hero { position: relative; min-height: 100vh; display: flex; align-items: flex-end; padding-bottom: 80px; }
.hero-bg { position: absolute; inset: 0; z-index: 0; }
.hero-bg img { width: 100%; height: 100%; object-fit: cover; filter: brightness(0.45); }
.hero-content { position: relative; z-index: 1; width: 100%; display: flex; justify-content: space-between; align-items: flex-end; gap: 48px; }
.hero-text h1 { font-size: clamp(40px, 7vw, 96px); line-height: 1.02; font-weight: 700; letter-spacing: -0.03em; }
.accent { color: #00b4d8; }
.hero-cta { display: flex; align-items: center; gap: 16px; margin-top: 40px; }
.btn-hero, .btn-about {
  display: inline-block; background: #fff; color: #0a0a0c;
  padding: 16px 32px; border-radius: 999px; font-weight: 600;
}
.arrow-circle {
  width: 52px; height: 52px; border-radius: 50%; border: 1px solid rgba(255, 255, 255, 0.4);
  display: inline-flex; align-items: center; justify-content: center;
}
.arrow-circle svg { width: 20px; height: 20px; }
.hero-info { max-width: 360px; color: #d4d4d8; font-size: 15px; line-height: 1.6; }
.hero-scroll {
  position: absolute; left: 50%; bottom: 24px; z-index: 1;
  font-size: 11px; letter-spacing: 0.3em; color: #a1a1aa; text-align: center;
}
.scroll-line { width: 1px; height: 40px; margin: 8px auto 0; background: linear-gradient(#a1a1aa, transparent); }

.about-content p { font-size: clamp(24px, 3vw, 40px); line-height: 1.35; max-width: 1000px; }
.about-cta { display: flex; align-items: center; gap: 16px; margin-top: 48px; }

.stats-bar {
  display: grid; grid-template-columns: repeat(4, 1fr);
  border-top: 1px solid #27272a; border-bottom: 1px solid #27272a;
}
.stat-item { padding: 48px 6vw; border-right: 1px solid #27272a; }
.stat-item:last-child { border-right: 0; }
.stat-number { font-size: 56px; font-weight: 700; color: #00b4d8; font-variant-numeric: tabular-nums; }
.stat-label { margin-top: 8px; color: #a1a1aa; font-size: 14px; }

.section-label { display: flex; align-items: center; gap: 10px; font-size: 12px; letter-spacing: 0.2em; color: #a1a1aa; }
.sponsors-label { margin-bottom: 48px; }
.dot { width: 8px; height: 8px; border-radius: 50%; background: #00b4d8; display: inline-block; }
.section-link { color: #a1a1aa; font-size: 14px; }
.section-link:hover { color: #fff; }

.tracks-header, .highlights-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 48px; }
.track-item {
  display: flex; justify-content: space-between; align-items: baseline;
  padding: 32px 0; border-bottom: 1px solid #27272a;
}
.track-item h3 { font-size: clamp(28px, 4vw, 56px); font-weight: 600; }
.track-sessions { color: #71717a; }

.event-detail { display: grid; grid-template-columns: 1fr 1fr; gap: 64px; align-items: center; }
.event-detail-image { height: 560px; border-radius: 16px; overflow: hidden; }
.event-detail-content h3 { font-size: 40px; line-height: 1.15; margin-bottom: 24px; }
.event-detail-content p { color: #a1a1aa; line-height: 1.7; margin-bottom: 32px; }
.btn-cyan {
  display: inline-flex; align-items: center; gap: 10px;
  background: #00b4d8; color: #0a0a0c; padding: 14px 28px; border-radius: 999px; font-weight: 600;
}

.sponsors-content { display: grid; grid-template-columns: 1fr 2fr; gap: 64px; }
.sponsors-description p { color: #a1a1aa; line-height: 1.7; }
.sponsors-names { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; }
.sponsors-names h3 { font-size: 28px; font-weight: 600; color: #d4d4d8; }
.sponsors-show-all { margin-top: 48px; color: #a1a1aa; }

.highlights-title { font-size: clamp(36px, 5vw, 72px); }
.highlights-title .white { color: #fff; }
.highlights-title .blue { color: #00b4d8; }
.highlights-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
.highlight-card { position: relative; height: 480px; border-radius: 16px; overflow: hidden; }
.highlight-overlay {
  position: absolute; inset: 0; padding: 24px;
  display: flex; flex-direction: column; justify-content: space-between;
  background: linear-gradient(180deg, rgba(0, 0, 0, 0.2), rgba(0, 0, 0, 0.75));
}
.highlight-top { display: flex; justify-content: space-between; font-size: 13px; }
.highlight-tag { background: rgba(255, 255, 255, 0.15); padding: 6px 12px; border-radius: 999px; }
.highlight-bottom h3 { font-size: 22px; line-height: 1.3; }

.cta-section { position: relative; overflow: hidden; }
.cta-glow {
  position: absolute; width: 600px; height: 600px; right: -200px; top: -200px;
  background: radial-gradient(circle, rgba(0, 180, 216, 0.25), transparent 70%);
}
.cta-person, .newsletter-person { display: flex; align-items: center; gap: 16px; margin-bottom: 40px; }
.cta-person-photo img, .newsletter-photo img { width: 56px; height: 56px; border-radius: 50%; object-fit: cover; }
.cta-person-info h4, .newsletter-info h4 { font-size: 16px; }
.cta-person-info span, .newsletter-info span { color: #a1a1aa; font-size: 14px; }
.cta-heading { font-size: clamp(36px, 6vw, 88px); line-height: 1.05; max-width: 1100px; }
.cta-bottom { display: flex; justify-content: space-between; align-items: flex-end; gap: 48px; margin-top: 48px; }
.cta-description { color: #a1a1aa; max-width: 480px; line-height: 1.7; }
.cta-buttons { display: flex; gap: 16px; }
.btn-cta { display: inline-block; padding: 16px 32px; border-radius: 999px; font-weight: 600; }
.btn-cta.primary { background: #00b4d8; color: #0a0a0c; }
.btn-cta.secondary { border: 1px solid #3f3f46; }

.newsletter-content { display: grid; grid-template-columns: 1fr 2fr; gap: 64px; }
.newsletter-heading h3 { font-size: 32px; line-height: 1.3; margin-bottom: 32px; }
.newsletter-form { display: flex; flex-direction: column; gap: 12px; max-width: 520px; }
.newsletter-form label { font-size: 13px; color: #a1a1aa; }
.newsletter-form input {
  background: transparent; border: 0; border-bottom: 1px solid #3f3f46;
  color: #fff; font: inherit; padding: 12px 0; outline: none;
}
.newsletter-form input:focus { border-bottom-color: #00b4d8; }
.privacy-link { font-size: 13px; color: #71717a; text-decoration: underline; }

.footer { padding: 80px 6vw 40px; border-top: 1px solid #27272a; }
.footer-content { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 48px; }
.footer-brand p { color: #a1a1aa; line-height: 1.7; max-width: 420px; }
.footer-social { display: flex; gap: 12px; margin-top: 24px; }
.footer-social a {
  width: 40px; height: 40px; border-radius: 50%; border: 1px solid #3f3f46;
  display: inline-flex; align-items: center; justify-content: center; font-size: 13px;
}
.footer-col { display: flex; flex-direction: column; gap: 12px; color: #a1a1aa; }
.footer-col a:hover, .footer-legal a:hover { color: #fff; }
.footer-bottom {
  display: flex; justify-content: space-between; margin-top: 64px; padding-top: 24px;
  border-top: 1px solid #27272a; color: #71717a; font-size: 13px;
}
.footer-legal { display: flex; gap: 24px; }

/* ===== Version B ===== */
.vb { background: #f7f6f2; color: #111; min-height: 100vh; overflow-x: hidden; }
.vb section { padding: 96px 5vw; border-top: 1px solid #e2e0d8; }
.vb .scroll-progress { height: 4px; }

.vb-topbar { display: flex; justify-content: space-between; align-items: center; padding: 20px 5vw; }
.vb-topbar-left { display: flex; align-items: baseline; gap: 24px; }
.vb-logo { font-weight: 900; font-size: 22px; letter-spacing: 0.08em; }
.vb-tagline { color: #6b6b6b; font-size: 14px; }
.vb-topbar-right a { font-weight: 600; }

.vb-infobar {
  display: flex; justify-content: space-between; align-items: center;
  padding: 16px 5vw; background: #111; color: #f7f6f2;
}
.vb-infobar-items { display: flex; gap: 48px; }
.vb-infobar-item { display: flex; flex-direction: column; gap: 2px; font-size: 14px; }
.vb-infobar-item span { color: #a3a3a3; }
.vb-infobar-right { display: flex; align-items: center; gap: 24px; }
.vb-price-tag { font-size: 14px; color: #a3a3a3; }
.vb-btn-register { background: linear-gradient(90deg, #9D1DF2, #296CF2); color: #fff; padding: 10px 24px; border-radius: 6px; font-weight: 600; }

.vb .vb-hero { padding: 40px 5vw 24px; border-top: 0; perspective: 800px; }
.vb-hero-text {
  display: block; font-weight: 900; line-height: 0.85; letter-spacing: -0.04em;
  font-size: clamp(96px, 22vw, 360px);
  background: linear-gradient(90deg, #9D1DF2, #296CF2);
  -webkit-background-clip: text; background-clip: text; color: transparent;
}
.vb-hero-text span { background: inherit; -webkit-background-clip: text; background-clip: text; }

.vb-reg-inner { display: grid; grid-template-columns: 1fr 3fr 1fr; gap: 32px; align-items: end; }
.vb-reg-label, .vb-tracks-label, .vb-stats-label, .vb-why-label,
.vb-sessions-label, .vb-faq-label, .vb-tickets-label {
  font-size: 12px; letter-spacing: 0.2em; color: #6b6b6b; font-weight: 600;
}
.vb-reg-content h2 { font-size: clamp(32px, 4vw, 56px); line-height: 1.1; }
.vb-reg-content a { color: #296CF2; }
.vb-reg-virtual { margin-top: 16px; color: #6b6b6b; }
.vb-reg-price { font-size: clamp(48px, 7vw, 112px); font-weight: 900; text-align: right; }

.vb-tracks-header, .vb-sessions-header, .vb-faq-header, .vb-tickets-header {
  display: grid; grid-template-columns: 1fr 3fr; gap: 32px; margin-bottom: 56px;
}
.vb-tracks-title, .vb-sessions-title, .vb-faq-title, .vb-tickets-title {
  font-size: clamp(32px, 4vw, 56px); line-height: 1.1; font-weight: 800;
}
.vb-tracks-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; }
.vb-track-card { padding: 32px; background: #fff; border: 1px solid #e2e0d8; border-radius: 12px; height: 100%; }
.vb-track-icon { width: 40px; height: 40px; color: #9D1DF2; margin-bottom: 24px; }
.vb-track-icon svg { width: 100%; height: 100%; }
.vb-track-card h3 { font-size: 20px; margin-bottom: 12px; }
.vb-track-card p { color: #555; line-height: 1.6; font-size: 15px; }

.vb-stats-numbers { display: flex; flex-direction: column; gap: 8px; margin-top: 32px; }
.vb-stats-numbers h2 { font-size: clamp(40px, 7vw, 112px); font-weight: 900; line-height: 1; }
.vb-stats-numbers span { color: #296CF2; font-variant-numeric: tabular-nums; }

.vb-why-content { margin-top: 40px; }
.vb-why-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; }
.vb-why-col h3, .vb-expect h3 { font-size: 24px; margin-bottom: 16px; }
.vb-why-col p, .vb-expect p { color: #555; line-height: 1.7; }
.vb-expect { margin-top: 48px; padding: 40px; background: #111; color: #f7f6f2; border-radius: 12px; }
.vb-expect p { color: #d4d4d4; }

.vb-session-card {
  display: grid; grid-template-columns: 80px 1fr 40px; align-items: center; gap: 24px;
  padding: 32px 0; border-bottom: 1px solid #e2e0d8;
}
.vb-session-number { font-size: 40px; font-weight: 900; color: #c9c6bb; }
.vb-session-track { font-size: 12px; letter-spacing: 0.1em; color: #9D1DF2; text-transform: uppercase; margin-bottom: 8px; }
.vb-session-content h4 { font-size: 24px; margin-bottom: 12px; }
.vb-session-speaker { display: flex; align-items: center; gap: 8px; color: #555; }
.vb-session-speaker-icon { width: 18px; height: 18px; }
.vb-session-arrow { font-size: 24px; color: #296CF2; }

.vb-faq-list { display: flex; flex-direction: column; max-width: 960px; margin-left: auto; }
.vb-faq-item { border-bottom: 1px solid #d6d3c8; padding: 24px 0; cursor: pointer; }
.vb-faq-question { display: flex; justify-content: space-between; font-size: 20px; font-weight: 700; }
.vb-faq-arrow { transition: transform 0.3s cubic-bezier(0.16, 1, 0.3, 1); }
.vb-faq-item.open .vb-faq-arrow { transform: rotate(180deg); }
.vb-faq-answer-inner { overflow: hidden; min-height: 0; }
.vb-faq-answer p { padding-top: 16px; color: #555; line-height: 1.7; }

.vb-tickets-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
.vb-ticket-card {
  padding: 40px; background: #fff; border: 1px solid #e2e0d8; border-radius: 16px;
  transition: transform 0.3s ease;
}
.vb-ticket-card:hover { transform: scale(1.02); }
.vb-ticket-card h3 { font-size: 28px; margin-bottom: 16px; }
.vb-ticket-details { color: #555; line-height: 1.6; }
.vb-ticket-price { font-size: 56px; font-weight: 900; margin: 24px 0 8px; }
.vb-ticket-note { color: #6b6b6b; font-size: 14px; margin-bottom: 32px; }
.vb-ticket-btn {
  display: inline-block; padding: 14px 28px; border-radius: 6px; font-weight: 600; color: #fff;
  background: linear-gradient(90deg, #9D1DF2, #296CF2);
}

.vb-footer-dark { background: #111; color: #f7f6f2; padding: 80px 5vw 32px; }
.vb-footer-top { display: flex; justify-content: space-between; gap: 48px; }
.vb-footer-logo { font-size: clamp(64px, 12vw, 180px); font-weight: 900; line-height: 0.9; letter-spacing: -0.03em; }
.vb-footer-links { display: flex; gap: 64px; }
.vb-footer-link-col { display: flex; flex-direction: column; gap: 12px; color: #a3a3a3; }
.vb-footer-link-col a:hover, .vb-footer-legal a:hover { color: #fff; }
.vb-footer-bottom {
  display: flex; justify-content: space-between; align-items: center;
  margin-top: 64px; padding-top: 24px; border-top: 1px solid #333; font-size: 13px; color: #a3a3a3;
}
.vb-footer-brand { font-weight: 700; color: #f7f6f2; }
.vb-footer-legal { display: flex; gap: 24px; }

@media (max-width: 900px) {
  .nav-links { display: none; }
  .hero-content, .cta-bottom { flex-direction: column; align-items: flex-start; }
  .stats-bar, .highlights-grid, .vb-tracks-grid { grid-template-columns: 1fr 1fr; }
  .event-detail, .sponsors-content, .newsletter-content, .footer-content,
  .vb-reg-inner, .vb-why-grid, .vb-tickets-grid,
  .vb-tracks-header, .vb-sessions-header, .vb-faq-header, .vb-tickets-header { grid-template-columns: 1fr; }
  .vb-infobar, .vb-footer-top { flex-direction: column; align-items: flex-start; gap: 16px; }
  .vb-tagline { display: none; }
}

@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_both_versions_and_switcher() {
        for selector in [".site", ".vb ", ".version-switcher", ".vs-btn.active", ".scroll-progress"] {
            assert!(SITE_CSS.contains(selector), "missing {selector}");
        }
    }

    #[test]
    fn ticket_cards_scale_on_hover() {
        assert!(SITE_CSS.contains(".vb-ticket-card:hover { transform: scale(1.02); }"));
        assert!(SITE_CSS.contains("transition: transform 0.3s"));
    }

    #[test]
    fn braces_are_balanced() {
        let open = SITE_CSS.matches('{').count();
        let close = SITE_CSS.matches('}').count();
        assert_eq!(open, close);
    }
}
