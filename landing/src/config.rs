//! Site settings.
//!
//! `site.toml` is compiled into the binary; every table and key is optional
//! and falls back to the values the page was designed with.

use aspire_motion::spring::{self, SpringConfig};
use aspire_motion::{Magnetic, MotionError, counter, pointer, tween, viewport};
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

use crate::switcher::SiteVersion;

pub const EMBEDDED: &str = include_str!("../site.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.toml is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid animation setting: {0}")]
    Invalid(#[from] MotionError),
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Presentation shown on first load.
    pub default_version: SiteVersion,
    pub counter: CounterConfig,
    pub header: HeaderConfig,
    pub scroll_progress: ScrollProgressConfig,
    pub magnetic: MagneticConfig,
    pub parallax: ParallaxConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Viewport margin before a counter starts.
    pub margin_px: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: counter::DEFAULT_DURATION_MS,
            margin_px: viewport::SECTION_MARGIN_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset past which the Version A header turns solid.
    pub scrolled_threshold_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollProgressConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub rest_delta: f64,
}

impl Default for ScrollProgressConfig {
    fn default() -> Self {
        Self {
            stiffness: spring::SCROLL_PROGRESS.stiffness,
            damping: spring::SCROLL_PROGRESS.damping,
            rest_delta: spring::SCROLL_PROGRESS.rest_delta,
        }
    }
}

impl ScrollProgressConfig {
    pub fn spring(&self) -> SpringConfig {
        SpringConfig {
            stiffness: self.stiffness,
            damping: self.damping,
            rest_delta: self.rest_delta,
            ..spring::SCROLL_PROGRESS
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MagneticConfig {
    /// Fraction of the cursor offset the element follows.
    pub strength: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            strength: pointer::MAGNETIC_STRENGTH,
            stiffness: spring::MAGNETIC.stiffness,
            damping: spring::MAGNETIC.damping,
        }
    }
}

impl MagneticConfig {
    pub fn spring(&self) -> SpringConfig {
        SpringConfig {
            stiffness: self.stiffness,
            damping: self.damping,
            ..spring::MAGNETIC
        }
    }

    /// Fresh magnetic model. Settings were checked by [`SiteConfig::validate`];
    /// anything that slipped through falls back to the built-in preset.
    pub fn model(&self) -> Magnetic {
        Magnetic::new(self.strength, self.spring()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub range_px: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            range_px: pointer::PARALLAX_RANGE_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.level
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnknownLevel(self.level.clone()))
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        tween::validate_duration(self.counter.duration_ms)?;
        non_negative("counter.margin_px", self.counter.margin_px)?;
        non_negative(
            "header.scrolled_threshold_px",
            self.header.scrolled_threshold_px,
        )?;
        self.scroll_progress.spring().validate()?;
        self.magnetic.spring().validate()?;
        if !(0.0..=1.0).contains(&self.magnetic.strength) {
            return Err(ConfigError::OutOfRange {
                field: "magnetic.strength",
                value: self.magnetic.strength,
            });
        }
        non_negative("parallax.range_px", self.parallax.range_px)?;
        self.logging.level()?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_file_matches_defaults() {
        let config = SiteConfig::from_toml_str(EMBEDDED).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.default_version, SiteVersion::B);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.counter.duration_ms, 2000.0);
        assert_eq!(config.header.scrolled_threshold_px, 50.0);
        assert_eq!(config.logging.level().unwrap(), Level::INFO);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let toml = r#"
default_version = "a"

[magnetic]
strength = 0.2
"#;
        let config = SiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.default_version, SiteVersion::A);
        assert_eq!(config.magnetic.strength, 0.2);
        assert_eq!(config.magnetic.stiffness, 250.0);
        assert_eq!(config.scroll_progress, ScrollProgressConfig::default());
    }

    #[test]
    fn presets_flow_into_springs() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll_progress.spring(), spring::SCROLL_PROGRESS);
        assert_eq!(config.magnetic.spring(), spring::MAGNETIC);
    }

    #[test]
    fn rejects_zero_duration() {
        let err = SiteConfig::from_toml_str("[counter]\nduration_ms = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(MotionError::InvalidDuration(_))
        ));
    }

    #[test]
    fn rejects_bad_spring() {
        let err = SiteConfig::from_toml_str("[scroll_progress]\nstiffness = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(MotionError::InvalidSpring { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = SiteConfig::from_toml_str("[magnetic]\nstrength = 3.0").unwrap_err();
        assert_eq!(err.to_string(), "magnetic.strength is out of range: 3");

        let err = SiteConfig::from_toml_str("[parallax]\nrange_px = -5.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "parallax.range_px",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_version_and_level() {
        assert!(matches!(
            SiteConfig::from_toml_str("default_version = \"c\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml_str("[logging]\nlevel = \"loud\""),
            Err(ConfigError::UnknownLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn level_names_are_case_insensitive() {
        let logging = LoggingConfig {
            level: "DEBUG".into(),
        };
        assert_eq!(logging.level().unwrap(), Level::DEBUG);
    }
}
