//! # aspire-motion
//!
//! DOM-free animation model behind the Aspire 26 landing page.
//!
//! The landing crate owns the browser glue (observers, animation frames,
//! event listeners). Everything that decides *what* to draw lives here, so it
//! can be tested natively:
//!
//! - [`easing`] - cubic-bezier curves, including the house `(0.16, 1, 0.3, 1)`
//! - [`tween`] - fixed-duration interpolation
//! - [`spring`] - damped springs for scroll progress and magnetic buttons
//! - [`counter`] - count-up numbers that run once on first sight
//! - [`accordion`] - single-open FAQ state
//! - [`viewport`] - viewport-entry triggers with latching
//! - [`variants`] - entrance variants rendered to inline CSS, plus stagger
//! - [`letters`] - per-character headline entrance
//! - [`pointer`] - magnetic offsets, parallax mapping, page scroll progress
//!
//! ## Quick Start
//!
//! ```rust
//! use aspire_motion::counter::Counter;
//!
//! let mut counter = Counter::new(150, "+");
//! assert_eq!(counter.display(), "0+");
//!
//! counter.trigger(0.0);
//! counter.sample(2_000.0);
//! assert_eq!(counter.display(), "150+");
//! ```
//!
//! ```rust
//! use aspire_motion::accordion::Accordion;
//!
//! let mut faq = Accordion::new(4);
//! faq.select(0).unwrap();
//! faq.select(2).unwrap();
//! assert_eq!(faq.open(), Some(2));
//! ```

#![warn(missing_debug_implementations)]

pub mod accordion;
pub mod counter;
pub mod easing;
pub mod error;
pub mod letters;
pub mod pointer;
pub mod spring;
pub mod tween;
pub mod variants;
pub mod viewport;

pub use accordion::Accordion;
pub use counter::Counter;
pub use easing::{CubicBezier, EASE_OUT_EXPO_LIKE, Easing};
pub use error::{MotionError, Result};
pub use pointer::{Magnetic, Rect};
pub use spring::{Spring, SpringConfig};
pub use tween::Tween;
pub use variants::{RevealState, Stagger, VariantSpec};
pub use viewport::{Trigger, ViewportTrigger, Visibility};
