//! Single-open accordion state.

use crate::easing::EASE_OUT_EXPO_LIKE;
use crate::error::{MotionError, Result};

/// Answer panels open and close over this many seconds.
pub const PANEL_TRANSITION_S: f64 = 0.3;

/// Tracks which of `len` entries is expanded. At most one entry is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Toggle `index`: closes it if it is the open entry, otherwise opens it
    /// and closes whatever was open. Returns the newly open entry.
    pub fn select(&mut self, index: usize) -> Result<Option<usize>> {
        if index >= self.len {
            return Err(MotionError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        tracing::debug!(index, open = ?self.open, "accordion selection");
        Ok(self.open)
    }

    pub fn collapse(&mut self) {
        self.open = None;
    }
}

/// Inline style for an answer panel. The panel is a one-row grid whose row
/// animates between `0fr` and `1fr`, which transitions to the content's
/// natural height.
pub fn panel_style(open: bool) -> String {
    let (rows, opacity) = if open { ("1fr", 1) } else { ("0fr", 0) };
    let ease = EASE_OUT_EXPO_LIKE.to_css();
    format!(
        "display: grid; grid-template-rows: {rows}; opacity: {opacity}; \
         transition: grid-template-rows {PANEL_TRANSITION_S}s {ease}, opacity {PANEL_TRANSITION_S}s {ease};"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let faq = Accordion::new(4);
        assert_eq!(faq.open(), None);
        assert!((0..4).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn reselecting_open_entry_collapses_it() {
        let mut faq = Accordion::new(4);
        assert_eq!(faq.select(1), Ok(Some(1)));
        assert_eq!(faq.select(1), Ok(None));
        assert_eq!(faq.open(), None);
    }

    #[test]
    fn selecting_another_entry_moves_the_open_slot() {
        let mut faq = Accordion::new(4);
        faq.select(0).unwrap();
        faq.select(2).unwrap();
        assert!(faq.is_open(2));
        assert!(!faq.is_open(0));
    }

    #[test]
    fn out_of_range_is_rejected_without_side_effects() {
        let mut faq = Accordion::new(4);
        faq.select(3).unwrap();
        assert_eq!(
            faq.select(4),
            Err(MotionError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(faq.open(), Some(3));
    }

    #[test]
    fn panel_style_tracks_open_state() {
        let open = panel_style(true);
        let closed = panel_style(false);
        assert!(open.contains("grid-template-rows: 1fr; opacity: 1;"));
        assert!(closed.contains("grid-template-rows: 0fr; opacity: 0;"));
        assert!(closed.contains("0.3s cubic-bezier(0.16, 1, 0.3, 1)"));
    }

    #[test]
    fn collapse_closes_everything() {
        let mut faq = Accordion::new(2);
        faq.select(0).unwrap();
        faq.collapse();
        assert_eq!(faq.open(), None);
    }
}
