//! Per-character entrance for display headlines.

use crate::easing::{EASE_OUT_EXPO_LIKE, Easing};
use crate::variants::{Stagger, VariantSpec};

/// Each letter rises 80px while tipping back from -60deg.
pub const LETTER: VariantSpec = VariantSpec::fade_up(80.0, 0.6, 0.0)
    .with_rotate_x(-60.0)
    .with_easing(Easing::Bezier(EASE_OUT_EXPO_LIKE));

pub const LETTER_STAGGER: Stagger = Stagger::new(0.04, 0.3);

/// Split `text` into characters paired with their start delay in seconds.
pub fn schedule(text: &str, stagger: &Stagger) -> Vec<(char, f64)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| (c, stagger.delay_for(i, &LETTER, 0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_char_in_order() {
        let letters = schedule("ASPIRE", &LETTER_STAGGER);
        let chars: String = letters.iter().map(|(c, _)| *c).collect();
        assert_eq!(chars, "ASPIRE");
    }

    #[test]
    fn delays_grow_by_stagger_step() {
        let letters = schedule("ASPIRE", &LETTER_STAGGER);
        assert!((letters[0].1 - 0.3).abs() < 1e-9);
        assert!((letters[5].1 - 0.5).abs() < 1e-9);
        assert!(letters.windows(2).all(|w| w[1].1 > w[0].1));
    }

    #[test]
    fn multibyte_text_is_split_by_char() {
        assert_eq!(schedule("été", &LETTER_STAGGER).len(), 3);
        assert!(schedule("", &LETTER_STAGGER).is_empty());
    }
}
