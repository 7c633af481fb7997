//! FAQ accordion selection sequences.

use aspire_motion::accordion::Accordion;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn open_entries(faq: &Accordion) -> Vec<usize> {
    (0..faq.len()).filter(|i| faq.is_open(*i)).collect()
}

#[test]
fn select_one_twice_leaves_nothing_open() {
    let mut faq = Accordion::new(4);
    faq.select(1).unwrap();
    faq.select(1).unwrap();
    assert_eq!(open_entries(&faq), Vec::<usize>::new());
}

#[test]
fn select_zero_then_two_leaves_only_two_open() {
    let mut faq = Accordion::new(4);
    faq.select(0).unwrap();
    faq.select(2).unwrap();
    assert_eq!(open_entries(&faq), vec![2]);
}

#[test]
fn empty_accordion_rejects_everything() {
    let mut faq = Accordion::new(0);
    assert!(faq.is_empty());
    assert!(faq.select(0).is_err());
}

proptest! {
    #[test]
    fn at_most_one_entry_is_ever_open(
        len in 1usize..12,
        picks in proptest::collection::vec(0usize..16, 0..64)
    ) {
        let mut faq = Accordion::new(len);
        for pick in picks {
            let before = faq.open();
            match faq.select(pick) {
                Ok(now) => {
                    prop_assert_eq!(now, faq.open());
                    if before == Some(pick) {
                        prop_assert_eq!(now, None);
                    } else {
                        prop_assert_eq!(now, Some(pick));
                    }
                }
                Err(_) => {
                    prop_assert!(pick >= len);
                    prop_assert_eq!(faq.open(), before);
                }
            }
            prop_assert!(open_entries(&faq).len() <= 1);
        }
    }

    #[test]
    fn switching_entries_keeps_only_the_last(
        (len, i, j) in (2usize..12).prop_flat_map(|len| (Just(len), 0..len, 0..len))
    ) {
        prop_assume!(i != j);
        let mut faq = Accordion::new(len);
        faq.select(i).unwrap();
        faq.select(j).unwrap();
        prop_assert_eq!(open_entries(&faq), vec![j]);
    }
}
