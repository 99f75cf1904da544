//! Calibrating a device from a list of frequency changes.
//!
//! The resulting frequency is just the sum of the changes. Calibration proper
//! needs the first frequency the device reaches twice when it applies the
//! changes over and over; see `analyzer::first_repeat`.

use std::collections::HashSet;
use std::hash::Hash;

pub mod analyzer;
pub mod config;
pub mod error;
pub mod loader;
pub mod totals;

pub trait IteratorExt: Iterator {
    fn first_repeated(self) -> Option<Self::Item>
    where
        Self::Item: Hash + Eq + Clone;
}

impl<I: Iterator> IteratorExt for I {
    /// Return the first item of `self` that is equal to some earlier item, or
    /// `None` if `self` runs out first.
    fn first_repeated(self) -> Option<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
    {
        let mut seen = HashSet::new();
        for item in self {
            if !seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }
}

#[test]
fn test_first_repeated() {
    assert_eq!(vec![1, 0, 1].into_iter().first_repeated(), Some(1));
    assert_eq!(vec![3, 1, 4, 1, 5, 9, 3].into_iter().first_repeated(), Some(1));
    assert_eq!("abcb".chars().first_repeated(), Some('b'));
    assert_eq!(vec![1, 2, 3].into_iter().first_repeated(), None);
    assert_eq!(Vec::<i64>::new().into_iter().first_repeated(), None);
}
