//! Charset filter: drop candidates outside a representable character set.
//!
//! The membership test itself belongs to the host (a charset table, an
//! encoder probe); this filter wraps it with a per-character memo that
//! lives for the whole session, since the same few thousand characters are
//! tested over and over across key events.

use crate::candidate::Candidate;
use ahash::AHashMap;
use std::cell::RefCell;

/// Candidate filter retaining only text representable in a target charset.
pub struct CharsetFilter {
    in_charset: Box<dyn Fn(char) -> bool>,
    // Session-lifetime memo; recomputation on a miss is idempotent and the
    // host guarantees single-threaded access.
    memo: RefCell<AHashMap<char, bool>>,
}

impl CharsetFilter {
    pub fn new<F>(in_charset: F) -> Self
    where
        F: Fn(char) -> bool + 'static,
    {
        CharsetFilter {
            in_charset: Box::new(in_charset),
            memo: RefCell::new(AHashMap::new()),
        }
    }

    /// Lazily retain candidates whose every character is representable.
    pub fn apply<'a, I>(&'a self, candidates: I) -> impl Iterator<Item = Candidate> + 'a
    where
        I: Iterator<Item = Candidate> + 'a,
    {
        candidates.filter(move |c| self.representable(&c.text))
    }

    /// Membership test for a whole string, memoized per character.
    pub fn representable(&self, text: &str) -> bool {
        let mut memo = self.memo.borrow_mut();
        text.chars()
            .all(|ch| *memo.entry(ch).or_insert_with(|| (self.in_charset)(ch)))
    }

    /// Drop the memo at session teardown.
    pub fn reset(&mut self) {
        self.memo.borrow_mut().clear();
    }

    #[cfg(test)]
    fn memo_len(&self) -> usize {
        self.memo.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_filters_unrepresentable() {
        // Stand-in for a real charset probe: BMP-only
        let filter = CharsetFilter::new(|ch| (ch as u32) < 0x10000);
        let cands = vec![
            Candidate::new("table", 0, 2, "你好"),
            Candidate::new("table", 0, 2, "𠮷野"),
            Candidate::new("table", 0, 2, "野"),
        ];
        let kept: Vec<_> = filter.apply(cands.into_iter()).map(|c| c.text).collect();
        assert_eq!(kept, ["你好", "野"]);
    }

    #[test]
    fn test_memo_hits() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = calls.clone();
        let filter = CharsetFilter::new(move |_| {
            counter.set(counter.get() + 1);
            true
        });

        assert!(filter.representable("好好好"));
        assert_eq!(calls.get(), 1);
        assert!(filter.representable("好"));
        assert_eq!(calls.get(), 1);
        assert_eq!(filter.memo_len(), 1);
    }

    #[test]
    fn test_reset_clears_memo() {
        let mut filter = CharsetFilter::new(|_| true);
        assert!(filter.representable("你好"));
        assert_eq!(filter.memo_len(), 2);
        filter.reset();
        assert_eq!(filter.memo_len(), 0);
    }
}
