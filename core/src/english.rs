//! English candidate case-normalization filter.
//!
//! The English translator is fuzzy and case-insensitive: typing "Apr"
//! yields "april", "apron", ... in whatever case the table stores. This
//! filter rewrites each candidate to follow the typed capitalization,
//! deduplicates across the primary stream and an optional lowercase
//! fallback query, and repairs the preedit echoed for each candidate.
//!
//! The whole pass is a forward-only iterator adapter: nothing is buffered,
//! order is preserved, and the fallback query is issued only once the
//! primary stream is exhausted.

use crate::candidate::Candidate;
use crate::casefix::{casefold_ascii, fix_case, has_uppercase, is_word_shape, starts_non_ascii};
use crate::composition::Segment;
use crate::error::SetupError;
use crate::translator::{try_create, Translator};
use ahash::AHashSet;
use tracing::debug;

/// Candidate filter normalizing English candidate case to the typed form.
pub struct EnglishFilter {
    /// Segment tag marking English lookups
    english_tag: String,
    /// Lowercase-query translator; None when construction failed at setup
    secondary: Option<Box<dyn Translator>>,
}

impl EnglishFilter {
    pub fn new<T: Into<String>>(english_tag: T) -> Self {
        EnglishFilter {
            english_tag: english_tag.into(),
            secondary: None,
        }
    }

    /// Attach the lowercase fallback translator from a fallible factory.
    ///
    /// On factory failure the fallback pass stays disabled for the session;
    /// everything else is unaffected.
    pub fn with_fallback<F>(mut self, name: &str, factory: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn Translator>, SetupError>,
    {
        self.secondary = try_create(name, factory);
        self
    }

    /// Whether the fallback translator is available this session.
    pub fn fallback_available(&self) -> bool {
        self.secondary.is_some()
    }

    /// Run one filter pass over `primary` for the active `segment`.
    ///
    /// When the segment is not an English lookup, or the typed prefix holds
    /// no uppercase letter, the stream is passed through unchanged.
    pub fn apply<'a>(
        &'a self,
        primary: Box<dyn Iterator<Item = Candidate> + 'a>,
        segment: &'a Segment,
        input: &str,
    ) -> Box<dyn Iterator<Item = Candidate> + 'a> {
        if !segment.has_tag(&self.english_tag) {
            return primary;
        }
        let typed = segment.text(input).to_string();
        if !has_uppercase(&typed) {
            return primary;
        }

        debug!(typed = %typed, "case-fix pass");
        Box::new(CaseFixStream {
            primary,
            fallback: None,
            secondary: self.secondary.as_deref(),
            segment,
            folded: casefold_ascii(&typed),
            typed,
            seen: AHashSet::new(),
            primary_done: false,
        })
    }
}

/// Lazy case-fixing stream over the primary and fallback passes.
struct CaseFixStream<'a> {
    primary: Box<dyn Iterator<Item = Candidate> + 'a>,
    fallback: Option<Box<dyn Iterator<Item = Candidate> + 'a>>,
    secondary: Option<&'a dyn Translator>,
    segment: &'a Segment,
    typed: String,
    folded: String,
    seen: AHashSet<String>,
    primary_done: bool,
}

impl CaseFixStream<'_> {
    /// Apply the per-candidate policy: bypass-and-dedup for non-word
    /// shapes, case-fix-rebuild-and-dedup for everything else.
    fn admit(&mut self, candidate: Candidate) -> Option<Candidate> {
        if starts_non_ascii(&candidate.text) || !is_word_shape(&candidate.text) {
            let key = format!("raw:{}", candidate.text);
            return self.seen.insert(key).then_some(candidate);
        }

        let fixed = fix_case(&candidate.text, &self.typed);
        let key = format!("eng:{fixed}");
        if !self.seen.insert(key) {
            return None;
        }
        Some(Candidate::rebuilt(&candidate, fixed, self.typed.clone()))
    }

    /// Open the fallback stream once the primary is exhausted, if the
    /// gating conditions hold: the typed prefix actually changes under
    /// casefolding and the secondary translator exists.
    fn open_fallback(&mut self) {
        self.primary_done = true;
        if self.folded == self.typed {
            return;
        }
        if let Some(secondary) = self.secondary {
            debug!(folded = %self.folded, "lowercase fallback query");
            self.fallback = Some(secondary.query(&self.folded, self.segment));
        }
    }
}

impl Iterator for CaseFixStream<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if !self.primary_done {
            while let Some(candidate) = self.primary.next() {
                if let Some(out) = self.admit(candidate) {
                    return Some(out);
                }
            }
            self.open_fallback();
        }
        while let Some(candidate) = self.fallback.as_mut()?.next() {
            if let Some(out) = self.admit(candidate) {
                return Some(out);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_segment(len: usize) -> Segment {
        Segment::new(0..len).with_tag("english")
    }

    fn stream(texts: &[&str]) -> Box<dyn Iterator<Item = Candidate>> {
        let cands: Vec<_> = texts
            .iter()
            .map(|t| Candidate::new("table", 0, 3, *t))
            .collect();
        Box::new(cands.into_iter())
    }

    #[test]
    fn test_identity_without_english_tag() {
        let filter = EnglishFilter::new("english");
        let seg = Segment::new(0..3);
        let out: Vec<_> = filter
            .apply(stream(&["april", "april"]), &seg, "Apr")
            .map(|c| c.text)
            .collect();
        // Identity pass: no case fix, no dedup
        assert_eq!(out, ["april", "april"]);
    }

    #[test]
    fn test_identity_without_uppercase() {
        let filter = EnglishFilter::new("english");
        let seg = english_segment(3);
        let out: Vec<_> = filter
            .apply(stream(&["april"]), &seg, "apr")
            .map(|c| c.text)
            .collect();
        assert_eq!(out, ["april"]);
    }

    #[test]
    fn test_case_fix_and_preedit_repair() {
        let filter = EnglishFilter::new("english");
        let seg = english_segment(3);
        let out: Vec<_> = filter.apply(stream(&["april"]), &seg, "Apr").collect();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "April");
        assert_eq!(out[0].preedit.as_deref(), Some("Apr"));
    }

    #[test]
    fn test_dedup_after_fixing() {
        let filter = EnglishFilter::new("english");
        let seg = english_segment(3);
        // "April" and "april" collapse to one entry once fixed
        let out: Vec<_> = filter
            .apply(stream(&["April", "april", "apron"]), &seg, "Apr")
            .map(|c| c.text)
            .collect();
        assert_eq!(out, ["April", "Apron"]);
    }

    #[test]
    fn test_non_ascii_bypass() {
        let filter = EnglishFilter::new("english");
        let seg = english_segment(3);
        let out: Vec<_> = filter
            .apply(stream(&["你好", "你好", "april"]), &seg, "Apr")
            .map(|c| c.text)
            .collect();
        // Bypassed text stays verbatim and dedups only against itself
        assert_eq!(out, ["你好", "April"]);
    }

    #[test]
    fn test_order_preserved() {
        let filter = EnglishFilter::new("english");
        let seg = english_segment(3);
        let out: Vec<_> = filter
            .apply(stream(&["apt", "april", "apron"]), &seg, "APR")
            .map(|c| c.text)
            .collect();
        assert_eq!(out, ["APT", "APRil", "APRon"]);
    }
}
