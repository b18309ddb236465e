//! Candidate types for IME text conversion.
//!
//! This module provides:
//! - `Candidate`: a single conversion candidate with display text, preedit
//!   and host metadata
//! - `CandidateList`: paginated list with cursor navigation

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single conversion candidate.
///
/// Candidates are value-like: filters that rewrite a candidate construct a
/// fresh one via [`Candidate::rebuilt`] instead of patching a value they
/// received, so an upstream producer never observes partial edits.
///
/// `text` is what the menu displays; `preedit`, when set, is the exact
/// composition-area string to echo while this candidate is highlighted.
/// `quality` is a ranking hint consumed by the UI, not by anything here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Producer-assigned kind, e.g. "table", "completion", "simplified"
    pub kind: String,
    /// Start of the input span this candidate converts (byte offset)
    pub start: usize,
    /// End of the input span (byte offset, exclusive)
    pub end: usize,
    /// Display text
    pub text: String,
    /// Annotation shown next to the text (may be empty)
    pub comment: String,
    /// Composition-area echo for this candidate, if any
    pub preedit: Option<String>,
    /// Ranking hint (higher is better)
    pub quality: Option<f64>,
}

impl Candidate {
    pub fn new<T: Into<String>>(kind: &str, start: usize, end: usize, text: T) -> Self {
        Candidate {
            kind: kind.to_string(),
            start,
            end,
            text: text.into(),
            comment: String::new(),
            preedit: None,
            quality: None,
        }
    }

    /// Builder-style comment setter.
    pub fn with_comment<T: Into<String>>(mut self, comment: T) -> Self {
        self.comment = comment.into();
        self
    }

    /// Builder-style quality setter.
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Builder-style preedit setter.
    pub fn with_preedit<T: Into<String>>(mut self, preedit: T) -> Self {
        self.preedit = Some(preedit.into());
        self
    }

    /// Construct a fresh candidate from `src` with corrected `text` and an
    /// explicit `preedit`.
    ///
    /// Copies `kind` (defaulting to "completion" when the source left it
    /// empty), the input span and the comment; `quality` is carried over
    /// whenever the source has one. The source is never mutated.
    pub fn rebuilt<T: Into<String>, P: Into<String>>(src: &Candidate, text: T, preedit: P) -> Self {
        let kind = if src.kind.is_empty() {
            "completion".to_string()
        } else {
            src.kind.clone()
        };
        Candidate {
            kind,
            start: src.start,
            end: src.end,
            text: text.into(),
            comment: src.comment.clone(),
            preedit: Some(preedit.into()),
            quality: src.quality,
        }
    }
}

/// A paginated list of candidates with cursor navigation.
#[derive(Debug, Clone)]
pub struct CandidateList {
    /// All available candidates
    candidates: Vec<Candidate>,

    /// Number of candidates per page
    page_size: usize,

    /// Current page index (0-based)
    current_page: usize,

    /// Cursor position within the current page (0-based)
    cursor: usize,
}

impl CandidateList {
    /// Create a new empty candidate list.
    pub fn new() -> Self {
        Self::with_page_size(5)
    }

    /// Create a candidate list with specified page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            candidates: Vec::new(),
            page_size: page_size.max(1), // Ensure at least 1
            current_page: 0,
            cursor: 0,
        }
    }

    /// Create a candidate list from a vector of candidates.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            page_size: 5,
            current_page: 0,
            cursor: 0,
        }
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the candidates, resetting pagination state.
    pub fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.current_page = 0;
        self.cursor = 0;
    }

    /// Get all candidates.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Get the total number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get the total number of pages.
    pub fn num_pages(&self) -> usize {
        if self.candidates.is_empty() {
            0
        } else {
            self.candidates.len().div_ceil(self.page_size)
        }
    }

    /// Get the current page index (0-based).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Get the cursor position within the current page (0-based).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the number of candidates on the current page.
    pub fn current_page_len(&self) -> usize {
        let range = self.current_page_range();
        range.end - range.start
    }

    /// Get the range of candidates for the current page.
    fn current_page_range(&self) -> Range<usize> {
        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.candidates.len());
        start..end.max(start)
    }

    /// Get the candidates for the current page.
    pub fn current_page_candidates(&self) -> &[Candidate] {
        if self.candidates.is_empty() {
            return &[];
        }
        &self.candidates[self.current_page_range()]
    }

    /// Get the currently selected candidate (under cursor).
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.current_page_candidates().get(self.cursor)
    }

    /// Get the global index of the currently selected candidate.
    pub fn selected_index(&self) -> Option<usize> {
        let global_index = self.current_page * self.page_size + self.cursor;
        (global_index < self.candidates.len()).then_some(global_index)
    }

    /// Move to the previous page. Returns true if the page changed.
    pub fn page_up(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            self.clamp_cursor();
            true
        } else {
            false
        }
    }

    /// Move to the next page. Returns true if the page changed.
    pub fn page_down(&mut self) -> bool {
        let num_pages = self.num_pages();
        if num_pages > 0 && self.current_page < num_pages - 1 {
            self.current_page += 1;
            self.clamp_cursor();
            true
        } else {
            false
        }
    }

    fn clamp_cursor(&mut self) {
        let page_len = self.current_page_len();
        if page_len > 0 && self.cursor >= page_len {
            self.cursor = page_len - 1;
        }
    }

    /// Select a candidate by index within the current page.
    /// Returns the selected candidate if the index is valid.
    pub fn select_by_index(&mut self, page_index: usize) -> Option<&Candidate> {
        if page_index < self.current_page_len() {
            self.cursor = page_index;
            self.selected_candidate()
        } else {
            None
        }
    }

    /// Clear the candidate list.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.current_page = 0;
        self.cursor = 0;
    }

    /// Reset pagination state (go to first page, first candidate).
    pub fn reset(&mut self) {
        self.current_page = 0;
        self.cursor = 0;
    }
}

impl Default for CandidateList {
    fn default() -> Self {
        Self::new()
    }
}
