//! Editing context handed to key processors and filters.
//!
//! The `EditContext` bundles the per-session mutable state the host engine
//! shares with this crate: the raw input buffer, the segmentation over it,
//! the active segment's candidate menu, pending commit text, and named
//! session options. Fields are public where the host reads them directly;
//! the methods cover the operations the interceptors need.

use crate::candidate::CandidateList;
use crate::composition::Composition;
use crate::input_buffer::InputBuffer;
use ahash::AHashMap;

/// Per-session mutable editing state.
#[derive(Debug, Clone, Default)]
pub struct EditContext {
    /// Raw typed input, mutable during one key event
    pub input: InputBuffer,

    /// Segmentation over the input buffer
    pub composition: Composition,

    /// Candidate menu of the active segment
    pub menu: CandidateList,

    /// Text to commit to the application (host consumes and clears)
    pub commit_text: String,

    /// Session-scoped named boolean options (e.g. "traditional")
    options: AHashMap<String, bool>,
}

impl EditContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The input slice covered by the active segment, or the whole buffer
    /// when no segmentation exists yet.
    pub fn active_segment_text(&self) -> &str {
        match self.composition.last() {
            Some(seg) => seg.text(self.input.text()),
            None => self.input.text(),
        }
    }

    /// Select the candidate at a page-relative index of the active menu and
    /// record it on the active segment.
    ///
    /// Returns false when the index is out of the current page.
    pub fn select(&mut self, page_index: usize) -> bool {
        let Some(candidate) = self.menu.select_by_index(page_index).cloned() else {
            return false;
        };
        if let Some(seg) = self.composition.last_mut() {
            seg.select(page_index, candidate);
        }
        true
    }

    /// Append text to the pending commit.
    pub fn commit<T: AsRef<str>>(&mut self, text: T) {
        self.commit_text.push_str(text.as_ref());
    }

    /// Take the pending commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Clear the composition state. Does NOT clear commit_text; the host
    /// consumes it first.
    pub fn clear(&mut self) {
        self.input.clear();
        self.composition.clear();
        self.menu.clear();
    }

    /// Read a session option; unset options read as false.
    pub fn option(&self, name: &str) -> bool {
        self.options.get(name).copied().unwrap_or(false)
    }

    /// Set a session option.
    pub fn set_option(&mut self, name: &str, value: bool) {
        self.options.insert(name.to_string(), value);
    }
}
