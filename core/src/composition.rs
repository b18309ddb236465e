//! Composition segments over the raw input buffer.
//!
//! A composition is the ordered list of segments covering everything
//! currently typed and uncommitted. Each segment spans a contiguous byte
//! range of the input buffer, carries classification tags assigned by the
//! segmentor ("english", "abc", ...) and tracks its selection state. The
//! last segment is the active one undergoing lookup and editing.

use crate::candidate::Candidate;
use ahash::AHashSet;
use std::ops::Range;

/// Selection state of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SegmentStatus {
    /// Candidates looked up, nothing chosen yet
    #[default]
    Guess,
    /// User highlighted a candidate
    Selected,
    /// Selection locked in
    Confirmed,
}

/// Whether a neighboring segment has lent its trailing auxiliary letter to
/// the active segment.
///
/// Modeled as an explicit two-state toggle so a second steal without an
/// intervening return is unrepresentable: the pair is either in its typed
/// form or in the stolen form, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StealState {
    #[default]
    Normal,
    Stolen,
}

/// A contiguous span of the input buffer corresponding to one syllable or
/// word unit, with its own selection state.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    /// Byte range in the input buffer
    pub range: Range<usize>,
    /// Selection state
    pub status: SegmentStatus,
    /// Classification tags assigned by the segmentor
    pub tags: AHashSet<String>,
    /// Page-relative index of the selection; valid once status >= Selected
    pub selected_index: usize,
    /// The chosen candidate, populated once status >= Selected
    pub selected: Option<Candidate>,
    /// Auxiliary-letter lending state toward the following segment
    pub steal: StealState,
}

impl Segment {
    pub fn new(range: Range<usize>) -> Self {
        Segment {
            range,
            ..Default::default()
        }
    }

    /// Builder-style tag setter.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_string());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Record a selection made on this segment.
    pub fn select(&mut self, page_index: usize, candidate: Candidate) {
        self.selected_index = page_index;
        self.selected = Some(candidate);
        if self.status < SegmentStatus::Selected {
            self.status = SegmentStatus::Selected;
        }
    }

    /// The segment's slice of the given input text.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.range.clone()]
    }
}

/// Ordered segments covering the input buffer.
#[derive(Debug, Clone, Default)]
pub struct Composition {
    segments: Vec<Segment>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// The active (last) segment.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Segment> {
        self.segments.last_mut()
    }

    /// Mutable access to the segment preceding the active one, paired with
    /// the active segment itself. Used by the steal/return toggle.
    pub fn last_pair_mut(&mut self) -> Option<(&mut Segment, &mut Segment)> {
        let n = self.segments.len();
        if n < 2 {
            return None;
        }
        let (head, tail) = self.segments.split_at_mut(n - 1);
        Some((&mut head[n - 2], &mut tail[0]))
    }
}
