//! Forced re-segmentation of an ambiguous syllable run.
//!
//! The translator sometimes splits a run of letters differently than the
//! user meant. This interceptor materializes an explicit split into the
//! buffer: it reads the active segment's raw slice and the split visible in
//! its selected candidate's preedit, matches them against a fixed table of
//! syllable-count shapes, and inserts delimiters at the implied boundaries
//! so the translator re-splits. A fixed table, not a parser: no match
//! means decline, never guess.

use crate::config::Config;
use crate::context::EditContext;
use crate::input_buffer::DELIMITERS;
use crate::key_event::KeyEvent;
use crate::processor::{KeyProcessor, ProcessResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Letter groupings a forced split may produce.
const SHAPES: &[&[usize]] = &[
    &[2, 2],
    &[2, 3],
    &[3, 2],
    &[3, 3],
    &[2, 2, 2],
    &[2, 2, 3],
    &[2, 3, 2],
    &[3, 2, 2],
];

// The one shape with a reverse transform: XX'XX back to the bare run.
static REVERSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]{2})['\s]([a-z]{2})$").unwrap());

// A bare 4-letter block, optionally carrying a trailing marker.
static FOUR_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]{2})([a-z]{2})(['\s]?)$").unwrap());

static BARE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").unwrap());

/// The forced re-segmentation interceptor.
pub struct Resegment {
    key: char,
}

impl Resegment {
    pub fn from_config(config: &Config) -> Self {
        Resegment {
            key: config.resegment_key,
        }
    }

    /// Letter-count groups of the split shown in a preedit string.
    fn preedit_shape(preedit: &str) -> Vec<usize> {
        preedit
            .split(DELIMITERS)
            .map(|group| group.chars().filter(char::is_ascii_alphabetic).count())
            .filter(|n| *n > 0)
            .collect()
    }

    /// Join `raw` into delimiter-separated groups per `shape`.
    fn delimit(raw: &str, shape: &[usize]) -> String {
        let mut out = String::with_capacity(raw.len() + shape.len());
        let mut rest = raw;
        for (i, n) in shape.iter().enumerate() {
            if i > 0 {
                out.push('\'');
            }
            let (group, tail) = rest.split_at(*n);
            out.push_str(group);
            rest = tail;
        }
        out
    }

    /// Apply the rule table to the active segment's raw slice; None when
    /// nothing matches.
    fn rewrite(raw: &str, preedit: Option<&str>) -> Option<String> {
        // Reverse transform first: it is the only rule whose input already
        // contains a delimiter.
        if let Some(caps) = REVERSE.captures(raw) {
            return Some(format!("{}{}", &caps[1], &caps[2]));
        }
        if BARE_RUN.is_match(raw) {
            if let Some(preedit) = preedit {
                let shape = Self::preedit_shape(preedit);
                if shape.len() > 1
                    && shape.iter().sum::<usize>() == raw.len()
                    && SHAPES.iter().any(|s| *s == shape.as_slice())
                {
                    return Some(Self::delimit(raw, &shape));
                }
            }
        }
        if let Some(caps) = FOUR_BLOCK.captures(raw) {
            return Some(format!("{}'{}{}", &caps[1], &caps[2], &caps[3]));
        }
        None
    }
}

impl KeyProcessor for Resegment {
    fn name(&self) -> &'static str {
        "resegment"
    }

    fn process_key(&mut self, key: &KeyEvent, ctx: &mut EditContext) -> ProcessResult {
        if !key.ctrl || key.shift || key.ch != self.key {
            return ProcessResult::Declined;
        }
        let Some(segment) = ctx.composition.last() else {
            return ProcessResult::Declined;
        };

        let range = segment.range.clone();
        let raw = segment.text(ctx.input.text()).to_string();
        let preedit = segment
            .selected
            .as_ref()
            .and_then(|c| c.preedit.clone());

        let Some(rewritten) = Self::rewrite(&raw, preedit.as_deref()) else {
            return ProcessResult::Declined;
        };
        debug!(from = %raw, to = %rewritten, "forced split");
        ctx.input.replace_range(range, &rewritten);
        ProcessResult::Accepted
    }
}
