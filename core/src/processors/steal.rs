//! Auxiliary-code steal/return between adjacent segments.
//!
//! A trailing auxiliary letter typed after a syllable's core code is
//! sometimes absorbed into the preceding segment's match. This interceptor
//! recovers it: it reads the trailing letter off the preceding segment's
//! selected candidate and splices a copy in front of the active segment,
//! so the active lookup sees the code the user meant. The same keys undo
//! the splice. The pair toggles between exactly two states; stealing twice
//! without a return is not expressible.

use crate::composition::{SegmentStatus, StealState};
use crate::config::Config;
use crate::context::EditContext;
use crate::key_event::KeyEvent;
use crate::processor::{KeyProcessor, ProcessResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// A syllable code of 3 or 4 letters followed by one auxiliary letter.
static TRAILING_AUX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{3,4}([a-z])$").unwrap());

/// The steal/return interceptor. Two keys, one toggle handler.
pub struct Steal {
    keys: Vec<char>,
}

impl Steal {
    pub fn from_config(config: &Config) -> Self {
        Steal {
            keys: config.steal_keys.chars().collect(),
        }
    }
}

impl KeyProcessor for Steal {
    fn name(&self) -> &'static str {
        "steal"
    }

    fn process_key(&mut self, key: &KeyEvent, ctx: &mut EditContext) -> ProcessResult {
        if !key.ctrl || key.shift || !self.keys.contains(&key.ch) {
            return ProcessResult::Declined;
        }
        let Some((prev, active)) = ctx.composition.last_pair_mut() else {
            return ProcessResult::Declined;
        };
        let splice_at = active.range.start;

        if prev.steal == StealState::Stolen {
            // Return: the stolen copy sits directly after the active
            // segment's start.
            ctx.input.remove_char_at(splice_at);
            prev.steal = StealState::Normal;
            debug!(at = splice_at, "auxiliary returned");
            return ProcessResult::Accepted;
        }

        if prev.status < SegmentStatus::Selected {
            return ProcessResult::Declined;
        }
        let Some(aux) = prev
            .selected
            .as_ref()
            .and_then(|c| c.preedit.as_deref())
            .and_then(|p| TRAILING_AUX.captures(p))
            .and_then(|caps| caps[1].chars().next())
        else {
            return ProcessResult::Declined;
        };

        ctx.input.insert_char_at(splice_at, aux);
        prev.steal = StealState::Stolen;
        debug!(aux = %aux, at = splice_at, "auxiliary stolen");
        ProcessResult::Accepted
    }
}
