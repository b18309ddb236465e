//! Shift-driven letter append into a mid-buffer position.
//!
//! Holding shift while typing a letter appends it to the syllable under
//! edit rather than starting a new one. The insertion point comes from the
//! split visible in the selected candidate's preedit when there is one,
//! falling back to the buffer's own last delimiter, then to the end.
//!
//! Whether the letter keeps its shifted case depends on the literal first
//! character of the whole buffer, not on any segment classification tag:
//! the tag can mark lowercase Chinese-code prefixes as English, while the
//! buffer prefix cannot lie about what was typed.

use crate::context::EditContext;
use crate::input_buffer::DELIMITERS;
use crate::key_event::KeyEvent;
use crate::processor::{KeyProcessor, ProcessResult};
use tracing::debug;

/// The shift-append interceptor.
#[derive(Default)]
pub struct ShiftAppend {
    /// Shifted letters claimed by interceptors further down the chain
    reserved: Vec<char>,
}

impl ShiftAppend {
    pub fn new() -> Self {
        ShiftAppend::default()
    }

    /// Leave the given shifted letters to a later interceptor.
    pub fn with_reserved<I: IntoIterator<Item = char>>(keys: I) -> Self {
        ShiftAppend {
            reserved: keys.into_iter().map(|c| c.to_ascii_uppercase()).collect(),
        }
    }

    /// Insertion point for the appended letter.
    fn insertion_point(ctx: &EditContext) -> usize {
        let from_preedit = ctx.composition.last().and_then(|seg| {
            let preedit = seg.selected.as_ref()?.preedit.as_deref()?;
            let delim = preedit.rfind(DELIMITERS)?;
            let letters = preedit[..delim]
                .chars()
                .filter(char::is_ascii_alphabetic)
                .count();
            Some(seg.range.start + letters)
        });
        from_preedit
            .or_else(|| ctx.input.last_delimiter())
            .unwrap_or_else(|| ctx.input.len())
            .min(ctx.input.len())
    }
}

impl KeyProcessor for ShiftAppend {
    fn name(&self) -> &'static str {
        "shift_append"
    }

    fn process_key(&mut self, key: &KeyEvent, ctx: &mut EditContext) -> ProcessResult {
        // Ctrl combos belong to the other interceptors
        if key.ctrl || !key.is_letter() {
            return ProcessResult::Declined;
        }
        if key.ch.is_ascii_lowercase() && !key.shift {
            return ProcessResult::Declined;
        }
        if key.shift && self.reserved.contains(&key.ch.to_ascii_uppercase()) {
            return ProcessResult::Declined;
        }
        if ctx.input.is_empty() {
            return ProcessResult::Declined;
        }

        let uppercase_prefix = ctx
            .input
            .first_char()
            .is_some_and(|c| c.is_ascii_uppercase());
        let ch = if uppercase_prefix && key.shift {
            key.ch.to_ascii_uppercase()
        } else {
            key.ch.to_ascii_lowercase()
        };

        let at = Self::insertion_point(ctx);
        debug!(ch = %ch, at, "letter appended");
        ctx.input.insert_char_at(at, ch);
        ProcessResult::Accepted
    }
}
