//! Shorthand expansion: shift+letter templates over the selection.
//!
//! A small fixed set of shift+letter combos expands the currently selected
//! candidate into a common phrase pattern ("好" + shift+B commits "好不好")
//! and ends the composition. Templates that contain script-dependent
//! characters follow the session's traditional-script option. The
//! interceptor is appended to the chain only when enabled by
//! configuration.

use crate::context::EditContext;
use crate::key_event::KeyEvent;
use crate::processor::{KeyProcessor, ProcessResult};
use tracing::debug;

/// Session option consulted by script-dependent templates.
const TRADITIONAL_OPTION: &str = "traditional";

type Template = fn(char, bool) -> String;

fn affirm_negate(x: char, _traditional: bool) -> String {
    format!("{x}不{x}")
}

fn past_negate(x: char, traditional: bool) -> String {
    if traditional {
        format!("{x}沒{x}")
    } else {
        format!("{x}没{x}")
    }
}

fn question(x: char, traditional: bool) -> String {
    if traditional {
        format!("{x}什麼")
    } else {
        format!("{x}什么")
    }
}

/// Shift+letter bindings, keyed by the shifted (uppercase) letter.
const TEMPLATES: &[(char, Template)] = &[
    ('B', affirm_negate),
    ('M', past_negate),
    ('S', question),
];

/// The shorthand-expansion interceptor.
#[derive(Default)]
pub struct Shorthand;

impl Shorthand {
    pub fn new() -> Self {
        Shorthand
    }

    /// The shifted letters this interceptor binds; earlier interceptors
    /// leave these alone when shorthand is enabled.
    pub fn bound_keys() -> impl Iterator<Item = char> {
        TEMPLATES.iter().map(|(key, _)| *key)
    }

    fn template(ch: char) -> Option<Template> {
        TEMPLATES
            .iter()
            .find(|(key, _)| *key == ch.to_ascii_uppercase())
            .map(|(_, template)| *template)
    }
}

impl KeyProcessor for Shorthand {
    fn name(&self) -> &'static str {
        "shorthand"
    }

    fn process_key(&mut self, key: &KeyEvent, ctx: &mut EditContext) -> ProcessResult {
        if key.ctrl || !key.shift || !key.is_letter() {
            return ProcessResult::Declined;
        }
        let Some(template) = Self::template(key.ch) else {
            return ProcessResult::Declined;
        };
        let selected = ctx
            .composition
            .last()
            .and_then(|seg| seg.selected.as_ref())
            .or_else(|| ctx.menu.selected_candidate());
        let Some(head) = selected.and_then(|c| c.text.chars().next()) else {
            return ProcessResult::Declined;
        };

        let expanded = template(head, ctx.option(TRADITIONAL_OPTION));
        debug!(expanded = %expanded, "shorthand committed");
        ctx.commit(&expanded);
        ctx.clear();
        ProcessResult::Accepted
    }
}
