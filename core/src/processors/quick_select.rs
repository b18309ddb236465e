//! Quick-select: one key that picks the most useful candidate directly.
//!
//! The trigger key doubles as a literal input character in some code
//! prefixes, so those prefixes are excluded from interception and the key
//! falls through to normal typing there. Everywhere else it jumps straight
//! to the best non-decorative choice, skipping candidates injected ahead
//! of the real conversions (emoji and similar).

use crate::config::Config;
use crate::context::EditContext;
use crate::key_event::KeyEvent;
use crate::processor::{KeyProcessor, ProcessResult};

/// True for CJK unified ideographs (base block plus extension A and the
/// compatibility block).
fn is_cjk(ch: char) -> bool {
    matches!(u32::from(ch),
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF)
}

/// The quick-select interceptor.
pub struct QuickSelect {
    key: char,
    literal_prefixes: Vec<String>,
}

impl QuickSelect {
    pub fn from_config(config: &Config) -> Self {
        QuickSelect {
            key: config.quick_select_key,
            literal_prefixes: config.quick_select_literal_prefixes.clone(),
        }
    }

    /// Whether a page candidate is a plausible quick pick: leading CJK
    /// ideograph, ASCII letter, or digit on a candidate that is not a
    /// simplified-script injection.
    fn pickable(candidate: &crate::candidate::Candidate) -> bool {
        let Some(first) = candidate.text.chars().next() else {
            return false;
        };
        is_cjk(first)
            || first.is_ascii_alphabetic()
            || (first.is_ascii_digit() && candidate.kind != "simplified")
    }
}

impl KeyProcessor for QuickSelect {
    fn name(&self) -> &'static str {
        "quick_select"
    }

    fn process_key(&mut self, key: &KeyEvent, ctx: &mut EditContext) -> ProcessResult {
        if key.ch != self.key || !key.plain() {
            return ProcessResult::Declined;
        }
        if ctx.composition.is_empty() || ctx.menu.is_empty() {
            return ProcessResult::Declined;
        }
        // In these prefixes the key is ordinary input, not a shortcut
        let active = ctx.active_segment_text();
        if self.literal_prefixes.iter().any(|p| active.starts_with(p)) {
            return ProcessResult::Declined;
        }

        if ctx.menu.len() == 1 {
            ctx.select(0);
            return ProcessResult::Accepted;
        }

        if ctx.menu.current_page() > 0 {
            // Off the first page: land on the head of the current page
            ctx.select(0);
            return ProcessResult::Accepted;
        }

        let page = ctx.menu.current_page_candidates();
        let pick = page
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, c)| Self::pickable(c))
            .map(|(i, _)| i)
            .unwrap_or_else(|| 1.min(page.len().saturating_sub(1)));
        ctx.select(pick);
        ProcessResult::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::composition::Segment;
    use crate::input_buffer::InputBuffer;

    fn quick_select() -> QuickSelect {
        QuickSelect::from_config(&Config::default())
    }

    fn ctx_with(candidates: Vec<Candidate>, input: &str) -> EditContext {
        let mut ctx = EditContext::new();
        ctx.input = InputBuffer::from_text(input);
        ctx.composition.push(Segment::new(0..input.len()));
        ctx.menu.set_candidates(candidates);
        ctx
    }

    #[test]
    fn test_skips_decorative_first_slot() {
        let mut ctx = ctx_with(
            vec![
                Candidate::new("emoji", 0, 2, "😀"),
                Candidate::new("table", 0, 2, "你"),
                Candidate::new("table", 0, 2, "尼"),
            ],
            "ni",
        );
        let result = quick_select().process_key(&KeyEvent::press('/'), &mut ctx);
        assert_eq!(result, ProcessResult::Accepted);
        assert_eq!(
            ctx.composition.last().unwrap().selected.as_ref().unwrap().text,
            "你"
        );
    }

    #[test]
    fn test_single_candidate_selected() {
        let mut ctx = ctx_with(vec![Candidate::new("table", 0, 2, "你")], "ni");
        let result = quick_select().process_key(&KeyEvent::press('/'), &mut ctx);
        assert_eq!(result, ProcessResult::Accepted);
        assert_eq!(ctx.composition.last().unwrap().selected_index, 0);
    }

    #[test]
    fn test_off_first_page_jumps_to_page_head() {
        let cands: Vec<_> = (0..8)
            .map(|i| Candidate::new("table", 0, 2, format!("字{i}")))
            .collect();
        let mut ctx = ctx_with(cands, "ni");
        ctx.menu.page_down();
        let result = quick_select().process_key(&KeyEvent::press('/'), &mut ctx);
        assert_eq!(result, ProcessResult::Accepted);
        // Page-relative head of the second page
        assert_eq!(ctx.composition.last().unwrap().selected_index, 0);
        assert_eq!(ctx.menu.current_page(), 1);
    }

    #[test]
    fn test_simplified_digit_candidate_skipped() {
        let mut ctx = ctx_with(
            vec![
                Candidate::new("emoji", 0, 2, "☺"),
                Candidate::new("simplified", 0, 2, "2simp"),
                Candidate::new("table", 0, 2, "好"),
            ],
            "ha",
        );
        quick_select().process_key(&KeyEvent::press('/'), &mut ctx);
        assert_eq!(
            ctx.composition.last().unwrap().selected.as_ref().unwrap().text,
            "好"
        );
    }

    #[test]
    fn test_nothing_pickable_selects_index_one() {
        let mut ctx = ctx_with(
            vec![
                Candidate::new("emoji", 0, 2, "☺"),
                Candidate::new("emoji", 0, 2, "★"),
                Candidate::new("emoji", 0, 2, "♫"),
            ],
            "ni",
        );
        quick_select().process_key(&KeyEvent::press('/'), &mut ctx);
        assert_eq!(ctx.composition.last().unwrap().selected_index, 1);
    }

    #[test]
    fn test_literal_prefix_excluded() {
        let mut ctx = ctx_with(vec![Candidate::new("table", 0, 3, "某")], "ooo");
        let mut qs = QuickSelect {
            key: '/',
            literal_prefixes: vec!["o".to_string()],
        };
        let result = qs.process_key(&KeyEvent::press('/'), &mut ctx);
        assert_eq!(result, ProcessResult::Declined);
    }

    #[test]
    fn test_wrong_key_or_modifier_declined() {
        let mut ctx = ctx_with(vec![Candidate::new("table", 0, 2, "你")], "ni");
        let mut qs = quick_select();
        assert_eq!(
            qs.process_key(&KeyEvent::press('x'), &mut ctx),
            ProcessResult::Declined
        );
        assert_eq!(
            qs.process_key(&KeyEvent::press('/').with_ctrl(), &mut ctx),
            ProcessResult::Declined
        );
    }
}
