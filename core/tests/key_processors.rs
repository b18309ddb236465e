// core/tests/key_processors.rs
//
// Integration tests for the composition-editing interceptor chain
// assembled from configuration, driven through realistic editing states.

use libshengbi_core::{
    Candidate, Config, EditContext, InputBuffer, KeyEvent, ProcessResult, ProcessorChain, Segment,
    StealState,
};

fn chain(config: &Config) -> ProcessorChain {
    ProcessorChain::from_config(config)
}

fn ctx_single_segment(input: &str, candidates: Vec<Candidate>) -> EditContext {
    let mut ctx = EditContext::new();
    ctx.input = InputBuffer::from_text(input);
    ctx.composition.push(Segment::new(0..input.len()));
    ctx.menu.set_candidates(candidates);
    ctx
}

#[test]
fn quick_select_skips_decorative_first_candidate() {
    let mut chain = chain(&Config::default());
    let mut ctx = ctx_single_segment(
        "ni",
        vec![
            Candidate::new("emoji", 0, 2, "😀"),
            Candidate::new("table", 0, 2, "你"),
            Candidate::new("table", 0, 2, "尼"),
        ],
    );

    let result = chain.process_key(&KeyEvent::press('/'), &mut ctx);
    assert_eq!(result, ProcessResult::Accepted);
    let selected = ctx.composition.last().unwrap().selected.as_ref().unwrap();
    assert_eq!(selected.text, "你");
}

#[test]
fn quick_select_key_stays_literal_in_excluded_prefix() {
    let mut chain = chain(&Config::default());
    // Default config keeps "/" literal after an "o" prefix
    let mut ctx = ctx_single_segment("o", vec![Candidate::new("table", 0, 1, "哦")]);
    let result = chain.process_key(&KeyEvent::press('/'), &mut ctx);
    assert_eq!(result, ProcessResult::Declined);
}

#[test]
fn resegment_round_trip_through_chain() {
    let mut chain = chain(&Config::default());
    let key = KeyEvent::press('r').with_ctrl();

    let mut ctx = ctx_single_segment("sxlx", vec![]);
    assert_eq!(chain.process_key(&key, &mut ctx), ProcessResult::Accepted);
    assert_eq!(ctx.input.text(), "sx'lx");

    ctx.composition.clear();
    ctx.composition.push(Segment::new(0..5));
    assert_eq!(chain.process_key(&key, &mut ctx), ProcessResult::Accepted);
    assert_eq!(ctx.input.text(), "sxlx");
}

#[test]
fn steal_and_return_restore_buffer() {
    let mut chain = chain(&Config::default());
    let key = KeyEvent::press('j').with_ctrl();

    let mut ctx = EditContext::new();
    ctx.input = InputBuffer::from_text("wangfan");
    let mut prev = Segment::new(0..5);
    prev.select(0, Candidate::new("table", 0, 5, "网").with_preedit("wangf"));
    ctx.composition.push(prev);
    ctx.composition.push(Segment::new(5..7));

    let before = ctx.input.text().to_string();
    assert_eq!(chain.process_key(&key, &mut ctx), ProcessResult::Accepted);
    assert_eq!(ctx.input.text(), "wangffan");
    assert_eq!(ctx.composition.segments()[0].steal, StealState::Stolen);

    assert_eq!(chain.process_key(&key, &mut ctx), ProcessResult::Accepted);
    assert_eq!(ctx.input.text(), before);
    assert_eq!(ctx.composition.segments()[0].steal, StealState::Normal);
}

#[test]
fn shift_append_runs_after_ctrl_interceptors_decline() {
    let mut chain = chain(&Config::default());
    let mut ctx = ctx_single_segment("ni", vec![]);

    // Ctrl+f matches no interceptor; shift+f appends
    assert_eq!(
        chain.process_key(&KeyEvent::press('f').with_ctrl(), &mut ctx),
        ProcessResult::Declined
    );
    assert_eq!(
        chain.process_key(&KeyEvent::press('f').with_shift(), &mut ctx),
        ProcessResult::Accepted
    );
    assert_eq!(ctx.input.text(), "nif");
}

#[test]
fn release_events_never_reach_interceptors() {
    let mut chain = chain(&Config::default());
    let mut ctx = ctx_single_segment("ni", vec![Candidate::new("table", 0, 2, "你")]);
    let result = chain.process_key(&KeyEvent::release('/'), &mut ctx);
    assert_eq!(result, ProcessResult::Declined);
    assert!(ctx.composition.last().unwrap().selected.is_none());
}

#[test]
fn plain_letters_fall_through() {
    let mut chain = chain(&Config::default());
    let mut ctx = ctx_single_segment("ni", vec![]);
    assert_eq!(
        chain.process_key(&KeyEvent::press('h'), &mut ctx),
        ProcessResult::Declined
    );
    assert_eq!(ctx.input.text(), "ni");
}

#[test]
fn shorthand_enabled_claims_its_keys() {
    let mut config = Config::default();
    config.enable_shorthand = true;
    let mut chain = chain(&config);

    let mut ctx = ctx_single_segment("hao", vec![Candidate::new("table", 0, 3, "好")]);
    ctx.select(0);

    // Shift+B expands instead of appending a letter
    let result = chain.process_key(&KeyEvent::press('B').with_shift(), &mut ctx);
    assert_eq!(result, ProcessResult::Accepted);
    assert_eq!(ctx.commit_text, "好不好");
    assert!(ctx.input.is_empty());
}

#[test]
fn shorthand_disabled_keys_append_instead() {
    let mut chain = chain(&Config::default());
    let mut ctx = ctx_single_segment("hao", vec![Candidate::new("table", 0, 3, "好")]);
    ctx.select(0);

    let result = chain.process_key(&KeyEvent::press('B').with_shift(), &mut ctx);
    assert_eq!(result, ProcessResult::Accepted);
    assert_eq!(ctx.input.text(), "haob");
    assert!(ctx.commit_text.is_empty());
}
