//! Replay a scripted key sequence against the standard interceptor chain
//! and print the editing state after every step.
//!
//! Plain characters are typed into the buffer; bracketed tokens are
//! interceptor keys: `<C-r>` is Ctrl+r, `<S-f>` is Shift+f. Example:
//!
//!     simulate_session "sxlx <C-r> <C-r>"
//!     simulate_session --shorthand "hao / <S-B>"

use anyhow::{bail, Result};
use clap::Parser;
use libshengbi_core::{
    Candidate, Config, EditContext, InputBuffer, KeyEvent, ProcessResult, ProcessorChain, Segment,
};

#[derive(Parser)]
#[command(about = "Replay a key script against the interceptor chain")]
struct Args {
    /// Whitespace-separated key script, e.g. "nihao / <C-r>"
    keys: String,

    /// Enable the shorthand-expansion interceptor
    #[arg(long)]
    shorthand: bool,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

/// Tiny built-in conversion table so the menu has something to show.
const DEMO_WORDS: &[(&str, &str)] = &[
    ("ni", "你"),
    ("ni", "尼"),
    ("hao", "好"),
    ("hao", "号"),
    ("nihao", "你好"),
    ("sxlx", "声笔"),
    ("wang", "网"),
];

fn lookup(code: &str) -> Vec<Candidate> {
    let mut out: Vec<Candidate> = DEMO_WORDS
        .iter()
        .filter(|(c, _)| *c == code)
        .map(|(_, text)| Candidate::new("table", 0, code.len(), *text))
        .collect();
    if out.is_empty() && !code.is_empty() {
        out.push(Candidate::new("completion", 0, code.len(), code));
    }
    out
}

fn parse_token(token: &str) -> Result<Vec<KeyEvent>> {
    if let Some(body) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        let (modifier, key) = match body.split_once('-') {
            Some(parts) => parts,
            None => bail!("bad token '{token}', expected <C-x> or <S-x>"),
        };
        let ch = match key.chars().next() {
            Some(ch) if key.chars().count() == 1 => ch,
            _ => bail!("bad key in token '{token}'"),
        };
        let event = match modifier {
            "C" => KeyEvent::press(ch).with_ctrl(),
            "S" => KeyEvent::press(ch).with_shift(),
            _ => bail!("bad modifier in token '{token}'"),
        };
        return Ok(vec![event]);
    }
    Ok(token.chars().map(KeyEvent::press).collect())
}

/// Re-cover the whole buffer with one segment and refresh the menu, the
/// way a host engine would after a buffer edit.
fn refresh(ctx: &mut EditContext) {
    let text = ctx.input.text().to_string();
    ctx.composition.clear();
    if !text.is_empty() {
        ctx.composition.push(Segment::new(0..text.len()));
        ctx.menu.set_candidates(lookup(&text));
    } else {
        ctx.menu.clear();
    }
}

fn print_state(step: &str, outcome: &str, ctx: &EditContext) {
    let menu: Vec<&str> = ctx
        .menu
        .current_page_candidates()
        .iter()
        .map(|c| c.text.as_str())
        .collect();
    let selected = ctx
        .composition
        .last()
        .and_then(|seg| seg.selected.as_ref())
        .map(|c| c.text.as_str())
        .unwrap_or("-");
    println!(
        "{step:>8}  {outcome:<9} buffer='{}' selected='{selected}' menu={menu:?} commit='{}'",
        ctx.input.text(),
        ctx.commit_text,
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    if args.shorthand {
        config.enable_shorthand = true;
    }

    let mut chain = ProcessorChain::from_config(&config);
    let mut ctx = EditContext::new();
    ctx.input = InputBuffer::new();

    for token in args.keys.split_whitespace() {
        for event in parse_token(token)? {
            let step = format!("{}{}{}",
                if event.ctrl { "C-" } else { "" },
                if event.shift { "S-" } else { "" },
                event.ch,
            );
            let before = ctx.input.text().to_string();
            match chain.process_key(&event, &mut ctx) {
                ProcessResult::Accepted => {
                    // Re-run the (mock) translation only when the buffer
                    // changed; a selection edit keeps its menu
                    if ctx.input.text() != before && ctx.commit_text.is_empty() {
                        refresh(&mut ctx);
                    }
                    print_state(&step, "accepted", &ctx);
                    if !ctx.commit_text.is_empty() {
                        println!("{:>8}  commit -> {}", "", ctx.commit_text);
                        ctx.take_commit();
                    }
                }
                ProcessResult::Declined if event.plain() => {
                    ctx.input.push(event.ch);
                    refresh(&mut ctx);
                    print_state(&step, "typed", &ctx);
                }
                ProcessResult::Declined => {
                    print_state(&step, "declined", &ctx);
                }
            }
        }
    }
    Ok(())
}
