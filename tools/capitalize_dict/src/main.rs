//! Title-case lowercase dictionary entries.
//!
//! English dictionary tables pair a code column with a word column
//! ("apple Apple ..."). Entries imported from all-lowercase sources need
//! both columns capitalized before the cased variants can be matched.
//! This tool picks the lines whose first character is lowercase,
//! capitalizes their first two columns, and prints the result (or rewrites
//! the file in place with only the converted lines, for building a
//! cased-variants overlay table).

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

#[derive(Parser)]
#[command(about = "Capitalize the code and word columns of lowercase dict lines")]
struct Args {
    /// Dictionary file to read
    file: std::path::PathBuf,

    /// Rewrite the file with only the converted lines
    #[arg(long)]
    in_place: bool,
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn convert(lines: &str) -> Vec<String> {
    let mut output = Vec::new();
    for line in lines.lines() {
        let starts_lower = line.chars().next().is_some_and(|c| c.is_lowercase());
        if !starts_lower {
            continue;
        }
        let mut words: Vec<String> = line.split_whitespace().map(String::from).collect();
        for word in words.iter_mut().take(2) {
            *word = capitalize(word);
        }
        output.push(words.join(" "));
    }
    output
}

fn main() -> Result<()> {
    let args = Args::parse();
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;

    let converted = convert(&content);
    if args.in_place {
        let mut out = converted.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        fs::write(&args.file, out).with_context(|| format!("write {}", args.file.display()))?;
        eprintln!("{} lines converted", converted.len());
    } else {
        for line in &converted {
            println!("{line}");
        }
    }
    Ok(())
}
