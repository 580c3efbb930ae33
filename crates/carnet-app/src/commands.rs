use std::io::{self, Write};

use carnet_core::match_answer;
use carnet_core::matcher::accepted_answers;
use carnet_core::store::complete_setup;

use crate::cli::Cmd;
use crate::state::AppState;

pub mod add;
pub mod export;
pub mod import;
pub mod quiz;

use add::handle_add;
use export::handle_export;
use import::handle_import;
use quiz::handle_test;

/// Dispatch one CLI command against stdin/stdout
pub fn run(state: &AppState, cmd: Cmd) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    match cmd {
        Cmd::Init => handle_init(state, &mut out),
        Cmd::Import { file } => handle_import(state, &file, &mut out),
        Cmd::Export {
            output,
            stdout,
            reset,
        } => handle_export(state, output.as_deref(), stdout, reset, &mut out),
        Cmd::Add {
            source,
            target,
            example,
        } => handle_add(state, &source, &target, example.as_deref(), &mut out),
        Cmd::List => handle_list(state, &mut out),
        Cmd::Test { reverse, size } => {
            let mut input = io::stdin().lock();
            handle_test(state, reverse, size, &mut input, &mut out)
        }
        Cmd::Check { target, answer } => handle_check(&target, &answer, &mut out),
        Cmd::Reset => handle_reset(state, &mut out),
    }
}

pub fn handle_init(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    if state.store.is_configured()? {
        anyhow::bail!("Word list already set up, run `carnet reset` first");
    }

    complete_setup(state.store.as_ref(), &[])?;
    writeln!(out, "Started with an empty word list.")?;
    Ok(())
}

pub fn handle_list(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    let words = state.store.load_words()?;

    if words.is_empty() {
        writeln!(out, "No words yet.")?;
        return Ok(());
    }

    for word in &words {
        writeln!(
            out,
            "{} -> {}  [+{} -{}]",
            word.source, word.target, word.correct_count, word.error_count
        )?;
        if let Some(example) = &word.example {
            writeln!(out, "    {example}")?;
        }
    }
    writeln!(out, "{} words", words.len())?;
    Ok(())
}

pub fn handle_check(target: &str, answer: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let verdict = if match_answer(target, answer) {
        "correct"
    } else {
        "incorrect"
    };

    writeln!(out, "{verdict}")?;
    writeln!(out, "accepted: {}", accepted_answers(target).join(" | "))?;
    Ok(())
}

pub fn handle_reset(state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    state.store.reset()?;
    tracing::info!("Word list reset");
    writeln!(out, "Word list cleared.")?;
    Ok(())
}
