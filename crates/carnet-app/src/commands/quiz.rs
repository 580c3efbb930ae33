use std::io::{BufRead, Write};

use carnet_core::store::record_attempt;
use carnet_core::{Clock, QuizError, QuizSession};
use carnet_types::Direction;
use rand::Rng;

use crate::state::AppState;

pub fn handle_test(
    state: &AppState,
    reverse: bool,
    size: Option<usize>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let direction = if reverse {
        state.config.quiz.direction.reversed()
    } else {
        state.config.quiz.direction
    };
    let size = size.unwrap_or(state.config.quiz.batch_size);

    run_session(state, direction, size, &mut rand::rng(), input, out)
}

pub fn run_session<R: Rng + ?Sized>(
    state: &AppState,
    direction: Direction,
    size: usize,
    rng: &mut R,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let words = state.store.load_words()?;

    let mut session = match QuizSession::start(&words, direction, size, rng) {
        Ok(session) => session,
        Err(QuizError::NoWords) => {
            writeln!(out, "No words to test yet, add or import some first.")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    loop {
        let Some(prompt) = session.prompt().map(str::to_string) else {
            break;
        };
        let (position, total) = session.progress();

        write!(out, "[{position}/{total}] {prompt}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            tracing::info!("Test interrupted at {position}/{total}");
            break;
        }

        let attempt = session.submit(&line)?;
        record_attempt(state.store.as_ref(), &attempt.word_id, attempt.correct, state.clock.now())?;

        if attempt.correct {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(out, "Wrong, expected: {}", attempt.expected)?;
        }
    }

    let summary = session.summary();
    if summary.answered < summary.total {
        writeln!(
            out,
            "Score: {}/{} (of {})",
            summary.score, summary.answered, summary.total
        )?;
    } else {
        writeln!(out, "Score: {}/{}", summary.score, summary.total)?;
    }

    if !summary.mistakes.is_empty() {
        writeln!(out, "To review:")?;
        for word in &summary.mistakes {
            writeln!(
                out,
                "  {} -> {}",
                direction.prompt(word),
                direction.expected(word)
            )?;
        }
    }

    Ok(())
}
