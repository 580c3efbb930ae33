use std::io::Write;

use anyhow::Context;
use carnet_core::store::add_word;
use carnet_core::{Clock, IdGenerator};
use carnet_types::VocabularyRecord;

use crate::state::AppState;

pub fn handle_add(
    state: &AppState,
    source: &str,
    target: &str,
    example: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let id = state.ids.next_id();
    let record = VocabularyRecord::new(id, source, target, example, state.clock.now())
        .context("Missing required fields")?;

    let list = add_word(state.store.as_ref(), record)?;

    // Adding a first word counts as finishing setup
    if !state.store.is_configured()? {
        state.store.set_configured()?;
    }

    writeln!(out, "Word added ({} in list).", list.len())?;
    Ok(())
}
