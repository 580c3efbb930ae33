use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use carnet_core::export_text;

use crate::state::AppState;

pub fn handle_export(
    state: &AppState,
    output: Option<&Path>,
    to_stdout: bool,
    reset: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let words = state.store.load_words()?;

    if words.is_empty() {
        tracing::warn!("Export requested on an empty word list");
        anyhow::bail!("Nothing to export");
    }

    let csv = export_text(&words);

    if to_stdout {
        out.write_all(csv.as_bytes())?;
    } else {
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&state.config.export.file_name));

        fs::write(&path, &csv).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(words = words.len(), "Exported words to {}", path.display());
        writeln!(out, "Exported {} words to {}", words.len(), path.display())?;
    }

    if reset {
        state.store.reset()?;
        // Stdout carries the CSV itself
        if to_stdout {
            tracing::info!("Word list cleared");
        } else {
            writeln!(out, "Word list cleared.")?;
        }
    }

    Ok(())
}
