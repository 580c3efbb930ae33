use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use carnet_core::store::complete_setup;
use carnet_core::{Clock, IdGenerator, ImportError, Importer};

use crate::state::AppState;

pub fn handle_import(state: &AppState, file: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let extension = file
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);

    if !matches!(extension.as_deref(), Some("csv") | Some("txt")) {
        tracing::warn!("{} is not a .csv or .txt file, importing anyway", file.display());
    }

    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let ids = state.ids.as_ref();
    let clock = state.clock.as_ref();
    let importer = Importer::with_sources(|| ids.next_id(), || clock.now());

    // The stored list is only replaced once the whole file parsed into words
    let records = match importer.import_bytes(&bytes) {
        Ok(records) => records,
        Err(ImportError::EmptyOrMalformed) => {
            anyhow::bail!(
                "The CSV file {} seems empty or malformed: no word could be read",
                file.display()
            );
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to read CSV file {}", file.display())));
        }
    };

    complete_setup(state.store.as_ref(), &records)?;
    writeln!(out, "Imported {} words.", records.len())?;
    Ok(())
}
