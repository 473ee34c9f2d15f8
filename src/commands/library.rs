//! One-shot library commands. Each prints its own outcome to `out`.

use crate::core::game_manager::{self, UpdateReport};
use crate::core::installer::InstallStage;
use crate::core::registry::AppRegistry;
use crate::core::selection::Selection;
use crate::models::error::SError;
use crate::models::game::GameEntry;
use std::io::Write;
use tracing::instrument;

pub fn print_games(reg: &AppRegistry, heading: &str, out: &mut dyn Write) -> Result<(), SError> {
    writeln!(out, "\n{heading}")?;
    for (i, game) in reg.library.entries().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, game.label())?;
    }
    if reg.library.is_empty() {
        writeln!(out, "None")?;
    }
    Ok(())
}

/// Detailed listing with install state.
pub fn list_games(reg: &AppRegistry, out: &mut dyn Write) -> Result<(), SError> {
    if reg.library.is_empty() {
        writeln!(out, "No games found.")?;
        return Ok(());
    }
    for (i, game) in reg.library.entries().iter().enumerate() {
        let state = game_manager::entry_state(&reg.paths, game);
        let name = game.name().unwrap_or("?");
        write!(out, "{}. {} [{}] - {}", i + 1, game.label(), name, state)?;
        match game_manager::installed_file_count(&reg.paths, game) {
            0 => writeln!(out)?,
            1 => writeln!(out, " (1 file)")?,
            n => writeln!(out, " ({n} files)")?,
        }
    }
    Ok(())
}

#[instrument(skip(reg, out))]
pub fn add_game(reg: &mut AppRegistry, url: &str, out: &mut dyn Write) -> Result<GameEntry, SError> {
    let result = game_manager::add_entry(&mut reg.library, reg.transport.as_ref(), url);
    match &result {
        Ok(_) => writeln!(out, "Game added to library successfully. Update game before running.")?,
        Err(e @ SError::DuplicateEntry(_)) => writeln!(out, "{e}")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    result
}

/// Installs the selected games. Returns how many of them failed.
#[instrument(skip(reg, out))]
pub fn update_games(reg: &AppRegistry, selection: &Selection, out: &mut dyn Write) -> Result<usize, SError> {
    let selected = match game_manager::select_entries(&reg.library, selection) {
        Ok(selected) => selected,
        Err(e) => {
            writeln!(out, "\nError: {e}")?;
            return Err(e);
        }
    };

    if selected.is_empty() {
        writeln!(out, "\nNo games selected for update.")?;
        return Ok(0);
    }

    writeln!(out, "\nDownloading and updating selected games...\n")?;
    let reports = game_manager::update_entries(
        reg.transport.as_ref(),
        &reg.paths,
        &selected,
        |game, stage| {
            let _ = match stage {
                InstallStage::Downloading => writeln!(out, "Downloading {}...", game.label()),
                InstallStage::Installing => writeln!(out, "Installing {}...", game.label()),
                InstallStage::CleaningUp => writeln!(out, "Cleaning up..."),
            };
        },
    );

    let mut failures = 0;
    for UpdateReport { label, result } in reports {
        match result {
            Ok(_) => writeln!(out, "{label}: download, extraction, and cleanup complete.")?,
            Err(e) => {
                failures += 1;
                writeln!(out, "{label}: Error: {e}")?;
            }
        }
    }
    Ok(failures)
}

#[instrument(skip(reg, out))]
pub fn uninstall_game(
    reg: &mut AppRegistry,
    selection: &Selection,
    out: &mut dyn Write,
) -> Result<GameEntry, SError> {
    if !reg.settings.supports_uninstall {
        let e = SError::Disabled("Uninstalling".into());
        writeln!(out, "\n{e}")?;
        return Err(e);
    }

    let result = game_manager::uninstall_entry(&mut reg.library, &reg.paths, selection);
    match &result {
        Ok(game) => writeln!(out, "\n{} uninstalled successfully.", game.label())?,
        Err(SError::NoneSelected) => writeln!(out, "\nNo games selected to uninstall.")?,
        Err(e @ SError::TooManySelected) => writeln!(out, "\n{e}\n")?,
        Err(e) => writeln!(out, "\nError: {e}")?,
    }
    result
}

pub fn render_index(reg: &AppRegistry, out: &mut dyn Write) -> Result<(), SError> {
    if let Err(e) = reg.render_index() {
        writeln!(out, "Error: {e}")?;
        return Err(e);
    }
    Ok(())
}
