use crate::core::installer::{self, InstallStage};
use crate::core::library::Library;
use crate::core::selection::Selection;
use crate::core::transport::Transport;
use crate::models::error::SError;
use crate::models::game::{EntryState, GameEntry};
use crate::models::paths::AppPaths;
use camino::Utf8PathBuf;
use tracing::{debug, info, warn};

/// Outcome of updating one selected game.
#[derive(Debug)]
pub struct UpdateReport {
    pub label: String,
    pub result: Result<Utf8PathBuf, SError>,
}

/// Fetches the descriptor at `url` and appends it to the library.
/// The library is persisted only when the entry was added.
pub fn add_entry(
    library: &mut Library,
    transport: &dyn Transport,
    url: &str,
) -> Result<GameEntry, SError> {
    let candidate = transport.fetch_descriptor(url)?;
    if !candidate.is_object() {
        return Err(SError::ParseError(format!("{url}: the game descriptor is not a JSON object")));
    }

    if let Some(existing) = library.position_of(&candidate) {
        return Err(SError::DuplicateEntry(existing));
    }

    library.push(candidate.clone());
    if let Err(e) = library.persist() {
        library.pop();
        return Err(e);
    }

    info!("added {} from {url}", candidate.label());
    Ok(candidate)
}

/// Entries picked by `selection`, in the order the selection names them.
pub fn select_entries<'a>(
    library: &'a Library,
    selection: &Selection,
) -> Result<Vec<&'a GameEntry>, SError> {
    let indices = selection.resolve(library.len())?;
    debug!("selection {:?} resolved to {:?}", selection, indices);
    Ok(indices.into_iter().filter_map(|i| library.get(i)).collect())
}

/// Installs every selected entry in turn. A failure is recorded for that
/// entry and the next one is still attempted. The manifest is not touched.
pub fn update_entries<F>(
    transport: &dyn Transport,
    paths: &AppPaths,
    selected: &[&GameEntry],
    mut on_stage: F,
) -> Vec<UpdateReport>
where
    F: FnMut(&GameEntry, InstallStage),
{
    selected
        .iter()
        .map(|&entry| {
            let result = installer::install(transport, paths, entry, |stage| on_stage(entry, stage));
            if let Err(e) = &result {
                warn!("update of {} failed: {e}", entry.label());
            }
            UpdateReport {
                label: entry.label().to_string(),
                result,
            }
        })
        .collect()
}

/// Removes exactly one entry and its install folder.
///
/// The folder is deleted first. The entry leaves the library only once the
/// folder is gone, and is put back if the manifest cannot be written.
pub fn uninstall_entry(
    library: &mut Library,
    paths: &AppPaths,
    selection: &Selection,
) -> Result<GameEntry, SError> {
    // Counted as typed, before out-of-range positions are dropped
    if matches!(selection, Selection::Positions(p) if p.len() > 1) {
        return Err(SError::TooManySelected);
    }
    let index = match selection.resolve(library.len())?.as_slice() {
        [single] => *single,
        _ => return Err(SError::NoneSelected),
    };

    let entry = library.get(index).ok_or(SError::NoneSelected)?;
    match entry.name() {
        Ok(name) if !paths.is_game_folder(name) => {
            return Err(SError::UnsafeName(name.to_string()));
        }
        Ok(name) => {
            let dir = paths.install_dir(name);
            if dir.exists() {
                std::fs::remove_dir_all(&dir)?;
                debug!("removed {dir}");
            }
        }
        // A malformed entry was never installed
        Err(e) => debug!("nothing to remove on disk: {e}"),
    }

    let removed = library.remove(index);
    if let Err(e) = library.persist() {
        library.insert(index, removed);
        return Err(e);
    }

    info!("uninstalled {}", removed.label());
    Ok(removed)
}

pub fn entry_state(paths: &AppPaths, entry: &GameEntry) -> EntryState {
    match entry.name() {
        Ok(name) if paths.is_game_folder(name) && paths.install_dir(name).is_dir() => {
            EntryState::Installed
        }
        _ => EntryState::Registered,
    }
}

/// Number of files below the entry's install folder.
pub fn installed_file_count(paths: &AppPaths, entry: &GameEntry) -> usize {
    let Ok(name) = entry.name() else {
        return 0;
    };
    if !paths.is_game_folder(name) {
        return 0;
    }
    walkdir::WalkDir::new(paths.install_dir(name))
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}
