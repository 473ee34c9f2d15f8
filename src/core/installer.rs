//! Download, extract and put one game in place.

use crate::core::decompression::Decompression;
use crate::core::transport::Transport;
use crate::models::error::SError;
use crate::models::game::GameEntry;
use crate::models::paths::AppPaths;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Progress reported while installing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    Downloading,
    Installing,
    CleaningUp,
}

/// Downloads `entry`'s archive and installs it into `<install_root>/<name>`.
///
/// The archive is downloaded and extracted inside the staging folder, so a
/// failed update leaves the previous installation untouched. The downloaded
/// ZIP is removed whether or not the install succeeds.
pub fn install<F>(
    transport: &dyn Transport,
    paths: &AppPaths,
    entry: &GameEntry,
    mut on_stage: F,
) -> Result<Utf8PathBuf, SError>
where
    F: FnMut(InstallStage),
{
    let name = entry.name()?;
    if !paths.is_game_folder(name) {
        return Err(SError::UnsafeName(name.to_string()));
    }
    let url = entry.url()?;

    fs::create_dir_all(&paths.staging)?;
    let archive_path = paths.staging.join(format!("{}.zip", Uuid::new_v4()));

    on_stage(InstallStage::Downloading);
    let result = download(transport, url, &archive_path).and_then(|_| {
        on_stage(InstallStage::Installing);
        stage_and_swap(paths, &archive_path, name)
    });

    on_stage(InstallStage::CleaningUp);
    if archive_path.exists() {
        if let Err(e) = fs::remove_file(&archive_path) {
            warn!("could not remove {archive_path}: {e}");
        }
    }
    // Only succeeds once the staging folder is empty
    let _ = fs::remove_dir(&paths.staging);

    let target = result?;
    info!("installed {name} into {target}");
    Ok(target)
}

fn download(transport: &dyn Transport, url: &str, archive_path: &Utf8Path) -> Result<(), SError> {
    let file = File::create(archive_path)?;
    let mut writer = BufWriter::new(file);
    let bytes = transport.fetch_archive(url, &mut writer)?;
    debug!("downloaded {bytes} bytes to {archive_path}");
    Ok(())
}

fn stage_and_swap(paths: &AppPaths, archive_path: &Utf8Path, name: &str) -> Result<Utf8PathBuf, SError> {
    let staged = paths.staging.join(Uuid::new_v4().to_string());

    let extracted = Decompression::extract(archive_path, &staged).map_err(|e| {
        let _ = fs::remove_dir_all(&staged);
        e
    })?;
    debug!("extracted {extracted} files into {staged}");

    let target = paths.install_dir(name);
    if target.exists() {
        fs::remove_dir_all(&target)?;
    }
    fs::rename(&staged, &target)?;
    Ok(target)
}
