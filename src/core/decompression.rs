use crate::models::error::SError;
use camino::Utf8Path;
use std::fs::{self, File};
use std::io;
use tracing::{debug, warn};

pub struct Decompression;

impl Decompression {
    /// Extracts every entry of the ZIP at `archive_path` below `destination`.
    /// Returns the number of files written.
    pub fn extract(archive_path: &Utf8Path, destination: &Utf8Path) -> Result<usize, SError> {
        let file = File::open(archive_path)?;

        let mut archive = zip::ZipArchive::new(file)?;
        fs::create_dir_all(destination)?;

        let mut written = 0;
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;

            // Entries that would land outside the destination are skipped
            let safe_path = match file.enclosed_name() {
                Some(path) => path.to_owned(),
                None => {
                    warn!("skipping unsafe archive entry {:?}", file.name());
                    continue;
                }
            };

            let output_path = destination.as_std_path().join(&safe_path);

            if file.is_dir() {
                fs::create_dir_all(&output_path)?;
            } else {
                if let Some(parent) = output_path.parent() {
                    if !parent.exists() {
                        fs::create_dir_all(parent)?;
                    }
                }

                let mut outfile = File::create(&output_path)?;
                io::copy(&mut file, &mut outfile)?;
                written += 1;
            }

            // Keep executables runnable
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = file.unix_mode() {
                    if let Err(e) = fs::set_permissions(&output_path, fs::Permissions::from_mode(mode)) {
                        debug!("could not set mode {mode:o} on {}: {e}", output_path.display());
                    }
                }
            }
        }

        Ok(written)
    }
}
