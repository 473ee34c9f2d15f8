use crate::models::error::SError;
use crate::models::game::GameEntry;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use tempfile::NamedTempFile;
use tracing::debug;

/// The ordered game collection and the manifest it is persisted to.
///
/// Order matters: the last entry is the "latest" one.
#[derive(Debug, Clone)]
pub struct Library {
    pub manifest: Utf8PathBuf,
    entries: Vec<GameEntry>,
}

impl Library {
    pub fn empty(manifest: &Utf8Path) -> Self {
        Self {
            manifest: manifest.to_owned(),
            entries: Vec::new(),
        }
    }

    /// Reads the manifest. Callers that want to continue with an empty
    /// library on failure should use [`Library::load_or_empty`].
    pub fn load(manifest: &Utf8Path) -> Result<Self, SError> {
        let file = match File::open(manifest) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SError::ManifestNotFound(manifest.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let entries: Vec<GameEntry> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                SError::ParseError(format!("{manifest}. Ensure it is valid JSON. ({e})"))
            })?;
        debug!("loaded {} entries from {manifest}", entries.len());

        Ok(Self {
            manifest: manifest.to_owned(),
            entries,
        })
    }

    /// Loads the manifest, falling back to an empty library. The error that
    /// caused the fallback is handed back so it can be reported.
    pub fn load_or_empty(manifest: &Utf8Path) -> (Self, Option<SError>) {
        match Self::load(manifest) {
            Ok(lib) => (lib, None),
            Err(e) => (Self::empty(manifest), Some(e)),
        }
    }

    /// Writes the whole library next to the manifest and renames it into place.
    pub fn persist(&self) -> Result<(), SError> {
        let dir = match self.manifest.parent() {
            Some(p) if !p.as_str().is_empty() => p.to_owned(),
            _ => Utf8PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer(&mut tmp, &self.entries)?;
        tmp.flush()?;
        tmp.persist(&self.manifest)?;
        debug!("saved {} entries to {}", self.entries.len(), self.manifest);
        Ok(())
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GameEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&GameEntry> {
        self.entries.last()
    }

    /// Exact-content match, not a lookup by name.
    pub fn contains(&self, entry: &GameEntry) -> bool {
        self.entries.contains(entry)
    }

    pub fn position_of(&self, entry: &GameEntry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    pub(crate) fn push(&mut self, entry: GameEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<GameEntry> {
        self.entries.pop()
    }

    pub(crate) fn remove(&mut self, index: usize) -> GameEntry {
        self.entries.remove(index)
    }

    pub(crate) fn insert(&mut self, index: usize, entry: GameEntry) {
        self.entries.insert(index, entry);
    }
}
