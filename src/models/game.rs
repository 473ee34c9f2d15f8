use crate::models::error::SError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One game descriptor as stored in the manifest.
///
/// The JSON value is kept as is, so fields we do not know about survive a
/// load/save cycle. A manifest element that is not an object still loads;
/// its lookups fail with [`SError::MalformedEntry`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct GameEntry(Value);

impl GameEntry {
    pub fn new(name: &str, display_name: &str, url: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(name.into()));
        fields.insert("displayName".into(), Value::String(display_name.into()));
        fields.insert("url".into(), Value::String(url.into()));
        Self(Value::Object(fields))
    }

    /// The raw descriptor.
    pub fn fields(&self) -> &Value {
        &self.0
    }

    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    fn text(&self, key: &str) -> Result<&str, SError> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| SError::MalformedEntry(key.to_string()))
    }

    /// Stable identifier, also the install folder name.
    pub fn name(&self) -> Result<&str, SError> {
        self.text("name")
    }

    pub fn display_name(&self) -> Result<&str, SError> {
        self.text("displayName")
    }

    /// Location of the ZIP archive.
    pub fn url(&self) -> Result<&str, SError> {
        self.text("url")
    }

    /// Label for menus; falls back to `name` when `displayName` is missing.
    pub fn label(&self) -> &str {
        self.display_name()
            .or_else(|_| self.name())
            .unwrap_or("(unnamed game)")
    }
}

/// Where an entry sits in its lifecycle. `Removed` entries are simply no
/// longer in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Registered,
    Installed,
}

impl std::fmt::Display for EntryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryState::Registered => f.write_str("not installed"),
            EntryState::Installed => f.write_str("installed"),
        }
    }
}
