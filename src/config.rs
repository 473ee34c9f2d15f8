use crate::models::error::SError;
use crate::models::paths::AppPaths;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const APP_NAME: &str = "shredspace";
const CONFIG_NAME: &str = "settings";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Base directory holding `games.json`, `app/` and the generated files.
    /// Unset means the executable's directory, looked up on every run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<Utf8PathBuf>,
    /// Custom URL scheme accepted as a single argument, e.g. `shredspace://`.
    pub scheme: String,
    pub supports_uninstall: bool,
    pub supports_url_argument: bool,
    pub request_timeout_secs: u64,
    /// Handlebars template replacing the built-in listing page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Utf8PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            home: None,
            scheme: APP_NAME.to_string(),
            supports_uninstall: true,
            supports_url_argument: true,
            request_timeout_secs: 30,
            template: None,
        }
    }
}

/// Directory of the running executable. Bundled builds keep the binary in an
/// `_internal` folder, in which case its parent is used.
fn default_home() -> Utf8PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| dunce::canonicalize(exe).ok())
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
        .map(|dir| {
            if dir.file_name() == Some("_internal") {
                dir.parent().map(Utf8Path::to_path_buf).unwrap_or(dir)
            } else {
                dir
            }
        })
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, SError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    pub fn load_path(path: &Utf8Path) -> Result<AppSettings, SError> {
        debug!("loading settings from {path}");
        Ok(confy::load_path(path)?)
    }

    pub fn save(&self) -> Result<(), SError> {
        Ok(confy::store(APP_NAME, CONFIG_NAME, self)?)
    }

    pub fn save_path(&self, path: &Utf8Path) -> Result<(), SError> {
        Ok(confy::store_path(path, self)?)
    }

    pub fn home(&self) -> Utf8PathBuf {
        self.home.clone().unwrap_or_else(default_home)
    }

    pub fn paths(&self) -> AppPaths {
        AppPaths::new(&self.home())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Prefix that marks a deep link, e.g. `shredspace://`.
    pub fn scheme_prefix(&self) -> String {
        format!("{}://", self.scheme)
    }
}
