use crate::config::AppSettings;
use crate::core::library::Library;
use crate::core::render::IndexRenderer;
use crate::core::transport::{HttpTransport, Transport};
use crate::models::error::SError;
use crate::models::paths::AppPaths;

/// Everything one run of the updater works on. Owned by the command being
/// executed and handed to the library operations by reference.
pub struct AppRegistry {
    pub settings: AppSettings,
    pub paths: AppPaths,
    pub library: Library,
    pub transport: Box<dyn Transport>,
}

impl AppRegistry {
    /// Loads the manifest named by `settings`. A missing or unreadable
    /// manifest yields an empty library plus the error for the caller to report.
    pub fn open(settings: AppSettings) -> Result<(Self, Option<SError>), SError> {
        let transport = HttpTransport::new(settings.request_timeout())?;
        Ok(Self::with_transport(settings, Box::new(transport)))
    }

    pub fn with_transport(settings: AppSettings, transport: Box<dyn Transport>) -> (Self, Option<SError>) {
        let paths = settings.paths();
        let (library, load_error) = Library::load_or_empty(&paths.manifest);
        (
            Self {
                settings,
                paths,
                library,
                transport,
            },
            load_error,
        )
    }

    /// Regenerates the HTML listing from the current library.
    pub fn render_index(&self) -> Result<(), SError> {
        IndexRenderer::new(self.settings.template.as_deref())?.write(&self.library, &self.paths.index)
    }
}
