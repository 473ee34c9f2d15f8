use derive_more::Display;

#[derive(Display, Debug)]
pub enum SError {
    #[display("Failed to download file: {_0}")]
    FetchError(String),
    #[display("The URL does not point to a ZIP file (Content-Type: {_0})")]
    InvalidContentType(String),
    #[display("Failed to parse {_0}")]
    ParseError(String),
    #[display("{_0} - The downloaded file is not a valid ZIP archive.")]
    BadArchive(String),
    /// Carries the index of the entry that already holds this descriptor.
    #[display("This game is already in your library!")]
    DuplicateEntry(usize),
    #[display("Your library is empty.")]
    EmptyLibrary,
    #[display("You can only uninstall one game at a time.")]
    TooManySelected,
    #[display("No games selected.")]
    NoneSelected,
    #[display("{_0} not found.")]
    ManifestNotFound(String),
    #[display("Library entry is missing the '{_0}' field")]
    MalformedEntry(String),
    #[display("'{_0}' cannot be used as an install folder name")]
    UnsafeName(String),
    #[display("Failed to render the game listing: {_0}")]
    Render(String),
    #[display("Settings error: {_0}")]
    Config(String),
    #[display("{_0} is disabled in the settings")]
    Disabled(String),
    #[display("I/O error: {_0}")]
    IOError(String),
}

impl std::error::Error for SError {}

impl From<std::io::Error> for SError {
    fn from(e: std::io::Error) -> Self {
        SError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for SError {
    fn from(e: serde_json::Error) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<reqwest::Error> for SError {
    fn from(e: reqwest::Error) -> Self {
        SError::FetchError(e.to_string())
    }
}

impl From<zip::result::ZipError> for SError {
    fn from(e: zip::result::ZipError) -> Self {
        match e {
            zip::result::ZipError::Io(io) => SError::IOError(io.to_string()),
            other => SError::BadArchive(other.to_string()),
        }
    }
}

impl From<confy::ConfyError> for SError {
    fn from(e: confy::ConfyError) -> Self {
        SError::Config(e.to_string())
    }
}

impl From<handlebars::TemplateError> for SError {
    fn from(e: handlebars::TemplateError) -> Self {
        SError::Render(e.to_string())
    }
}

impl From<handlebars::RenderError> for SError {
    fn from(e: handlebars::RenderError) -> Self {
        SError::Render(e.to_string())
    }
}

impl From<tempfile::PersistError> for SError {
    fn from(e: tempfile::PersistError) -> Self {
        SError::IOError(e.error.to_string())
    }
}

