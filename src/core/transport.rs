//! Fetching descriptors and archives.

use crate::models::error::SError;
use crate::models::game::GameEntry;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use std::io::{Read, Write};
use std::time::Duration;
use tracing::{debug, instrument};

/// Archive bodies are copied to disk in pieces of this size.
pub const CHUNK_SIZE: usize = 8192;

/// Network access used by the library operations.
pub trait Transport {
    /// GETs `url` and parses the body as a single game descriptor.
    fn fetch_descriptor(&self, url: &str) -> Result<GameEntry, SError>;

    /// GETs a ZIP archive and streams it into `dest`. Returns the byte count.
    ///
    /// Nothing is written unless the response declares a ZIP content type.
    fn fetch_archive(&self, url: &str, dest: &mut dyn Write) -> Result<u64, SError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, SError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shredspace/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn get(&self, url: &str) -> Result<Response, SError> {
        Ok(self.client.get(url).send()?.error_for_status()?)
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self))]
    fn fetch_descriptor(&self, url: &str) -> Result<GameEntry, SError> {
        let body = self.get(url)?.text()?;
        serde_json::from_str(&body)
            .map_err(|e| SError::ParseError(format!("game descriptor from {url}: {e}")))
    }

    #[instrument(skip(self, dest))]
    fn fetch_archive(&self, url: &str, dest: &mut dyn Write) -> Result<u64, SError> {
        let mut response = self.get(url)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("zip") {
            return Err(SError::InvalidContentType(content_type));
        }

        let written = copy_chunked(&mut response, dest)?;
        debug!("received {written} bytes");
        Ok(written)
    }
}

/// Copies `src` into `dest` in [`CHUNK_SIZE`] pieces.
pub fn copy_chunked(src: &mut dyn Read, dest: &mut dyn Write) -> Result<u64, SError> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = src
            .read(&mut buffer)
            .map_err(|e| SError::FetchError(format!("Failed to read response chunk: {e}")))?;
        if n == 0 {
            break;
        }
        dest.write_all(&buffer[..n])?;
        total += n as u64;
    }
    dest.flush()?;
    Ok(total)
}
