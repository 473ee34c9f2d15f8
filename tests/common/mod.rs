#![allow(dead_code)]

use camino::Utf8PathBuf;
use shredspace_updater_lib::config::AppSettings;
use shredspace_updater_lib::core::transport::{copy_chunked, Transport};
use shredspace_updater_lib::models::error::SError;
use shredspace_updater_lib::models::game::GameEntry;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Cursor, Write};
use std::net::TcpListener;
use std::rc::Rc;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Temp home folder with settings pointing at it.
pub fn setup_test_env() -> (TempDir, AppSettings) {
    let tmp = tempfile::tempdir().unwrap();
    let home = Utf8PathBuf::from_path_buf(tmp.path().join("home")).unwrap();
    std::fs::create_dir_all(&home).unwrap();

    let settings = AppSettings {
        home: Some(home),
        ..AppSettings::default()
    };
    (tmp, settings)
}

pub fn descriptor(name: &str) -> String {
    format!(
        r#"{{"name":"{name}","displayName":"{}","url":"https://cdn.test/{name}.zip"}}"#,
        name.to_uppercase()
    )
}

pub fn entry(name: &str) -> GameEntry {
    serde_json::from_str(&descriptor(name)).unwrap()
}

/// In-memory ZIP. Names ending in `/` become directories.
pub fn build_zip(files: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (name, content) in files {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}

#[derive(Clone)]
pub enum ArchiveReply {
    Zip(Vec<u8>),
    WrongType(String),
    Fail,
}

/// Serves descriptors and archives from memory and records every URL asked for.
#[derive(Default, Clone)]
pub struct FakeTransport {
    pub descriptors: HashMap<String, String>,
    pub archives: HashMap<String, ArchiveReply>,
    pub calls: Rc<RefCell<Vec<String>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` at `https://cdn.test/<name>.json` with a ZIP holding `files`.
    pub fn with_game(mut self, name: &str, files: &[(&str, &str)]) -> Self {
        self.descriptors
            .insert(format!("https://cdn.test/{name}.json"), descriptor(name));
        self.archives.insert(
            format!("https://cdn.test/{name}.zip"),
            ArchiveReply::Zip(build_zip(files)),
        );
        self
    }

    pub fn with_archive(mut self, url: &str, reply: ArchiveReply) -> Self {
        self.archives.insert(url.to_string(), reply);
        self
    }

    pub fn with_descriptor(mut self, url: &str, body: &str) -> Self {
        self.descriptors.insert(url.to_string(), body.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn fetch_descriptor(&self, url: &str) -> Result<GameEntry, SError> {
        self.calls.borrow_mut().push(url.to_string());
        let body = self
            .descriptors
            .get(url)
            .ok_or_else(|| SError::FetchError(format!("404 Not Found for url ({url})")))?;
        serde_json::from_str(body).map_err(|e| SError::ParseError(e.to_string()))
    }

    fn fetch_archive(&self, url: &str, dest: &mut dyn Write) -> Result<u64, SError> {
        self.calls.borrow_mut().push(url.to_string());
        match self.archives.get(url) {
            Some(ArchiveReply::Zip(bytes)) => copy_chunked(&mut bytes.as_slice(), dest),
            Some(ArchiveReply::WrongType(ct)) => Err(SError::InvalidContentType(ct.clone())),
            Some(ArchiveReply::Fail) | None => {
                Err(SError::FetchError(format!("404 Not Found for url ({url})")))
            }
        }
    }
}

pub struct CannedResponse {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl CannedResponse {
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type),
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: Some("text/plain"),
            body: b"nope".to_vec(),
        }
    }
}

/// Answers one connection per canned response, in order, on a loopback port.
/// Returns the base URL.
pub fn serve(responses: Vec<CannedResponse>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };

            // Consume the request head
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }

            let mut head = format!("HTTP/1.1 {} Canned\r\n", response.status);
            if let Some(ct) = response.content_type {
                head.push_str(&format!("Content-Type: {ct}\r\n"));
            }
            head.push_str(&format!(
                "Content-Length: {}\r\nConnection: close\r\n\r\n",
                response.body.len()
            ));

            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&response.body);
            let _ = stream.flush();
        }
    });

    format!("http://{addr}")
}
