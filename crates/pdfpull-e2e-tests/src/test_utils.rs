//! Shared fixtures: an in-process HTTP server that serves numbered PDF
//! documents and records every request it receives.

use eyre::Result;
use pdfpull_lib::Config;
use pdfpull_lib::cli::FetchParams;
use pdfpull_lib::target::BatchRequest;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// What the mock server answers for a given path.
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// 200 with the given body.
    Document(Vec<u8>),
    /// Bare status code with an empty body.
    Status(u16),
    /// Accepts the request but waits this long before answering 200.
    Stall(Duration),
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
}

pub struct MockPdfServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockPdfServer {
    /// Serves `routes` (path -> response) until the process exits; unknown
    /// paths get 404.
    pub fn start(routes: HashMap<String, MockResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let routes = Arc::new(routes);

        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let recorded = Arc::clone(&recorded);
                thread::spawn(move || handle(stream, &routes, &recorded));
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/docs/lecture"),
            requests,
        }
    }

    /// Serves `documents` as `/docs/lecture{NN}.pdf`; every other index is 404.
    pub fn with_documents(documents: &[(u32, &[u8])]) -> Self {
        let routes = documents
            .iter()
            .map(|(index, body)| (document_path(*index), MockResponse::Document(body.to_vec())))
            .collect();
        Self::start(routes)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub fn document_path(index: u32) -> String {
    format!("/docs/lecture{index:02}.pdf")
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, MockResponse>,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));

    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
        }
    }

    let Some(request) = parse_request(&String::from_utf8_lossy(&raw)) else {
        return;
    };
    let response = routes
        .get(&request.path)
        .cloned()
        .unwrap_or(MockResponse::Status(404));
    recorded.lock().unwrap().push(request);

    let (status, body) = match response {
        MockResponse::Document(body) => (200, body),
        MockResponse::Status(status) => (status, Vec::new()),
        MockResponse::Stall(delay) => {
            thread::sleep(delay);
            (200, b"%PDF-late".to_vec())
        }
    };

    let head = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/pdf\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reason_phrase(status),
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
}

fn parse_request(raw: &str) -> Option<RecordedRequest> {
    let mut lines = raw.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
        .collect();

    Some(RecordedRequest {
        method,
        path,
        headers,
    })
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Config pointing at `base_url` that keeps all output under `root`.
pub fn create_test_config(base_url: &str, root: &Path) -> Config {
    let mut config = Config::new(base_url, Some("session=e2e-secret".to_string()));
    config.output_dir = root.join("downloaded");
    config.log_dir = root.to_path_buf();
    config
}

pub fn fetch_params(config: Config, start: u32, stop: u32, prefix: &str) -> FetchParams {
    FetchParams {
        app_config: config,
        request: BatchRequest::new(start, stop, prefix).expect("valid batch request"),
        skip_probe: false,
        verify: false,
    }
}

/// Writes `config` as JSON into `dir` and returns the file path.
pub fn write_config_file(dir: &Path, config: &Config) -> Result<std::path::PathBuf> {
    let config_path = dir.join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(config)?)?;
    Ok(config_path)
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
