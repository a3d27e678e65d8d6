//! HTTP front: `tiny_http` accept loop feeding the tokio runtime.
//!
//! The accept loop runs on a blocking thread. Every request becomes a tokio
//! task; body reads and writes go through `spawn_blocking` because tiny_http
//! streams are synchronous.

use std::io::Read;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, Server};
use tokio::runtime::Handle;

use crate::config::ServerConfig;
use crate::handler::{ApiReply, handle_lead};
use crate::loops::LeadSink;

pub const LEADS_PATH: &str = "/api/loops";
pub const HEALTH_PATH: &str = "/healthz";

/// A response before it is handed to tiny_http.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn json(reply: ApiReply) -> Self {
        Self {
            status: reply.status,
            content_type: "application/json",
            body: reply.to_json(),
        }
    }

    fn message(status: u16, message: &str) -> Self {
        Self::json(ApiReply::new(status, message))
    }
}

struct AppState<S> {
    sink: S,
    static_dir: Option<PathBuf>,
    max_body_bytes: usize,
}

/// A bound, not yet running server.
pub struct LeadServer<S> {
    http: Arc<Server>,
    state: Arc<AppState<S>>,
}

/// Stops a running [`LeadServer`] from another task.
#[derive(Clone)]
pub struct ShutdownHandle(Arc<Server>);

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.0.unblock();
    }
}

impl<S: LeadSink> LeadServer<S> {
    pub fn bind(config: &ServerConfig, sink: S) -> Result<Self> {
        let http = Server::http(&config.bind)
            .map_err(|e| anyhow!("failed to bind {}: {}", config.bind, e))?;
        let static_dir = match &config.static_dir {
            Some(dir) => Some(dir.canonicalize().map_err(|e| {
                anyhow!("static dir {} is not usable: {}", dir.display(), e)
            })?),
            None => None,
        };
        Ok(Self {
            http: Arc::new(http),
            state: Arc::new(AppState {
                sink,
                static_dir,
                max_body_bytes: config.max_body_bytes,
            }),
        })
    }

    pub fn local_addr(&self) -> Option<std::net::SocketAddr> {
        self.http.server_addr().to_ip()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.http))
    }

    /// Serve until [`ShutdownHandle::shutdown`] is called.
    pub async fn run(self) -> Result<()> {
        let runtime = Handle::current();
        let http = Arc::clone(&self.http);
        let state = Arc::clone(&self.state);

        tokio::task::spawn_blocking(move || {
            for request in http.incoming_requests() {
                let state = Arc::clone(&state);
                runtime.spawn(serve_request(request, state));
            }
        })
        .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn serve_request<S: LeadSink>(request: Request, state: Arc<AppState<S>>) {
    let limit = state.max_body_bytes;
    let read = tokio::task::spawn_blocking(move || {
        let mut request = request;
        let body = read_body(&mut request, limit);
        (request, body)
    })
    .await;
    let Ok((request, body)) = read else {
        tracing::error!("body reader task panicked");
        return;
    };

    let method = request.method().clone();
    let url = request.url().to_string();
    let reply = match body {
        Ok(body) => route(&method, &url, &body, &state).await,
        Err(err) => {
            tracing::warn!(%url, error = %err, "rejecting request body");
            Reply::message(413, "Payload Too Large")
        }
    };
    tracing::info!(method = %method, %url, status = reply.status, "request");

    let _ = tokio::task::spawn_blocking(move || {
        if let Err(err) = request.respond(into_response(reply)) {
            tracing::debug!(error = %err, "client went away");
        }
    })
    .await;
}

fn read_body(request: &mut Request, limit: usize) -> std::io::Result<Vec<u8>> {
    let mut body = Vec::new();
    request
        .as_reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut body)?;
    if body.len() > limit {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("body exceeds {limit} bytes"),
        ));
    }
    Ok(body)
}

fn into_response(reply: Reply) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        response = response.with_header(header);
    }
    response
}

async fn route<S: LeadSink>(method: &Method, url: &str, body: &[u8], state: &AppState<S>) -> Reply {
    let path = url.split(['?', '#']).next().unwrap_or("/");
    match path {
        LEADS_PATH => Reply::json(handle_lead(*method == Method::Post, body, &state.sink).await),
        HEALTH_PATH => Reply::message(200, "ok"),
        _ if matches!(method, Method::Get | Method::Head) => match &state.static_dir {
            Some(root) => serve_static(root, path).await,
            None => Reply::message(404, "Not Found"),
        },
        _ => Reply::message(404, "Not Found"),
    }
}

/// Serve `path` from `root`, falling back to `index.html` for client routes.
async fn serve_static(root: &Path, path: &str) -> Reply {
    let Some(relative) = safe_relative(path) else {
        return Reply::message(404, "Not Found");
    };
    let candidate = root.join(&relative);
    let file = if relative.as_os_str().is_empty() || candidate.is_dir() {
        candidate.join("index.html")
    } else {
        candidate
    };

    let (file, body) = match tokio::fs::read(&file).await {
        Ok(body) => (file, body),
        Err(_) if Path::new(path).extension().is_none() => {
            let index = root.join("index.html");
            match tokio::fs::read(&index).await {
                Ok(body) => (index, body),
                Err(_) => return Reply::message(404, "Not Found"),
            }
        }
        Err(_) => return Reply::message(404, "Not Found"),
    };

    Reply {
        status: 200,
        content_type: content_type(&file),
        body,
    }
}

/// URL path → relative filesystem path; `None` for anything escaping the root
/// or not valid UTF-8 once percent-decoded.
fn safe_relative(path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(path).ok()?;
    let mut out = PathBuf::new();
    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(out)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).unwrap_or_default() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "text/javascript",
        "wasm" => "application/wasm",
        "json" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "ico" => "image/x-icon",
        "mp4" => "video/mp4",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loops::LoopsError;
    use samwise_common::LeadRequest;
    use std::fs;

    struct OkSink;

    impl LeadSink for OkSink {
        async fn record(&self, _lead: &LeadRequest) -> Result<(), LoopsError> {
            Ok(())
        }
    }

    fn state(static_dir: Option<PathBuf>) -> AppState<OkSink> {
        AppState {
            sink: OkSink,
            static_dir,
            max_body_bytes: 1024,
        }
    }

    #[test]
    fn rejects_traversal() {
        assert_eq!(safe_relative("/assets/app.js"), Some(PathBuf::from("assets/app.js")));
        assert_eq!(safe_relative("/"), Some(PathBuf::new()));
        assert_eq!(safe_relative("/../etc/passwd"), None);
        assert_eq!(safe_relative("/a/../../b"), None);
        assert_eq!(safe_relative("/%2e%2e/etc/passwd"), None);
        assert_eq!(safe_relative("/%ff"), None);
    }

    #[test]
    fn decodes_escaped_paths() {
        assert_eq!(
            safe_relative("/setup/mac/step%201.png"),
            Some(PathBuf::from("setup/mac/step 1.png"))
        );
    }

    #[test]
    fn guesses_content_types() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }

    #[tokio::test]
    async fn routes_api_and_health() {
        let state = state(None);
        let reply = route(&Method::Get, "/api/loops", b"", &state).await;
        assert_eq!(reply.status, 405);

        let reply = route(&Method::Get, "/healthz?probe=1", b"", &state).await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, br#"{"message":"ok"}"#.to_vec());

        let reply = route(&Method::Get, "/setup", b"", &state).await;
        assert_eq!(reply.status, 404);

        let reply = route(&Method::Delete, "/anything", b"", &state).await;
        assert_eq!(reply.status, 404);
    }

    #[tokio::test]
    async fn serves_static_files_with_spa_fallback() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>samwise</html>").unwrap();
        fs::create_dir(dir.path().join("setup")).unwrap();
        fs::write(dir.path().join("setup").join("step1.png"), [0x89, b'P', b'N', b'G']).unwrap();
        let state = state(Some(dir.path().to_path_buf()));

        let root = route(&Method::Get, "/", b"", &state).await;
        assert_eq!(root.status, 200);
        assert_eq!(root.content_type, "text/html; charset=utf-8");

        let image = route(&Method::Get, "/setup/step1.png", b"", &state).await;
        assert_eq!(image.content_type, "image/png");
        assert_eq!(image.body.len(), 4);

        // Client-side route resolves to the app shell.
        let page = route(&Method::Get, "/setup", b"", &state).await;
        assert_eq!(page.status, 200);
        assert_eq!(page.body, b"<html>samwise</html>".to_vec());

        fs::write(dir.path().join("setup").join("step 2.png"), [0x89]).unwrap();
        let spaced = route(&Method::Get, "/setup/step%202.png", b"", &state).await;
        assert_eq!(spaced.status, 200);
        assert_eq!(spaced.content_type, "image/png");

        let missing_asset = route(&Method::Get, "/missing.js", b"", &state).await;
        assert_eq!(missing_asset.status, 404);

        let escape = route(&Method::Get, "/../secret", b"", &state).await;
        assert_eq!(escape.status, 404);
    }
}
