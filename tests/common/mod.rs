//! Common test utilities

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use userdir::core::{HttpUsersApi, UsersApi};
use userdir::models::{ApiConfig, Config, FormData, User, UserId};
use userdir::ApiError;

/// Build a user record
pub fn user(id: i64, name: &str, email: &str, phone: Option<&str>) -> User {
    User {
        id: UserId::Number(id.into()),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
    }
}

/// A call made against the scripted API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(FormData),
    Update(UserId, FormData),
    Delete(UserId),
}

/// In-memory users API answering from per-operation queues
///
/// An exhausted queue answers with an empty list or a plain success.
#[derive(Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<Call>>,
    lists: Mutex<VecDeque<Result<Vec<User>, ApiError>>>,
    saves: Mutex<VecDeque<Result<(), ApiError>>>,
    deletes: Mutex<VecDeque<Result<(), ApiError>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_ok(self, users: Vec<User>) -> Self {
        self.lists.lock().unwrap().push_back(Ok(users));
        self
    }

    pub fn list_err(self, error: ApiError) -> Self {
        self.lists.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn save_err(self, error: ApiError) -> Self {
        self.saves.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn delete_err(self, error: ApiError) -> Self {
        self.deletes.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl UsersApi for ScriptedApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record(Call::List);
        self.lists.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn create_user(&self, draft: &FormData) -> Result<(), ApiError> {
        self.record(Call::Create(draft.clone()));
        self.saves.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn update_user(&self, id: &UserId, draft: &FormData) -> Result<(), ApiError> {
        self.record(Call::Update(id.clone(), draft.clone()));
        self.saves.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        self.record(Call::Delete(id.clone()));
        self.deletes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// A request as seen by the loopback server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Loopback HTTP server that answers each connection with the next canned response
pub struct TestServer {
    pub base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start serving `responses` (status, JSON body) in order, one per connection
    pub async fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();
        let handle = tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                if let Ok(request) = read_request(&mut stream).await {
                    recorded.lock().unwrap().push(request);
                }
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if (200..300).contains(&status) { "OK" } else { "Error" },
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            base: format!("http://{}", addr),
            requests,
            handle,
        }
    }

    /// Accept connections and read requests but never answer them
    pub async fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((mut stream, _)) = listener.accept().await {
                if let Ok(request) = read_request(&mut stream).await {
                    recorded.lock().unwrap().push(request);
                }
                held.push(stream);
            }
        });

        Self {
            base: format!("http://{}", addr),
            requests,
            handle,
        }
    }

    /// Collection endpoint served by this server
    pub fn collection_url(&self) -> String {
        format!("{}/api/users", self.base)
    }

    /// API client pointed at this server, bypassing any proxy from the environment
    pub fn api(&self) -> HttpUsersApi {
        self.api_with_timeout(5)
    }

    pub fn api_with_timeout(&self, secs: u64) -> HttpUsersApi {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(secs))
            .build()
            .expect("Failed to build client");
        HttpUsersApi::with_client(
            client,
            ApiConfig {
                url: self.collection_url(),
                timeout_seconds: Some(secs),
            },
        )
    }

    /// Config whose API URL points at this server
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.api.url = self.collection_url();
        config.api.timeout_seconds = Some(5);
        config
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();
    let content_length: usize = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    Ok(RecordedRequest { method, path, body })
}
