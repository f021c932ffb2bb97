//! Shared test utilities: a scripted GraphQL endpoint

use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tiny_http::{Header, Response, Server};

/// A request the fake endpoint received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub body: serde_json::Value,
    /// (lowercased name, value)
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Local HTTP server answering a fixed list of responses in order
pub struct FakeEndpoint {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeEndpoint {
    /// Serve `responses` as (status, JSON body), one per incoming request
    pub fn serve(responses: Vec<(u16, String)>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("Failed to bind fake endpoint");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Fake endpoint is not an IP listener");
        let url = format!("http://{}/graphql", addr);

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let Ok(mut request) = server.recv() else {
                    return;
                };

                let mut raw = String::new();
                let _ = request.as_reader().read_to_string(&mut raw);
                let headers = request
                    .headers()
                    .iter()
                    .map(|h| (h.field.to_string().to_ascii_lowercase(), h.value.to_string()))
                    .collect();
                recorded.lock().unwrap().push(RecordedRequest {
                    method: request.method().to_string(),
                    body: serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null),
                    headers,
                });

                let response = Response::from_string(body)
                    .with_status_code(status)
                    .with_header(json_content_type());
                let _ = request.respond(response);
            }
        });

        Self {
            url,
            requests,
            handle: Some(handle),
        }
    }

    /// Serve a single `200 OK` JSON response
    pub fn ok(body: serde_json::Value) -> Self {
        Self::serve(vec![(200, body.to_string())])
    }

    /// Wait for every scripted response to be sent, then return what was received
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("Fake endpoint thread panicked");
        }
        self.requests.lock().unwrap().clone()
    }
}

/// URL of a local port with nothing listening on it
pub fn unused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let port = listener.local_addr().expect("Probe port has no address").port();
    drop(listener);
    format!("http://127.0.0.1:{}/graphql", port)
}

fn json_content_type() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}

pub fn settings_payload(auto_publish: bool, email_notifications: bool, email: &str) -> serde_json::Value {
    serde_json::json!({
        "autoPublish": auto_publish,
        "emailNotifications": email_notifications,
        "email": email
    })
}
