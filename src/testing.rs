//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ApiClient, HttpRequest, HttpResponse, HttpTransport};
use crate::error::{AppError, AppResult};
use crate::models::{Credentials, User};
use crate::routes::Navigator;
use crate::session::{MemoryStore, Session};

pub const BASE_URL: &str = "http://shop.test/api";

/// Scripted backend: answers requests in FIFO order and records them
#[derive(Clone, Default)]
pub struct FakeBackend {
    replies: Arc<Mutex<VecDeque<AppResult<HttpResponse>>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn respond_json(&self, value: serde_json::Value) {
        self.respond(200, &value.to_string());
    }

    pub fn fail(&self, reason: &str) {
        self.replies.lock().unwrap().push_back(Err(AppError::Network(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn request_body(&self, index: usize) -> serde_json::Value {
        let body = self.requests()[index].body.clone().expect("request has a body");
        serde_json::from_str(&body).expect("body is JSON")
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn execute(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted reply".to_string())))
    }
}

#[derive(Default)]
pub struct RecordingNavigator(Mutex<Vec<String>>);

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.lock().unwrap().push(path.to_string());
    }
}

fn client(backend: &FakeBackend, signed_in: bool) -> (ApiClient, Arc<RecordingNavigator>) {
    let session = Session::restore(Arc::new(MemoryStore::default()));
    if signed_in {
        session.sign_in(Credentials {
            token: "secret-token".to_string(),
            user: User { id: "u1".into(), name: "Admin".into(), email: "admin@shop.test".into(), role: "admin".into() },
        });
    }
    let nav = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(BASE_URL, Arc::new(backend.clone()), session, nav.clone());
    (client, nav)
}

pub fn signed_in_client(backend: &FakeBackend) -> (ApiClient, Arc<RecordingNavigator>) {
    client(backend, true)
}

pub fn signed_out_client(backend: &FakeBackend) -> (ApiClient, Arc<RecordingNavigator>) {
    client(backend, false)
}
