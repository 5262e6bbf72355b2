//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::{FutureExt, Shared};
use serde_json::Value;

use crate::api::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::ApiError;

type Route = (Method, String);

/// Answers each `(method, url)` from a queue of canned results and records
/// every request it sees.
///
/// After [`ScriptedTransport::hold`], requests are recorded immediately but
/// not answered until the returned sender fires (or is dropped).
#[derive(Default)]
pub struct ScriptedTransport {
    routes: RefCell<HashMap<Route, VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: RefCell<Vec<HttpRequest>>,
    gate: RefCell<Option<Shared<oneshot::Receiver<()>>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, method: Method, url: &str, status: u16, body: Value) {
        self.respond_raw(method, url, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: Method, url: &str, status: u16, body: &str) {
        self.push(method, url, Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, method: Method, url: &str, message: &str) {
        self.push(method, url, Err(ApiError::request_failed(message)));
    }

    /// Keep every later request in flight until the sender is used.
    pub fn hold(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.gate.borrow_mut() = Some(gate.shared());
        release
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    fn push(&self, method: Method, url: &str, result: Result<HttpResponse, ApiError>) {
        self.routes
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(result);
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());

        let gate = self.gate.borrow().clone();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let key = (request.method, request.url.clone());
        self.routes
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(ApiError::request_failed(format!(
                    "no scripted response for {} {}",
                    request.method.as_str(),
                    request.url
                )))
            })
    }
}
