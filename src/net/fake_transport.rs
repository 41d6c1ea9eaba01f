//! Scripted in-memory transport for native tests.
//!
//! Responses are queued per `(method, path)`. Each call pops the front of its
//! queue until one entry remains; the last entry then answers every later call,
//! which models a backend whose state changes after a mutation.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use super::error::ApiError;
use super::gateway::{Method, PreparedRequest, RawResponse, Transport};

type Reply = Result<RawResponse, ApiError>;

#[derive(Default)]
struct Inner {
    routes: Vec<(Method, String, VecDeque<Reply>)>,
    requests: Vec<PreparedRequest>,
}

/// Cloneable handle; clones share routes and the request log.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<RefCell<Inner>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response for `method path` (path without query string).
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &Value) -> &Self {
        self.push(method, path, Ok(RawResponse { status, body: body.to_string() }));
        self
    }

    /// Queue a raw-text response.
    pub fn respond_text(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, method: Method, path: &str) -> &Self {
        self.push(method, path, Err(ApiError::Transport("connection refused".to_owned())));
        self
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        let mut inner = self.inner.borrow_mut();
        if let Some((_, _, queue)) = inner.routes.iter_mut().find(|(m, p, _)| *m == method && p == path) {
            queue.push_back(reply);
        } else {
            inner.routes.push((method, path.to_owned(), VecDeque::from([reply])));
        }
    }

    /// Every request executed so far, in order.
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.inner.borrow().requests.clone()
    }

    /// Number of requests sent to `method path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method && r.url.ends_with(path))
            .count()
    }

    /// Number of non-GET requests.
    pub fn mutation_count(&self) -> usize {
        self.inner.borrow().requests.iter().filter(|r| r.method != Method::Get).count()
    }

    /// The most recent request to `method path`.
    pub fn last(&self, method: Method, path: &str) -> Option<PreparedRequest> {
        self.inner
            .borrow()
            .requests
            .iter()
            .rev()
            .find(|r| r.method == method && r.url.ends_with(path))
            .cloned()
    }
}

impl Transport for FakeTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request.clone());
        let route = inner
            .routes
            .iter_mut()
            .find(|(m, p, _)| *m == request.method && request.url.ends_with(p.as_str()));
        match route {
            Some((_, _, queue)) if queue.len() > 1 => queue.pop_front().unwrap_or_else(not_found),
            Some((_, _, queue)) => queue.front().cloned().unwrap_or_else(not_found),
            None => not_found(),
        }
    }
}

fn not_found() -> Reply {
    Ok(RawResponse { status: 404, body: r#"{"message":"no such route"}"#.to_owned() })
}
