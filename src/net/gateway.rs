//! Authenticated HTTP gateway in front of every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and services never talk to `gloo-net` directly. They describe an
//! `ApiRequest`; the gateway resolves the URL against the configured base,
//! attaches the bearer token and content type, hands the result to a
//! `Transport`, and watches for 401s.
//!
//! SESSION EXPIRY
//! ==============
//! A 401 on any call clears the stored session before the response is
//! returned. The gateway never navigates; pages notice the missing user on
//! their next auth check and redirect themselves.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::MessageResponse;
use crate::state::session::SessionStore;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    /// Multipart form parts; the browser supplies the content type and boundary.
    Multipart(Vec<FormPart>),
}

/// File contents read from an `<input type="file">`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, upload: Upload },
}

impl FormPart {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self::Text { name: name.to_owned(), value: value.into() }
    }

    pub fn file(name: &str, upload: Upload) -> Self {
        Self::File { name: name.to_owned(), upload }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// A call as described by API helpers: relative path plus options.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body. Serialization of the crate's own wire types cannot fail;
    /// if it ever does the body degrades to `null` and the server rejects it.
    #[must_use]
    pub fn json<B: Serialize>(mut self, body: &B) -> Self {
        let value = serde_json::to_value(body).unwrap_or_else(|err| {
            log::error!("request body serialization failed: {err}");
            Value::Null
        });
        self.body = RequestBody::Json(value);
        self
    }

    #[must_use]
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Add a query parameter; encoding happens in the transport.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_owned(), value.into()));
        self
    }
}

/// Fully resolved request handed to a `Transport`.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl PreparedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body text of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `message` field of a JSON body, if any.
    pub fn message(&self) -> Option<String> {
        serde_json::from_str::<MessageResponse>(&self.body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// Executes prepared requests. The browser build uses `gloo-net`; tests use a recorder.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no HTTP response was received.
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError>;
}

/// Session-aware request pipeline.
#[derive(Clone, Debug)]
pub struct Gateway<T> {
    base_url: String,
    session: SessionStore,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(base_url: impl Into<String>, session: SessionStore, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            session,
            transport,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Absolute URLs pass through; everything else is joined to the base URL.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Resolve URL and default headers. Caller-supplied headers win over defaults.
    pub fn prepare(&self, request: ApiRequest) -> PreparedRequest {
        let mut headers = Vec::new();
        if matches!(request.body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        for (name, value) in request.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }
        PreparedRequest {
            method: request.method,
            url: self.resolve_url(&request.path),
            query: request.query,
            headers,
            body: request.body,
        }
    }

    /// Send a request and return the raw response, clearing the session on 401.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the transport fails. Non-2xx statuses
    /// are not errors at this layer.
    pub async fn auth_fetch(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let prepared = self.prepare(request);
        let method = prepared.method;
        let url = prepared.url.clone();
        let response = self.transport.execute(prepared).await?;
        log::debug!("{method:?} {url} -> {}", response.status);
        if response.status == 401 {
            log::warn!("{method:?} {url} returned 401; clearing session");
            self.session.clear_auth();
        }
        Ok(response)
    }

    /// Send a request expecting a JSON array. Non-array bodies read as empty and
    /// malformed elements are skipped, so one bad row never blanks the list.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx statuses.
    pub async fn fetch_list<R: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> Result<Vec<R>, ApiError> {
        let response = self.auth_fetch(request).await?;
        if !response.is_success() {
            return Err(rejection(&response, fallback));
        }
        Ok(decode_list(&response.body))
    }

    /// Send a request expecting a single JSON object.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses, and bodies that do not decode as `R`.
    pub async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> Result<R, ApiError> {
        let response = self.auth_fetch(request).await?;
        if !response.is_success() {
            return Err(rejection(&response, fallback));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Send a mutation and return the server's `message` on success.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx statuses, carrying the server message
    /// verbatim or `fallback` when the body has none.
    pub async fn send_for_message(&self, request: ApiRequest, fallback: &str) -> Result<Option<String>, ApiError> {
        let response = self.auth_fetch(request).await?;
        if !response.is_success() {
            return Err(rejection(&response, fallback));
        }
        Ok(response.message())
    }
}

/// Map a non-2xx response to an error.
pub fn rejection(response: &RawResponse, fallback: &str) -> ApiError {
    if response.status == 401 {
        return ApiError::SessionExpired;
    }
    ApiError::Rejected {
        status: response.status,
        message: response.message().unwrap_or_else(|| fallback.to_owned()),
    }
}

/// Decode a JSON array element by element.
pub fn decode_list<R: DeserializeOwned>(body: &str) -> Vec<R> {
    let items = match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            log::warn!("expected a JSON array; treating response as empty");
            return Vec::new();
        }
        Err(err) => {
            log::warn!("unparsable list response: {err}");
            return Vec::new();
        }
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<R>(item) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                log::warn!("skipping malformed list entry: {err}");
                None
            }
        })
        .collect()
}
