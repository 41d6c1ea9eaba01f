//! `gloo-net` transport for the browser build.
//!
//! Client-side (csr): real `fetch` calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with a transport error,
//! since these endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::gateway::{PreparedRequest, RawResponse, Transport};
#[cfg(feature = "csr")]
use super::gateway::{FormPart, Method, RequestBody, Upload};

/// Stateless `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
                Method::Put => gloo_net::http::Request::put(&request.url),
                Method::Delete => gloo_net::http::Request::delete(&request.url),
            };
            let builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            let builder = request
                .headers
                .iter()
                .fold(builder, |b, (name, value)| b.header(name, value));
            let built = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.body(value.to_string()),
                RequestBody::Multipart(parts) => builder.body(form_data(&parts)?),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = built.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
    for part in parts {
        let appended = match part {
            FormPart::Text { name, value } => form.append_with_str(name, value),
            FormPart::File { name, upload } => {
                let blob = blob(upload)?;
                form.append_with_blob_and_filename(name, &blob, &upload.file_name)
            }
        };
        appended.map_err(|_| ApiError::Transport(format!("could not append form part {}", part.name())))?;
    }
    Ok(form)
}

#[cfg(feature = "csr")]
fn blob(upload: &Upload) -> Result<web_sys::Blob, ApiError> {
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&js_sys::Array::of1(&bytes), &options)
        .map_err(|_| ApiError::Transport(format!("could not read {}", upload.file_name)))
}
