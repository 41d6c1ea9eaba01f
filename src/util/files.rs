//! Reading files picked in an `<input type="file">` for multipart uploads.

use crate::net::gateway::Upload;

/// Read every file selected in the input that fired `ev` and hand them to
/// `on_read`. Unreadable files are skipped with a warning.
#[cfg(feature = "csr")]
pub fn read_picked(ev: &leptos::ev::Event, on_read: impl FnOnce(Vec<Upload>) + 'static) {
    let input: web_sys::HtmlInputElement = leptos::prelude::event_target(ev);
    let files = input.files();
    leptos::task::spawn_local(async move {
        let uploads = match files {
            Some(list) => read_list(&list).await,
            None => Vec::new(),
        };
        on_read(uploads);
    });
}

/// Outside the browser no file can be picked.
#[cfg(not(feature = "csr"))]
pub fn read_picked(_ev: &leptos::ev::Event, on_read: impl FnOnce(Vec<Upload>) + 'static) {
    on_read(Vec::new());
}

#[cfg(feature = "csr")]
async fn read_list(list: &web_sys::FileList) -> Vec<Upload> {
    let mut uploads = Vec::new();
    for index in 0..list.length() {
        let Some(file) = list.item(index) else {
            continue;
        };
        match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => uploads.push(Upload {
                file_name: file.name(),
                content_type: file.type_(),
                bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
            }),
            Err(_) => log::warn!("could not read picked file {}", file.name()),
        }
    }
    uploads
}
