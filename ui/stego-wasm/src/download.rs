//! Download trigger.
//!
//! Synthesizes a transient download of binary data under a given filename.
//! The object URL backing the download is revoked as soon as the save has
//! been triggered.

use crate::dom;
use crate::preview::ObjectUrl;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement};

/// Offer `bytes` as a file save named `filename`.
pub fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = ObjectUrl::for_blob(&blob)?;

    let anchor: HtmlAnchorElement = dom::create_element("a")
        .dyn_into()
        .map_err(|_| JsValue::from_str("anchor is not an HtmlAnchorElement"))?;
    anchor.set_href(url.url());
    anchor.set_download(filename);

    let body = dom::document()
        .body()
        .ok_or_else(|| JsValue::from_str("missing <body>"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    // `url` drops here, revoking the transient handle.
    Ok(())
}
