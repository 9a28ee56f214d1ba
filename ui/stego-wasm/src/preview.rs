//! Upload preview.
//!
//! A selected image becomes the card's background via an object URL. Object
//! URLs are manually-released browser resources, so they are wrapped in
//! [`ObjectUrl`] which revokes on drop; replacing the slot releases the
//! superseded handle at the point of replacement.

use crate::dom::Elements;
use crate::present;
use crate::state;
use pv_ui_core::Tab;
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys::{Blob, File, Url};

/// An object URL revoked when the handle is dropped.
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn for_file(file: &File) -> Result<Self, JsValue> {
        let url = Url::create_object_url_with_blob(file)?;
        Ok(Self { url })
    }

    pub fn for_blob(blob: &Blob) -> Result<Self, JsValue> {
        let url = Url::create_object_url_with_blob(blob)?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

thread_local! {
    static PREVIEW_URL: RefCell<Option<ObjectUrl>> = const { RefCell::new(None) };
}

/// A file was selected on `tab`'s image input. Absence of a file is a silent
/// no-op; otherwise the card background is swapped and any prior decrypted
/// message is invalidated.
pub fn on_image_selected(els: &Elements, tab: Tab, input: &web_sys::HtmlInputElement) {
    let Some(file) = input.files().and_then(|list| list.item(0)) else {
        return;
    };

    let change = state::with_session_mut(|s| s.image_selected(tab));
    if change.clear_decrypted_message {
        present::clear_decrypted_message(els);
    }

    let url = match ObjectUrl::for_file(&file) {
        Ok(u) => u,
        Err(e) => {
            gloo_console::warn!("preview object URL failed:", e);
            return;
        }
    };

    let style = els.card.style();
    let _ = style.set_property("background-image", &format!("url('{}')", url.url()));
    let _ = style.set_property("background-size", "cover");

    // Replacing the slot drops (and revokes) the superseded URL.
    PREVIEW_URL.with(|p| *p.borrow_mut() = Some(url));
}

/// Drop the card's preview background and revoke its object URL.
pub fn clear_preview(els: &Elements) {
    let _ = els.card.style().set_property("background-image", "");
    PREVIEW_URL.with(|p| p.borrow_mut().take());
}
