//! Processing indicator.
//!
//! A full-screen overlay shown while a submission is in flight. The pairing
//! of show/hide is structurally enforced: submission handlers acquire a
//! [`ProcessingGuard`] whose drop hides the overlay and releases the form's
//! in-flight slot, so cleanup runs on every exit path.

use crate::dom::{self, Elements};
use crate::preview::ObjectUrl;
use crate::state;
use pv_api_types::Operation;
use std::cell::RefCell;
use web_sys::File;

thread_local! {
    static OVERLAY_URL: RefCell<Option<ObjectUrl>> = const { RefCell::new(None) };
}

/// Display the overlay; when the submitted image is supplied, render it
/// inside the overlay and mark the card as processing. Idempotent.
pub fn show(els: &Elements, image: Option<&File>) {
    let _ = els
        .processing_overlay
        .style()
        .set_property("display", "flex");
    if let Some(file) = image {
        if let Ok(url) = ObjectUrl::for_file(file) {
            els.processing_image.set_src(url.url());
            OVERLAY_URL.with(|u| *u.borrow_mut() = Some(url));
            dom::add_class(&els.card, "processing");
        }
    }
}

/// Remove the overlay, clear its image (revoking the URL), and unmark the
/// card. Idempotent.
pub fn hide(els: &Elements) {
    let _ = els
        .processing_overlay
        .style()
        .set_property("display", "none");
    els.processing_image.set_src("");
    OVERLAY_URL.with(|u| u.borrow_mut().take());
    dom::remove_class(&els.card, "processing");
}

/// Scoped acquisition of the processing state for one submission.
pub struct ProcessingGuard {
    els: Elements,
    op: Operation,
}

impl ProcessingGuard {
    /// Show the overlay for `op`'s form. The caller must already hold the
    /// form's in-flight slot; this guard releases it on drop.
    pub fn acquire(els: &Elements, op: Operation, image: Option<&File>) -> Self {
        show(els, image);
        Self {
            els: els.clone(),
            op,
        }
    }
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        hide(&self.els);
        state::finish_submission(self.op);
    }
}
