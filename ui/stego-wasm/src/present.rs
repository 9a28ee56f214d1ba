//! Result presentation.
//!
//! One message per submission outcome, styled as success or error; the
//! decrypted-message display is populated on decrypt success and emptied
//! whenever its context is invalidated.

use crate::dom::{self, Elements};
use web_sys::Element;

/// Write `message` into a result/error container with exactly one of the
/// `success` / `error` classes active.
pub fn show_result(el: &Element, message: &str, is_error: bool) {
    el.set_text_content(Some(message));
    dom::remove_class(el, "hidden");
    if is_error {
        dom::add_class(el, "error");
        dom::remove_class(el, "success");
    } else {
        dom::remove_class(el, "error");
        dom::add_class(el, "success");
    }
}

/// Hide a container ahead of a new submission.
pub fn hide(el: &Element) {
    dom::add_class(el, "hidden");
}

/// Populate and reveal the decrypted-message display.
pub fn show_decrypted_message(els: &Elements, message: &str) {
    els.decrypted_message.set_value(message);
    dom::remove_class(&els.decrypted_message_container, "hidden");
    let _ = els
        .decrypted_message_container
        .style()
        .set_property("display", "block");
}

/// Empty and hide the decrypted-message display.
pub fn clear_decrypted_message(els: &Elements) {
    els.decrypted_message.set_value("");
    dom::add_class(&els.decrypted_message_container, "hidden");
    let _ = els
        .decrypted_message_container
        .style()
        .remove_property("display");
}
