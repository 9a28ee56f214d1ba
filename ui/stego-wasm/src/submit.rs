//! Submission controller.
//!
//! Intercepted form submissions come in here: acquire the form's in-flight
//! slot, reset prior result state, show the processing overlay, POST the form
//! as multipart, and route the reply through `pv-ui-core` into its display
//! outcome. The overlay is hidden and the slot released by the guard's drop,
//! regardless of how the submission concludes.

use crate::dom::{self, Elements};
use crate::download;
use crate::overlay::ProcessingGuard;
use crate::present;
use crate::state;
use pv_api_types::Operation;
use pv_ui_core::{HttpReply, Outcome, ReplyBody, TransportError, route_reply};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, File, FormData, HtmlFormElement, Request, RequestInit, Response};

/// Handle a submit event for `op`'s form.
pub async fn on_submit(els: &Elements, op: Operation) {
    if state::begin_submission(op).is_err() {
        gloo_console::warn!("submission already in flight, ignoring");
        return;
    }

    let (form, result_el, error_el) = containers(els, op);
    present::hide(result_el);
    present::hide(error_el);

    let image_file = submitted_image(form);
    let guard = ProcessingGuard::acquire(els, op, image_file.as_ref());

    let reply = post_form(form, op).await;
    let outcome = route_reply(op, reply);
    apply_outcome(els, op, outcome);

    drop(guard);
}

fn containers<'a>(els: &'a Elements, op: Operation) -> (&'a HtmlFormElement, &'a Element, &'a Element) {
    match op {
        Operation::Embed => (&els.embed_form, &els.embed_result, &els.embed_error),
        Operation::Decrypt => (&els.decrypt_form, &els.decrypt_result, &els.decrypt_error),
    }
}

fn submitted_image(form: &HtmlFormElement) -> Option<File> {
    let input = form
        .query_selector(&format!(r#"input[name="{}"]"#, pv_api_types::FIELD_IMAGE))
        .ok()??
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.item(0)
}

fn js_err(e: JsValue) -> TransportError {
    TransportError(format!("{e:?}"))
}

/// POST the form as multipart and read the reply body: bytes for a
/// successful embed (the body is the stego image), text otherwise.
async fn post_form(form: &HtmlFormElement, op: Operation) -> Result<HttpReply, TransportError> {
    let form_data = FormData::new_with_form(form).map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form_data.as_ref());

    let request = Request::new_with_str_and_init(op.path(), &opts).map_err(js_err)?;
    let resp_value = JsFuture::from(dom::window().fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| TransportError("response is not a Response".to_owned()))?;

    let status = resp.status();
    let body = if resp.ok() && op == Operation::Embed {
        let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        ReplyBody::Bytes(js_sys::Uint8Array::new(&buf).to_vec())
    } else {
        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        ReplyBody::Text(text.as_string().unwrap_or_default())
    };

    Ok(HttpReply { status, body })
}

fn apply_outcome(els: &Elements, op: Operation, outcome: Outcome) {
    let (_, result_el, error_el) = containers(els, op);
    let (text, is_error) = {
        let (t, e) = outcome.presentation();
        (t.to_owned(), e)
    };

    match outcome {
        Outcome::EmbedSucceeded { image, filename } => {
            if let Err(e) = download::trigger_download(&image, filename) {
                gloo_console::error!("download failed:", e);
                present::show_result(error_el, pv_ui_core::EMBED_FAILURE_FALLBACK, true);
                return;
            }
            present::show_result(result_el, &text, is_error);
        }
        Outcome::DecryptSucceeded { message } => {
            gloo_console::log!("decrypted message:", message.as_str());
            state::with_session_mut(|s| s.decrypt_succeeded(&message));
            present::show_decrypted_message(els, &message);
            present::show_result(result_el, &text, is_error);
        }
        Outcome::Failed { .. } => {
            if op == Operation::Decrypt {
                let change = state::with_session_mut(|s| s.decrypt_failed());
                if change.clear_decrypted_message {
                    present::clear_decrypted_message(els);
                }
            }
            present::show_result(error_el, &text, is_error);
        }
    }
}
