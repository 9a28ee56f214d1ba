//! Event binding.
//!
//! Wires all UI event listeners: tab clicks, image selection, x0 validation,
//! and form submission. Async submission handlers are spawned via
//! `wasm_bindgen_futures::spawn_local`.

use crate::dom::{self, Elements};
use crate::present;
use crate::preview;
use crate::state;
use crate::submit;
use pv_api_types::Operation;
use pv_ui_core::{Tab, constraint_message};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

fn tab_from_name(name: &str) -> Option<Tab> {
    match name {
        "embed" => Some(Tab::Embed),
        "decrypt" => Some(Tab::Decrypt),
        _ => None,
    }
}

/// Bind all UI event listeners. Call once after `Elements::bind`.
pub fn bind_events(els: &Elements) {
    // ── Tabs ──
    for button in &els.tab_buttons {
        let tab_name = button.get_attribute("data-tab").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            set_active_tab(&els2, &tab_name);
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Image selection ──
    bind_image_input(els, &els.image_embed, Tab::Embed);
    bind_image_input(els, &els.image_decrypt, Tab::Decrypt);

    // ── x0 validation ──
    for input in &els.x0_inputs {
        let input2 = input.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            match constraint_message(&input2.value()) {
                Some(msg) => input2.set_custom_validity(&msg),
                None => input2.set_custom_validity(""),
            }
        }) as Box<dyn FnMut(_)>);
        input
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Form submission ──
    bind_submit(els, Operation::Embed);
    bind_submit(els, Operation::Decrypt);
}

fn bind_image_input(els: &Elements, input: &web_sys::HtmlInputElement, tab: Tab) {
    let els2 = els.clone();
    let input2 = input.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        preview::on_image_selected(&els2, tab, &input2);
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn bind_submit(els: &Elements, op: Operation) {
    let form = match op {
        Operation::Embed => &els.embed_form,
        Operation::Decrypt => &els.decrypt_form,
    };
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        let els3 = els2.clone();
        wasm_bindgen_futures::spawn_local(async move {
            submit::on_submit(&els3, op).await;
        });
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Switch the active tab and panel, dropping any preview and decrypted
/// message belonging to the prior context.
fn set_active_tab(els: &Elements, tab_name: &str) {
    for button in &els.tab_buttons {
        dom::toggle_class(
            button,
            "active",
            button.get_attribute("data-tab").as_deref() == Some(tab_name),
        );
    }
    for content in &els.tab_contents {
        dom::toggle_class(content, "active", content.id() == tab_name);
    }
    if let Some(tab) = tab_from_name(tab_name) {
        let change = state::with_session_mut(|s| s.activate_tab(tab));
        if change.clear_preview {
            preview::clear_preview(els);
        }
        if change.clear_decrypted_message {
            present::clear_decrypted_message(els);
        }
    }
}
