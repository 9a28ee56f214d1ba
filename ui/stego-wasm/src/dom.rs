//! DOM element bindings.
//!
//! All interactive regions of the page are resolved once at startup into an
//! [`Elements`] registry. To add new UI elements, add a field here and bind
//! it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement,
    HtmlTextAreaElement,
};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_all_typed<T: JsCast>(selector: &str) -> Vec<T> {
    query_all(selector)
        .into_iter()
        .filter_map(|e| e.dyn_into::<T>().ok())
        .collect()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements struct ──

/// All DOM element references used by the controller.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Card (preview background, processing marker)
    pub card: HtmlElement,

    // Forms
    pub embed_form: HtmlFormElement,
    pub decrypt_form: HtmlFormElement,

    // Result / error containers
    pub embed_result: Element,
    pub embed_error: Element,
    pub decrypt_result: Element,
    pub decrypt_error: Element,

    // Decrypted message display
    pub decrypted_message: HtmlTextAreaElement,
    pub decrypted_message_container: HtmlElement,

    // Tabs
    pub tab_buttons: Vec<Element>,
    pub tab_contents: Vec<Element>,

    // Inputs
    pub image_embed: HtmlInputElement,
    pub image_decrypt: HtmlInputElement,
    pub x0_inputs: Vec<HtmlInputElement>,

    // Processing overlay (created at bind time, appended to <body>)
    pub processing_overlay: HtmlElement,
    pub processing_image: HtmlImageElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_form {
    ($id:expr) => {
        by_id_typed::<HtmlFormElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", $id)))?
    };
}

macro_rules! get_textarea {
    ($id:expr) => {
        by_id_typed::<HtmlTextAreaElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing textarea #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references and create the processing overlay.
    /// Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        let card: HtmlElement = query(".card")
            .and_then(|e| e.dyn_into().ok())
            .ok_or_else(|| JsValue::from_str("missing .card"))?;

        // The overlay is not part of the page markup; build it here.
        let processing_overlay: HtmlElement = create_element("div")
            .dyn_into()
            .map_err(|_| JsValue::from_str("overlay is not an HtmlElement"))?;
        processing_overlay.set_class_name("processing-overlay");
        processing_overlay.set_inner_html(
            r#"<div class="processing-content">
                <img src="" alt="Processing Image" class="processing-image"/>
                <div class="processing-dots"></div>
            </div>"#,
        );
        doc()
            .body()
            .ok_or_else(|| JsValue::from_str("missing <body>"))?
            .append_child(&processing_overlay)?;
        let processing_image: HtmlImageElement = processing_overlay
            .query_selector(".processing-image")?
            .and_then(|e| e.dyn_into().ok())
            .ok_or_else(|| JsValue::from_str("missing .processing-image"))?;

        Ok(Elements {
            card,

            embed_form: get_form!("embedForm"),
            decrypt_form: get_form!("decryptForm"),

            embed_result: get_el!("embedResult"),
            embed_error: get_el!("embedError"),
            decrypt_result: get_el!("decryptResult"),
            decrypt_error: get_el!("decryptError"),

            decrypted_message: get_textarea!("decryptedMessage"),
            decrypted_message_container: get_html!("decryptedMessageContainer"),

            tab_buttons: query_all(".tab-button"),
            tab_contents: query_all(".tab-content"),

            image_embed: get_input!("imageEmbed"),
            image_decrypt: get_input!("imageDecrypt"),
            x0_inputs: query_all_typed::<HtmlInputElement>(&format!(
                r#"input[name="{}"]"#,
                pv_api_types::FIELD_X0
            )),

            processing_overlay,
            processing_image,
        })
    }
}
