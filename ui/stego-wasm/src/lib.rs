//! PixelVeil WASM Frontend
//!
//! Browser controller for the steganography tool: tab-scoped UI state, image
//! preview lifecycle, x0 validation, and the embed/decrypt submission
//! lifecycle. Pure decision logic lives in `pv-ui-core`; this crate is the
//! DOM shell around it.

pub mod dom;
pub mod download;
pub mod events;
pub mod overlay;
pub mod present;
pub mod preview;
pub mod state;
pub mod submit;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Construct the controller: resolve the element registry once, then wire
/// all event listeners against it.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;
    events::bind_events(&els);
    Ok(())
}
