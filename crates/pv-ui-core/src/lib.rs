//! # pv-ui-core
//!
//! Pure controller logic for the PixelVeil frontend: the x0 input validator,
//! the tab/preview/decrypted-message session reducer, and the submission
//! state machine that turns an HTTP reply into a display outcome.
//!
//! Nothing here touches the DOM. The wasm shell (`stego-wasm`) feeds events
//! and replies in as plain data and applies the returned consequences
//! mechanically, which keeps every user-visible branch natively testable.

pub mod session;
pub mod submission;
pub mod validate;

pub use session::{SessionChange, Tab, UiSession};
pub use submission::{
    DECRYPT_FAILURE_FALLBACK, DECRYPT_SUCCESS_NOTICE, EMBED_FAILURE_FALLBACK,
    EMBED_SUCCESS_NOTICE, HttpReply, InFlightGate, Outcome, ReplyBody, SubmitRejected,
    TransportError, route_reply,
};
pub use validate::{MAX_SAFE_INTEGER, X0Error, constraint_message, validate_x0};
