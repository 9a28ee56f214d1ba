//! Shared controller state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The session reducer and the per-form in-flight gates live in `pv-ui-core`;
//! this module only hosts the single instances for the page.

use pv_api_types::Operation;
use pv_ui_core::{InFlightGate, SubmitRejected, UiSession};
use std::cell::RefCell;

thread_local! {
    static SESSION: RefCell<UiSession> = RefCell::new(UiSession::new());
    static EMBED_GATE: RefCell<InFlightGate> = RefCell::new(InFlightGate::new());
    static DECRYPT_GATE: RefCell<InFlightGate> = RefCell::new(InFlightGate::new());
}

/// Run a closure with mutable access to the UI session.
pub fn with_session_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut UiSession) -> R,
{
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

fn with_gate<F, R>(op: Operation, f: F) -> R
where
    F: FnOnce(&mut InFlightGate) -> R,
{
    match op {
        Operation::Embed => EMBED_GATE.with(|g| f(&mut g.borrow_mut())),
        Operation::Decrypt => DECRYPT_GATE.with(|g| f(&mut g.borrow_mut())),
    }
}

/// Acquire the in-flight slot for `op`'s form.
pub fn begin_submission(op: Operation) -> Result<(), SubmitRejected> {
    with_gate(op, |g| g.begin())
}

/// Release the in-flight slot. Called from the processing guard's drop, so it
/// runs on every exit path.
pub fn finish_submission(op: Operation) {
    with_gate(op, |g| g.finish());
}
