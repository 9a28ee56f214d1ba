//! Submission state machine.
//!
//! A submission moves `Idle → Processing → {Succeeded, Failed} → Idle`. The
//! interesting part, which display outcome an HTTP reply produces, is the
//! pure function [`route_reply`], fed with the reply as plain data. The wasm
//! shell owns the suspension points (fetch, body decode) and applies the
//! returned [`Outcome`] without further branching.
//!
//! Overlapping submissions on one form are disallowed: each form owns an
//! [`InFlightGate`] and a submit while one is outstanding is rejected before
//! any prior result is reset.

use pv_api_types::{ApiError, DecryptResponse, Operation, STEGO_DOWNLOAD_FILENAME};
use thiserror::Error;

pub const EMBED_SUCCESS_NOTICE: &str = "Image embedded successfully.";
pub const DECRYPT_SUCCESS_NOTICE: &str = "Decryption successful.";
pub const EMBED_FAILURE_FALLBACK: &str = "An error occurred during embedding.";
pub const DECRYPT_FAILURE_FALLBACK: &str = "An error occurred during decryption.";

/// The request itself could not complete (connection refused, DNS, aborted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("network request failed: {0}")]
pub struct TransportError(pub String);

/// Body of a completed HTTP reply. Embed success bodies are binary; every
/// other body is structured text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    Bytes(Vec<u8>),
    Text(String),
}

impl ReplyBody {
    fn as_text(&self) -> Option<&str> {
        match self {
            ReplyBody::Text(t) => Some(t),
            ReplyBody::Bytes(_) => None,
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        match self {
            ReplyBody::Bytes(b) => b,
            ReplyBody::Text(t) => t.into_bytes(),
        }
    }
}

/// A completed HTTP reply, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What the shell must do once a submission resolves. In every case the
/// processing indicator is hidden afterwards; that is enforced by the shell's
/// guard, not encoded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Offer `image` as a download named `filename`, show the success notice.
    EmbedSucceeded {
        image: Vec<u8>,
        filename: &'static str,
    },
    /// Populate and reveal the decrypted-message display, show the notice.
    DecryptSucceeded { message: String },
    /// Show `message` in the operation's error container. For decrypt this
    /// also clears the decrypted-message display.
    Failed { message: String },
}

impl Outcome {
    /// The text the Result Presenter shows, and whether it is styled as an
    /// error.
    pub fn presentation(&self) -> (&str, bool) {
        match self {
            Outcome::EmbedSucceeded { .. } => (EMBED_SUCCESS_NOTICE, false),
            Outcome::DecryptSucceeded { .. } => (DECRYPT_SUCCESS_NOTICE, false),
            Outcome::Failed { message } => (message, true),
        }
    }
}

fn fallback(op: Operation) -> &'static str {
    match op {
        Operation::Embed => EMBED_FAILURE_FALLBACK,
        Operation::Decrypt => DECRYPT_FAILURE_FALLBACK,
    }
}

/// Turn the resolution of a submission into its display outcome.
///
/// - success status, embed: the whole body is the stego image;
/// - success status, decrypt: body must parse as `{"message": …}`;
/// - failure status: body should parse as `{"error": …}`, surfaced verbatim;
/// - transport failure, or any body that does not have the expected shape:
///   the operation's fixed generic message.
pub fn route_reply(op: Operation, reply: Result<HttpReply, TransportError>) -> Outcome {
    let reply = match reply {
        Ok(r) => r,
        Err(_) => {
            return Outcome::Failed {
                message: fallback(op).to_owned(),
            };
        }
    };

    if reply.ok() {
        match op {
            Operation::Embed => Outcome::EmbedSucceeded {
                image: reply.body.into_bytes(),
                filename: STEGO_DOWNLOAD_FILENAME,
            },
            Operation::Decrypt => match reply
                .body
                .as_text()
                .and_then(|t| serde_json::from_str::<DecryptResponse>(t).ok())
            {
                Some(parsed) => Outcome::DecryptSucceeded {
                    message: parsed.message,
                },
                None => Outcome::Failed {
                    message: fallback(op).to_owned(),
                },
            },
        }
    } else {
        let message = reply
            .body
            .as_text()
            .and_then(|t| serde_json::from_str::<ApiError>(t).ok())
            .map(|e| e.error)
            .unwrap_or_else(|| fallback(op).to_owned());
        Outcome::Failed { message }
    }
}

/// Attempted to submit a form whose previous submission has not resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a submission for this form is already in flight")]
pub struct SubmitRejected;

/// Per-form overlap protection. `begin` acquires the in-flight slot; `finish`
/// must be called exactly once per successful `begin`, on every exit path.
#[derive(Debug, Default)]
pub struct InFlightGate {
    in_flight: bool,
}

impl InFlightGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn begin(&mut self) -> Result<(), SubmitRejected> {
        if self.in_flight {
            return Err(SubmitRejected);
        }
        self.in_flight = true;
        Ok(())
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_bytes(bytes: &[u8]) -> Result<HttpReply, TransportError> {
        Ok(HttpReply {
            status: 200,
            body: ReplyBody::Bytes(bytes.to_vec()),
        })
    }

    fn reply(status: u16, text: &str) -> Result<HttpReply, TransportError> {
        Ok(HttpReply {
            status,
            body: ReplyBody::Text(text.to_owned()),
        })
    }

    #[test]
    fn embed_success_downloads_the_body_as_stego_image() {
        let body = b"\x89PNG\r\n\x1a\n...";
        let outcome = route_reply(Operation::Embed, ok_bytes(body));
        assert_eq!(
            outcome,
            Outcome::EmbedSucceeded {
                image: body.to_vec(),
                filename: "stego_image.png",
            }
        );
        assert_eq!(outcome.presentation(), (EMBED_SUCCESS_NOTICE, false));
    }

    #[test]
    fn embed_failure_surfaces_the_server_error_verbatim() {
        let outcome = route_reply(Operation::Embed, reply(400, r#"{"error":"image too small"}"#));
        assert_eq!(
            outcome,
            Outcome::Failed {
                message: "image too small".to_owned(),
            }
        );
        assert_eq!(outcome.presentation(), ("image too small", true));
    }

    #[test]
    fn decrypt_success_carries_the_message() {
        let outcome = route_reply(Operation::Decrypt, reply(200, r#"{"message":"hello world"}"#));
        assert_eq!(
            outcome,
            Outcome::DecryptSucceeded {
                message: "hello world".to_owned(),
            }
        );
        assert_eq!(outcome.presentation(), (DECRYPT_SUCCESS_NOTICE, false));
    }

    #[test]
    fn decrypt_failure_surfaces_the_server_error() {
        let outcome = route_reply(
            Operation::Decrypt,
            reply(422, r#"{"error":"no hidden message found"}"#),
        );
        assert_eq!(
            outcome,
            Outcome::Failed {
                message: "no hidden message found".to_owned(),
            }
        );
    }

    #[test]
    fn transport_failure_uses_the_operation_fallback() {
        let lost = || Err(TransportError("connection refused".to_owned()));
        assert_eq!(
            route_reply(Operation::Embed, lost()),
            Outcome::Failed {
                message: EMBED_FAILURE_FALLBACK.to_owned(),
            }
        );
        assert_eq!(
            route_reply(Operation::Decrypt, lost()),
            Outcome::Failed {
                message: DECRYPT_FAILURE_FALLBACK.to_owned(),
            }
        );
    }

    #[test]
    fn decrypt_success_without_message_field_falls_back() {
        let outcome = route_reply(Operation::Decrypt, reply(200, r#"{"status":"done"}"#));
        assert_eq!(
            outcome,
            Outcome::Failed {
                message: DECRYPT_FAILURE_FALLBACK.to_owned(),
            }
        );
    }

    #[test]
    fn error_status_with_unparseable_body_falls_back() {
        let outcome = route_reply(Operation::Embed, reply(500, "<html>Bad Gateway</html>"));
        assert_eq!(
            outcome,
            Outcome::Failed {
                message: EMBED_FAILURE_FALLBACK.to_owned(),
            }
        );
        // a binary failure body has no structured error either
        let outcome = route_reply(
            Operation::Decrypt,
            Ok(HttpReply {
                status: 500,
                body: ReplyBody::Bytes(vec![0xff, 0xfe]),
            }),
        );
        assert_eq!(
            outcome,
            Outcome::Failed {
                message: DECRYPT_FAILURE_FALLBACK.to_owned(),
            }
        );
    }

    #[test]
    fn second_submit_rejected_while_in_flight() {
        let mut gate = InFlightGate::new();
        assert_eq!(gate.begin(), Ok(()));
        assert_eq!(gate.begin(), Err(SubmitRejected));
        assert!(gate.is_in_flight());

        gate.finish();
        assert!(!gate.is_in_flight());
        assert_eq!(gate.begin(), Ok(()));
    }
}
