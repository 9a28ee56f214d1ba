use serde::{Deserialize, Serialize};

/// The two remote operations the controller drives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Embed,
    Decrypt,
}

impl Operation {
    /// Request path for the operation, relative to the service origin.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Embed => "/embed",
            Operation::Decrypt => "/decrypt",
        }
    }
}

/// Multipart field carrying the carrier / stego image file.
pub const FIELD_IMAGE: &str = "image";
/// Multipart field carrying the secret message (embed only).
pub const FIELD_MESSAGE: &str = "message";
/// Multipart field carrying the x0 chaos parameter, sent untransformed.
pub const FIELD_X0: &str = "x0";

/// Filename under which a successful embed result is offered for download.
pub const STEGO_DOWNLOAD_FILENAME: &str = "stego_image.png";

/// Success body of `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    pub message: String,
}

/// Failure body of either operation (non-success status).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_paths_match_service_routes() {
        assert_eq!(Operation::Embed.path(), "/embed");
        assert_eq!(Operation::Decrypt.path(), "/decrypt");
    }

    #[test]
    fn decrypt_response_deserializes_message_field() {
        let body: DecryptResponse = serde_json::from_str(r#"{"message":"hello world"}"#).unwrap();
        assert_eq!(body.message, "hello world");
    }

    #[test]
    fn api_error_deserializes_error_field() {
        let body: ApiError = serde_json::from_str(r#"{"error":"image too small"}"#).unwrap();
        assert_eq!(body.error, "image too small");
    }
}
