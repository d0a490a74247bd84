//! The request boundary: one JSON body in, one JSON response out.
//!
//! This is the narrow contract the surrounding HTTP layer consumes. It stays
//! framework-free on purpose: the embedding server hands the raw body here
//! and forwards the resulting status, body, and CORS header.

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde_json::json;

use crate::layout::Layout;
use crate::render::{self, SheetOptions};

/// Rendering carries no persisted identity, so any origin may call it.
pub const ALLOW_ORIGIN: &str = "*";

/// Status plus serialized JSON body; the header value is constant but
/// carried so the embedding layer forwards the cross-origin contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    pub allow_origin: &'static str,
}

impl ApiResponse {
    fn ok(svg: String) -> ApiResponse {
        ApiResponse {
            status: 200,
            body: json!({ "svg": svg }).to_string(),
            allow_origin: ALLOW_ORIGIN,
        }
    }

    fn error(status: u16, message: impl AsRef<str>) -> ApiResponse {
        ApiResponse {
            status,
            body: json!({ "error": message.as_ref() }).to_string(),
            allow_origin: ALLOW_ORIGIN,
        }
    }
}

/// Handle one render request.
///
/// A body without a `rooms` field is rejected with 400 before the renderer
/// runs; a present-but-empty `rooms` list reaches the renderer and comes
/// back 200 with a placeholder document. Renderer errors and panics both
/// surface as 500 with the message — the operation is pure, so retrying
/// without changing the input cannot help.
pub fn handle_render_request(body: &str) -> ApiResponse {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => return ApiResponse::error(400, format!("invalid JSON: {err}")),
    };
    if value.get("rooms").is_none() {
        return ApiResponse::error(400, "missing required field: rooms");
    }

    let layout: Layout = match serde_json::from_value(value) {
        Ok(layout) => layout,
        Err(err) => return ApiResponse::error(400, format!("invalid layout: {err}")),
    };

    let opts = SheetOptions::default();
    match catch_unwind(AssertUnwindSafe(|| render::render(&layout, &opts))) {
        Ok(Ok(svg)) => ApiResponse::ok(svg),
        Ok(Err(err)) => ApiResponse::error(500, err.to_string()),
        Err(_) => ApiResponse::error(500, "internal rendering fault"),
    }
}
