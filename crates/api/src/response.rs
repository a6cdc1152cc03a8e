//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{"success": true, ...payload}` envelope. Use
//! [`Success`] instead of ad-hoc `serde_json::json!` so payload shapes are
//! typed and serialization stays consistent; the failure counterpart is
//! produced by [`AppError`](crate::error::AppError).

use serde::Serialize;

/// Standard success envelope: `{"success": true}` merged with the payload's
/// own fields.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Success::new(QuestionsPayload { questions, total_questions })))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// Payload carrying only a deleted entity id.
#[derive(Debug, Serialize)]
pub struct DeletedPayload {
    pub deleted: medley_core::types::DbId,
}
