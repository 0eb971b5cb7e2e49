//! Editor authentication extractor.
//!
//! Editing rights come from an `Authorization: Bearer <token>` header matching
//! the configured editor token. Requests without it are plain visitors; the
//! extractor never rejects, the views decide what a visitor may do.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use secrecy::ExposeSecret;

use crate::state::AppState;
use crate::views::EditorContext;

/// Extractor resolving the request's [`EditorContext`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Editor(editor): Editor) -> impl IntoResponse {
///     format!("editing: {}", editor.is_authenticated)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Editor(pub EditorContext);

impl FromRequestParts<AppState> for Editor {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let is_authenticated = presented.is_some_and(|token| {
            tokens_match(token, state.config().editor_token.expose_secret())
        });

        if presented.is_some() && !is_authenticated {
            tracing::warn!("Rejected editor token");
        }

        Ok(Self(EditorContext { is_authenticated }))
    }
}

/// Compare two tokens without short-circuiting on the first differing byte.
fn tokens_match(presented: &str, expected: &str) -> bool {
    let (a, b) = (presented.as_bytes(), expected.as_bytes());
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
