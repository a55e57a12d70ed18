use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use crate::http::state::AppState;

pub const STATUS_BODY: &str = "UP";
pub const UPDATED_BODY: &str = "updated video being displayed!";

/// Manual trigger: a bare form that submits `?video=<id>` back to `/`.
pub const UPDATE_FORM: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>vidremote</title>
</head>
<body>
    <form>
        <input name="video">
        <button>update video!</button>
    </form>
</body>
</html>"#;

/// Liveness probe. No state is touched.
pub async fn status() -> &'static str {
    STATUS_BODY
}

/// `/?video=<id>`: show `id` on the display. Without an id, serve the form.
///
/// Only the first `video` pair counts. The id is not validated. A delivery
/// failure is logged; the caller still gets the confirmation.
pub async fn show(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let video = params
        .iter()
        .find(|(key, _)| key == "video")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();

    if video.is_empty() {
        return Html(UPDATE_FORM).into_response();
    }

    if let Err(e) = state.remote.show(video).await {
        tracing::warn!("display update for {:?} failed: {}", video, e);
    }

    UPDATED_BODY.into_response()
}
