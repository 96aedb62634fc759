use axum::{
    body::Body,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use super::{OpenApiDocument, document, etag::inm_matches};

fn validators(doc: &OpenApiDocument) -> [(header::HeaderName, String); 2] {
    [
        (header::ETAG, doc.etag.clone()),
        (header::LAST_MODIFIED, doc.last_modified.clone()),
    ]
}

fn respond(headers: &HeaderMap, with_body: bool) -> Response {
    let doc = document();
    if inm_matches(headers, &doc.etag) {
        return (StatusCode::NOT_MODIFIED, validators(doc)).into_response();
    }

    let body = if with_body {
        Body::from(doc.body.clone())
    } else {
        Body::empty()
    };
    (
        StatusCode::OK,
        validators(doc),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// GET /openapi.json. A matching `If-None-Match` yields 304.
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    respond(&headers, true)
}

/// HEAD /openapi.json.
pub async fn head_openapi(headers: HeaderMap) -> Response {
    respond(&headers, false)
}
