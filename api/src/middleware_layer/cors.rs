//! Permissive CORS for the relay: any origin may call it.
//!
//! Preflight `OPTIONS` requests are answered here with `204` before they
//! reach routing; every other response gets the allow headers stamped on
//! the way out.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header},
    middleware::Next,
    response::Response,
};

pub async fn permissive_cors(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut res = Response::new(Body::empty());
        *res.status_mut() = StatusCode::NO_CONTENT;
        allow_headers(res.headers_mut());
        return res;
    }

    let mut res = next.run(req).await;
    allow_headers(res.headers_mut());
    res
}

fn allow_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
}
