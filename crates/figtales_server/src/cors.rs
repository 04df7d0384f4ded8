//! CORS headers shared by every response.

use axum::http::{HeaderValue, header};
use axum::response::Response;

/// `Access-Control-Allow-Origin` value.
pub const ALLOW_ORIGIN: &str = "*";

/// `Access-Control-Allow-Headers` value.
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Stamp the CORS headers onto `response`.
pub(crate) async fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}
