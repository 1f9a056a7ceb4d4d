use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// API routes answer with JSON, pages with HTML.
pub fn error_response(err: ServerError, is_api: bool) -> Response {
    if err.status() >= 500 {
        tracing::error!("request failed: {err}");
    } else {
        tracing::debug!("request rejected: {err}");
    }

    if is_api {
        json_error_response(&err)
    } else {
        html_error_response(&err)
    }
}

pub fn json_error_response(err: &ServerError) -> Response {
    let body = json!({ "message": err.public_message() }).to_string();

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Build an HTML error page
pub fn html_error_response(err: &ServerError) -> Response {
    let status = err.status();
    let markup = crate::templates::pages::error_page(status, &err.public_message());

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
