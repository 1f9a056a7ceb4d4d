use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File download: the browser saves the body under `filename`.
pub fn attachment_response(buffer: Vec<u8>, filename: &str, content_type: &str) -> ResultResp {
    let safe_name: String = filename
        .chars()
        .filter(|c| !matches!(c, '"' | '\\' | '\r' | '\n'))
        .collect();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{safe_name}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}
