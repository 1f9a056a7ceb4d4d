pub mod attachment;
pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

pub use attachment::{attachment_response, XLSX_CONTENT_TYPE};
pub use errors::{error_response, html_error_response, json_error_response};
pub use html::html_response;
pub use json::{json_message, json_response};
