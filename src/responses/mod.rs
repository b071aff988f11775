pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use assets::{css_response, script_response, text_response, STYLESHEET};
pub use errors::error_to_response;
pub use html::{html_response, no_content, see_other};
pub use json::json_response;
