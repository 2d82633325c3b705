pub use crate::hooks::http::{use_http, JsonPost, RequestState, UseHttpHandle};
pub use crate::hooks::input::{use_formatted_input, use_input, InputState, UseInputHandle};

pub mod http;
pub mod input;
