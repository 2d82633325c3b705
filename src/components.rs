pub use crate::components::app::App;

pub mod app;
pub mod button;
pub mod call_to_action;
pub mod card;
pub mod heading;
pub mod modal;
