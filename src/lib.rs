use wasm_bindgen::prelude::wasm_bindgen;
use yew::Renderer;

pub mod components;
pub mod hooks;
pub mod phone;
pub mod player;

use components::App;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    Renderer::<App>::new().render();
}
