mod app;
mod components;
mod hooks;
mod models;
mod pages;
mod services;
mod state;
mod stores;
mod utils;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Realvista web starting...");

    yew::Renderer::<App>::new().render();
}
