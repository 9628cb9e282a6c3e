/// Storefront - client-side interactivity for a static store template
/// Built with Rust + WASM

pub mod cart;
pub mod price;
pub mod render;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod ui;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Set up panic hook and logging, then wire the page. Runs when the
// module is instantiated, so the controllers see the full document.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("storefront script loaded");
    ui::boot();
}
