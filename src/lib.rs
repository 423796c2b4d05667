#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod env;
mod frame;
mod input;
mod mount;
mod paint;
mod style;

pub use mount::{mount_grid_background, mount_water_background, BackgroundHandle};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("notchclip-web starting");
    Ok(())
}
