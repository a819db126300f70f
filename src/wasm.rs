use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::constants::WEB_FONT_URL;
use crate::{PicklistApp, PicklistConfig};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::spawn_local(run_app());
}

async fn run_app() {
    web_sys::console::log_1(&"picklist starting...".into());
    web_sys::console::log_1(
        &"Note: winit uses exceptions for control flow, exception errors below are expected."
            .into(),
    );

    let loaded = PicklistConfig::from_page();
    let level = loaded
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or_default()
        .to_level_filter();
    picklist_ui::init_logging(level);
    let config = PicklistConfig::or_default(loaded);

    // Browsers expose no system fonts to the text shaper
    let fonts = match fetch_bytes(WEB_FONT_URL).await {
        Ok(bytes) => vec![bytes],
        Err(e) => {
            log::warn!("Failed to load {}: {:?}", WEB_FONT_URL, e);
            Vec::new()
        }
    };

    let settings = crate::settings(&config, fonts);
    if let Err(e) = picklist_ui::run(PicklistApp::new(config), settings) {
        log::error!("Application error: {}", e);
    }
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    let buffer = JsFuture::from(response.array_buffer()?).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
