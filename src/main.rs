/// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use picklist::{PicklistApp, PicklistConfig};

    let loaded = PicklistConfig::from_env();
    let level = loaded
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or_default()
        .to_level_filter();
    picklist_ui::init_logging(level);

    let config = PicklistConfig::or_default(loaded);
    log::debug!("Configuration: {:?}", config);
    let settings = picklist::settings(&config, Vec::new());

    if let Err(e) = picklist_ui::run(PicklistApp::new(config), settings) {
        log::error!("Application error: {}", e);
        std::process::exit(1);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
