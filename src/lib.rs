#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod interaction;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::interaction::SiteConfig;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(SiteConfig::global().log_level()) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(App);
}
