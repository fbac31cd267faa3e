use wasm_bindgen_futures::spawn_local;

rust_i18n::i18n!("locales", fallback = "en");

mod api;
mod components;
pub mod config;
pub mod i18n;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Boots the reset page: logging first, then runtime config, then the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }
    log::info!("starting reset-password frontend");

    spawn_local(async move {
        let config = config::load().await;
        log::info!(
            "runtime config loaded (api: {}, locale: {})",
            config.api_base_url,
            config.locale.code()
        );
        router::mount_app(config);
    });
}
