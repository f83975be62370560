pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

/// Entry point called from the wasm binary: wires up logging, waits
/// for the runtime configuration, then mounts the application.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting rhweb frontend");

    wasm_bindgen_futures::spawn_local(async {
        config::init().await;
        router::mount_app();
    });
}
