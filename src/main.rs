#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(portal::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
