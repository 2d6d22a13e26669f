//! Browser entry point, built by Trunk with `--features csr`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("mounting signin-portal");
        leptos::mount::mount_to_body(signin_portal::app::App);
    }
}
