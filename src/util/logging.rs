//! Console logging setup for the browser build.

/// Install the panic hook and the `console_log` backend at `level`.
///
/// Safe to call more than once; only the first logger install wins.
pub fn init(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
