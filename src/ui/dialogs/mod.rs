pub mod about;
pub mod outline;

use fltk::{app, prelude::*, window::Window};

/// Run a dialog's event loop, closing it if the app starts quitting
/// while the dialog is still open.
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}
