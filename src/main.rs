use fltk::{app, prelude::*};

use markup::app::state::AppState;
use markup::app::{AppSettings, Message};
use markup::ui::main_window::build_main_window;
use markup::ui::menu::build_menu;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    log::debug!("Loaded settings from {}", AppSettings::get_config_path().display());

    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender, &settings);

    let mut state = AppState::new(widgets, settings);
    state.apply_theme();
    state.show_current_screen();
    state.window.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::ExportHtml => state.export_html(),
                Message::FileQuit | Message::WindowClose => {
                    if state.file_quit() {
                        app.quit();
                    }
                }
                Message::BufferModified => state.on_buffer_modified(),
                Message::ShowOutline => state.show_outline(),
                Message::PreviewInBrowser => state.preview_in_browser(),
                Message::ToggleWordWrap => state.toggle_word_wrap(),
                Message::ToggleToc => state.toggle_toc(),
                Message::CheckMarkdown => state.check_markdown(),
                Message::ShowAbout => state.show_about(),
            }
        }
    }
}
