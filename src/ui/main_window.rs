use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Event, Font},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::messages::Message;
use crate::app::settings::AppSettings;

const MENU_HEIGHT: i32 = 30;
const TOOLBAR_HEIGHT: i32 = 36;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    /// Welcome screen with New / Open buttons.
    pub startup_screen: Flex,
    pub title_frame: Frame,
    pub new_button: Button,
    pub open_button: Button,
    /// Toolbar plus editor, hidden until a document is loaded.
    pub editor_screen: Flex,
    pub save_button: Button,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
}

/// A row that keeps `button` at a fixed width, centered.
fn centered_button(label: &str, width: i32) -> (Flex, Button) {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    Frame::default();
    let button = Button::default().with_label(label);
    Frame::default();
    row.fixed(&button, width);
    row.end();
    (row, button)
}

fn build_startup_screen(sender: &Sender<Message>) -> (Flex, Frame, Button, Button) {
    let mut screen = Flex::default();
    screen.set_type(FlexType::Column);
    screen.set_spacing(16);

    Frame::default();

    let mut title_frame = Frame::default().with_label("MarkUp");
    title_frame.set_label_size(28);
    title_frame.set_label_font(Font::HelveticaBold);
    screen.fixed(&title_frame, 60);

    let (new_row, mut new_button) = centered_button("New File", 200);
    screen.fixed(&new_row, 50);
    let (open_row, mut open_button) = centered_button("Open File", 200);
    screen.fixed(&open_row, 50);

    Frame::default();
    screen.end();

    new_button.emit(*sender, Message::FileNew);
    open_button.emit(*sender, Message::FileOpen);

    (screen, title_frame, new_button, open_button)
}

fn build_editor_screen(
    sender: &Sender<Message>,
    settings: &AppSettings,
) -> (Flex, Button, TextEditor, TextBuffer) {
    let mut screen = Flex::default();
    screen.set_type(FlexType::Column);

    let mut toolbar = Flex::default();
    toolbar.set_type(FlexType::Row);
    toolbar.set_margin(4);
    let mut save_button = Button::default().with_label("Save");
    toolbar.fixed(&save_button, 80);
    Frame::default();
    toolbar.end();
    screen.fixed(&toolbar, TOOLBAR_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::default();
    text_editor.set_buffer(buffer.clone());
    text_editor.set_text_font(Font::Courier);
    text_editor.set_text_size(settings.font_size as i32);
    if settings.word_wrap_enabled {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    screen.end();

    save_button.emit(*sender, Message::FileSave);

    (screen, save_button, text_editor, buffer)
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(
        100,
        100,
        settings.window_width,
        settings.window_height,
        "MarkUp",
    );
    wind.set_xclass("MarkUp");

    let mut flex = Flex::new(0, 0, settings.window_width, settings.window_height, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let (startup_screen, title_frame, new_button, open_button) = build_startup_screen(sender);
    let (mut editor_screen, save_button, text_editor, mut buffer) =
        build_editor_screen(sender, settings);
    editor_screen.hide();

    flex.end();
    wind.end();
    wind.resizable(&flex);

    // Every change to the text, typed or programmatic, is mirrored into the store
    buffer.add_modify_callback({
        let s = *sender;
        move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::BufferModified);
            }
        }
    });

    // Only a real close request goes through the unsaved-work check; FLTK also
    // fires the window callback on Escape.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        startup_screen,
        title_frame,
        new_button,
        open_button,
        editor_screen,
        save_button,
        text_editor,
        buffer,
    }
}
