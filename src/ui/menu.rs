use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::settings::AppSettings;

/// Menu paths used when syncing check marks or enabling items.
pub const WORD_WRAP_ITEM: &str = "View/Toggle Word Wrap";
pub const TOC_ITEM: &str = "View/Include Table of Contents";

/// Items that only make sense with a document open.
pub const DOCUMENT_ITEMS: &[&str] = &[
    "File/Save",
    "File/Save As...",
    "File/Export HTML...",
    "View/Outline...",
    "View/Preview in Browser",
    "Tools/Check Markdown",
];

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Export HTML...", Shortcut::Ctrl | 'e', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::ExportHtml) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    menu.add("View/Outline...", Shortcut::Ctrl | 'l', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowOutline) });
    menu.add("View/Preview in Browser", Shortcut::Ctrl | 'm', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::PreviewInBrowser) });
    let ww_flag = if settings.word_wrap_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(WORD_WRAP_ITEM, Shortcut::None, ww_flag, { let s = *s; move |_| s.send(Message::ToggleWordWrap) });
    let toc_flag = if settings.include_toc { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(TOC_ITEM, Shortcut::None, toc_flag, { let s = *s; move |_| s.send(Message::ToggleToc) });

    // Tools
    menu.add("Tools/Check Markdown", Shortcut::Ctrl | Shortcut::Shift | 'k', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CheckMarkdown) });

    // Help
    menu.add("Help/About MarkUp", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
