/// All messages that can be sent through the FLTK channel.
/// Each widget or menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    ExportHtml,
    FileQuit,
    WindowClose,

    // Editor buffer changed (typing, paste, programmatic set_text)
    BufferModified,

    // View
    ShowOutline,
    PreviewInBrowser,
    ToggleWordWrap,
    ToggleToc,

    // Tools & Help
    CheckMarkdown,
    ShowAbout,
}
