use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app,
    browser::HoldBrowser,
    button::Button,
    enums::{Event, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::markdown::OutlineEntry;

/// Browser row for one heading: indented by level, line number on the right.
///
/// Rows start with `@.` so FLTK never reads `@` inside a title as a format code.
pub fn outline_row_label(entry: &OutlineEntry) -> String {
    let indent = "    ".repeat(entry.level.saturating_sub(1));
    format!("@.{}{}    (line {})", indent, entry.title, entry.line)
}

/// Show the document outline. Returns the line of the heading the user picked.
pub fn show_outline_dialog(entries: &[OutlineEntry]) -> Option<usize> {
    let mut dialog = Window::default()
        .with_size(420, 460)
        .with_label("Outline")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 440, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut browser = HoldBrowser::default();
    browser.set_text_font(Font::Helvetica);
    browser.set_text_size(14);
    for entry in entries {
        browser.add(&outline_row_label(entry));
    }
    if entries.is_empty() {
        let mut empty = Frame::default().with_label("No headings in this document");
        empty.set_label_size(12);
        flex.fixed(&empty, 25);
    } else {
        browser.select(1);
    }

    let mut buttons = Flex::default();
    buttons.set_type(fltk::group::FlexType::Row);
    Frame::default();
    let mut go_btn = Button::default().with_label("Go");
    let mut cancel_btn = Button::default().with_label("Cancel");
    buttons.fixed(&go_btn, 80);
    buttons.fixed(&cancel_btn, 80);
    buttons.end();
    flex.fixed(&buttons, 32);

    flex.end();
    dialog.end();
    dialog.make_resizable(true);
    if entries.is_empty() {
        go_btn.deactivate();
    }

    let chosen: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));
    let lines: Vec<usize> = entries.iter().map(|e| e.line).collect();

    let pick = {
        let chosen = chosen.clone();
        let browser = browser.clone();
        let dialog = dialog.clone();
        move || {
            let row = browser.value();
            if row >= 1 {
                if let Some(line) = lines.get(row as usize - 1) {
                    chosen.set(Some(*line));
                    dialog.clone().hide();
                }
            }
        }
    };

    let pick_go = pick.clone();
    go_btn.set_callback(move |_| pick_go());

    // Double-click on a row jumps straight away
    let pick_click = pick;
    browser.set_callback(move |_| {
        if app::event() == Event::Released && app::event_clicks() {
            pick_click();
        }
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    dialog.show();
    run_dialog(&dialog);

    chosen.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, level: usize, line: usize) -> OutlineEntry {
        OutlineEntry {
            title: title.to_string(),
            level,
            line,
        }
    }

    #[test]
    fn test_row_label_indents_by_level() {
        assert_eq!(outline_row_label(&entry("Intro", 1, 1)), "@.Intro    (line 1)");
        assert_eq!(
            outline_row_label(&entry("Details", 3, 12)),
            "@.        Details    (line 12)"
        );
    }

    #[test]
    fn test_row_label_keeps_at_signs() {
        let label = outline_row_label(&entry("Mail @home", 2, 4));
        assert!(label.starts_with("@."));
        assert!(label.contains("Mail @home"));
    }
}
