use fltk::{
    app,
    button::Button,
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

/// Named color slots the UI asks the theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Background,
    Button,
    Disabled,
    DisabledButton,
    Error,
    Focus,
    Foreground,
    Header,
    Hover,
    Hyperlink,
    InputBackground,
    InputBorder,
    MenuBackground,
    OverlayBackground,
    PlaceHolder,
    Pressed,
    Primary,
    ScrollBar,
    Selection,
    Separator,
    Shadow,
    Success,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Composite a translucent color over an opaque base. FLTK has no alpha for
    /// widget colors, so translucent slots are flattened before use.
    pub fn over(self, base: Rgba) -> Rgba {
        let a = self.a as u32;
        let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8;
        Rgba::new(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b), 0xff)
    }

    pub fn to_fltk(self) -> Color {
        Color::from_rgb(self.r, self.g, self.b)
    }
}

/// Color lookup by slot.
pub trait Theme {
    fn color(&self, name: ThemeColor) -> Rgba;
}

/// Plain light palette used for any slot a theme does not override.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn color(&self, name: ThemeColor) -> Rgba {
        match name {
            ThemeColor::Background => Rgba::new(0xf0, 0xf0, 0xf0, 0xff),
            ThemeColor::Button => Rgba::new(0xe0, 0xe0, 0xe0, 0xff),
            ThemeColor::Disabled => Rgba::new(0xa0, 0xa0, 0xa0, 0xff),
            ThemeColor::DisabledButton => Rgba::new(0xe5, 0xe5, 0xe5, 0xff),
            ThemeColor::Error => Rgba::new(0xf4, 0x43, 0x36, 0xff),
            ThemeColor::Focus => Rgba::new(0x00, 0x6c, 0xff, 0xff),
            ThemeColor::Foreground => Rgba::new(0x00, 0x00, 0x00, 0xff),
            ThemeColor::Header => Rgba::new(0xd9, 0xd9, 0xd9, 0xff),
            ThemeColor::Hover => Rgba::new(0xc8, 0xc8, 0xc8, 0xff),
            ThemeColor::Hyperlink => Rgba::new(0x00, 0x6c, 0xff, 0xff),
            ThemeColor::InputBackground => Rgba::new(0xff, 0xff, 0xff, 0xff),
            ThemeColor::InputBorder => Rgba::new(0xc0, 0xc0, 0xc0, 0xff),
            ThemeColor::MenuBackground => Rgba::new(0xf0, 0xf0, 0xf0, 0xff),
            ThemeColor::OverlayBackground => Rgba::new(0xff, 0xff, 0xff, 0xff),
            ThemeColor::PlaceHolder => Rgba::new(0x88, 0x88, 0x88, 0xff),
            ThemeColor::Pressed => Rgba::new(0xb4, 0xb4, 0xb4, 0xff),
            ThemeColor::Primary => Rgba::new(0x00, 0x6c, 0xff, 0xff),
            ThemeColor::ScrollBar => Rgba::new(0xb4, 0xb4, 0xb4, 0xff),
            ThemeColor::Selection => Rgba::new(0xad, 0xd8, 0xe6, 0xff),
            ThemeColor::Separator => Rgba::new(0xe3, 0xe3, 0xe3, 0xff),
            ThemeColor::Shadow => Rgba::new(0x00, 0x00, 0x00, 0x33),
            ThemeColor::Success => Rgba::new(0x43, 0xa0, 0x47, 0xff),
            ThemeColor::Warning => Rgba::new(0xff, 0x98, 0x00, 0xff),
        }
    }
}

/// GitHub-like light palette. Unlisted slots come from [`DefaultTheme`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubTheme;

impl Theme for GitHubTheme {
    fn color(&self, name: ThemeColor) -> Rgba {
        match name {
            ThemeColor::Background => Rgba::new(0xe6, 0xea, 0xed, 0xff),
            ThemeColor::Button => Rgba::new(0xd0, 0xd7, 0xde, 0xff),
            ThemeColor::Disabled => Rgba::new(0x95, 0x9d, 0xa5, 0xff),
            ThemeColor::DisabledButton => Rgba::new(0xf6, 0xf8, 0xfa, 0x80),
            ThemeColor::Error => Rgba::new(0xcb, 0x24, 0x31, 0xff),
            ThemeColor::Focus => Rgba::new(0x03, 0x66, 0xd6, 0xff),
            ThemeColor::Foreground => Rgba::new(0x24, 0x29, 0x2e, 0xff),
            ThemeColor::Hover => Rgba::new(0xc8, 0xd3, 0xde, 0xff),
            ThemeColor::InputBackground => Rgba::new(0xff, 0xff, 0xff, 0xff),
            ThemeColor::InputBorder => Rgba::new(0xd1, 0xd5, 0xda, 0xff),
            ThemeColor::PlaceHolder => Rgba::new(0x6a, 0x73, 0x7d, 0xff),
            ThemeColor::Pressed => Rgba::new(0xb0, 0xb7, 0xbe, 0xff),
            ThemeColor::Primary => Rgba::new(0x03, 0x66, 0xd6, 0xff),
            ThemeColor::ScrollBar => Rgba::new(0xd1, 0xd5, 0xda, 0xff),
            ThemeColor::Selection => Rgba::new(0x03, 0x66, 0xd6, 0x40),
            ThemeColor::Separator => Rgba::new(0xe1, 0xe4, 0xe8, 0xff),
            ThemeColor::Shadow => Rgba::new(0x00, 0x00, 0x00, 0x20),
            ThemeColor::Success => Rgba::new(0x2e, 0xa4, 0x4f, 0xff),
            ThemeColor::Warning => Rgba::new(0xd1, 0x9a, 0x66, 0xff),
            ThemeColor::MenuBackground => Rgba::new(0xd0, 0xd7, 0xde, 0xff),
            ThemeColor::OverlayBackground => Rgba::new(0xd0, 0xd7, 0xde, 0xff),
            other => DefaultTheme.color(other),
        }
    }
}

/// Widgets that take colors from the theme.
pub struct ThemedWidgets<'a> {
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub editor: &'a mut TextEditor,
    pub title: &'a mut Frame,
    pub buttons: &'a mut [Button],
}

pub fn apply_theme(theme: &dyn Theme, widgets: ThemedWidgets<'_>) {
    let background = theme.color(ThemeColor::Background);
    let input_background = theme.color(ThemeColor::InputBackground);
    let foreground = theme.color(ThemeColor::Foreground);
    let selection = theme.color(ThemeColor::Selection).over(input_background);
    let disabled = theme.color(ThemeColor::Disabled);

    // Global scheme colors used by dialogs and any widget we don't touch below
    app::background(background.r, background.g, background.b);
    app::background2(input_background.r, input_background.g, input_background.b);
    app::foreground(foreground.r, foreground.g, foreground.b);
    app::set_selection_color(selection.r, selection.g, selection.b);
    app::set_inactive_color(disabled.r, disabled.g, disabled.b);

    widgets.window.set_color(background.to_fltk());
    widgets.window.set_label_color(foreground.to_fltk());

    widgets.menu.set_color(theme.color(ThemeColor::MenuBackground).to_fltk());
    widgets.menu.set_text_color(foreground.to_fltk());
    widgets.menu.set_selection_color(theme.color(ThemeColor::Hover).to_fltk());

    widgets.editor.set_color(input_background.to_fltk());
    widgets.editor.set_text_color(foreground.to_fltk());
    widgets.editor.set_cursor_color(theme.color(ThemeColor::Focus).to_fltk());
    widgets.editor.set_selection_color(selection.to_fltk());

    widgets.title.set_label_color(foreground.to_fltk());

    for button in widgets.buttons.iter_mut() {
        button.set_color(theme.color(ThemeColor::Button).to_fltk());
        button.set_selection_color(theme.color(ThemeColor::Pressed).to_fltk());
        button.set_label_color(foreground.to_fltk());
        button.redraw();
    }

    widgets.editor.redraw();
    widgets.menu.redraw();
    widgets.window.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_slots_override_default() {
        assert_eq!(
            GitHubTheme.color(ThemeColor::Background),
            Rgba::new(0xe6, 0xea, 0xed, 0xff)
        );
        assert_eq!(
            GitHubTheme.color(ThemeColor::Foreground),
            Rgba::new(0x24, 0x29, 0x2e, 0xff)
        );
        assert_ne!(
            GitHubTheme.color(ThemeColor::Background),
            DefaultTheme.color(ThemeColor::Background)
        );
    }

    #[test]
    fn test_unlisted_slots_fall_back() {
        for slot in [ThemeColor::Header, ThemeColor::Hyperlink] {
            assert_eq!(GitHubTheme.color(slot), DefaultTheme.color(slot));
        }
    }

    #[test]
    fn test_over_blends_alpha() {
        let white = Rgba::new(0xff, 0xff, 0xff, 0xff);
        assert_eq!(Rgba::new(0, 0, 0, 0xff).over(white), Rgba::new(0, 0, 0, 0xff));
        assert_eq!(Rgba::new(0, 0, 0, 0).over(white), white);

        let half = Rgba::new(0, 0, 0, 0x80).over(white);
        assert_eq!(half.a, 0xff);
        assert!(half.r > 0x70 && half.r < 0x80);
    }

    #[test]
    fn test_selection_is_flattened_to_light_blue() {
        let flat = GitHubTheme
            .color(ThemeColor::Selection)
            .over(GitHubTheme.color(ThemeColor::InputBackground));
        assert_eq!(flat.a, 0xff);
        assert!(flat.b > flat.r);
        assert!(flat.r > 0x03);
    }
}
