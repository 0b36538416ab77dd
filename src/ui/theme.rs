use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub label: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub error: Style,
    pub button: Style,
    pub display_label: Style,
    pub display_value: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::new().color(Color::Cyan).bold(),
            label: Style::new(),
            placeholder: Style::new().color(Color::DarkGrey),
            focused: Style::new().bold(),
            error: Style::new().color(Color::Red),
            button: Style::new().color(Color::Yellow).bold(),
            display_label: Style::new().color(Color::DarkGrey),
            display_value: Style::new().color(Color::Green),
        }
    }
}
