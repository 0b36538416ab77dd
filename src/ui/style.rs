#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    DarkGrey,
    Red,
    Green,
    Yellow,
    Cyan,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        self.color.is_none() && !self.bold
    }

    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(self, other: Style) -> Self {
        Self {
            color: other.color.or(self.color),
            bold: self.bold || other.bold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Style};

    #[test]
    fn merge_prefers_overlay_color() {
        let base = Style::new().color(Color::White);
        let merged = base.merge(Style::new().color(Color::Red).bold());
        assert_eq!(merged.color, Some(Color::Red));
        assert!(merged.bold);
        assert!(!merged.is_plain());
        assert!(Style::new().is_plain());
    }
}
