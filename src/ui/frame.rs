use crate::core::field::Field;
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::span::{Span, SpanLine, line_width};
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use crate::ui::view::{ViewNode, ViewTree};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Focused input and the display-width offset of the cursor inside its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCursor {
    pub field: Field,
    pub offset: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct FrameRenderer<'a> {
    theme: &'a Theme,
    focus: Option<FocusCursor>,
    frame: RenderFrame,
}

impl<'a> FrameRenderer<'a> {
    pub fn render(
        tree: &ViewTree,
        focus: Option<FocusCursor>,
        theme: &'a Theme,
        size: TerminalSize,
    ) -> RenderFrame {
        let mut renderer = Self {
            theme,
            focus,
            frame: RenderFrame::default(),
        };
        for node in tree.nodes() {
            renderer.node(node);
        }

        let mut frame = renderer.frame;
        let width = size.width as usize;
        frame.lines = frame
            .lines
            .into_iter()
            .map(|line| fit_width(line, width))
            .collect();
        if let Some(cursor) = frame.cursor.as_mut() {
            cursor.col = cursor.col.min(size.width.saturating_sub(1));
        }
        frame
    }

    fn node(&mut self, node: &ViewNode) {
        match node {
            ViewNode::Heading { text } => {
                self.push(vec![Span::styled(text.clone(), self.theme.header)]);
                self.push(Vec::new());
            }
            ViewNode::Input {
                field,
                label,
                placeholder,
                value,
            } => self.input(*field, label, placeholder, value),
            ViewNode::Error { message, .. } => {
                self.push(vec![Span::styled(
                    format!("  Error: {}", message),
                    self.theme.error,
                )]);
            }
            ViewNode::Button { label } => {
                self.push(Vec::new());
                self.push(vec![Span::styled(format!("[ {} ]", label), self.theme.button)]);
                self.push(vec![Span::styled(
                    "enter submit · tab next field · esc quit",
                    self.theme.placeholder,
                )]);
            }
            ViewNode::Text { text, test_id } => {
                let style = self.text_style(test_id.is_some());
                self.push(vec![Span::styled(text.clone(), style)]);
            }
            ViewNode::Section { children, .. } => {
                if children.iter().any(|child| !child.children().is_empty()) {
                    for child in children {
                        self.node(child);
                    }
                } else {
                    self.row(children);
                }
            }
        }
    }

    fn input(&mut self, field: Field, label: &str, placeholder: &str, value: &str) {
        let focused = self.focus.filter(|focus| focus.field == field);
        let label_style = if focused.is_some() {
            self.theme.label.merge(self.theme.focused)
        } else {
            self.theme.label
        };

        let mut line = vec![Span::styled(label, label_style), Span::new(": ")];
        if focused.is_some() {
            line.push(Span::new("["));
        }
        if value.is_empty() && !placeholder.is_empty() {
            line.push(Span::styled(placeholder, self.theme.placeholder));
        } else {
            line.push(Span::new(value));
        }
        if focused.is_some() {
            line.push(Span::new("]"));
        }

        if let Some(focus) = focused {
            let col = label.width() + 2 + 1 + focus.offset;
            self.frame.cursor = Some(CursorPos {
                col: u16::try_from(col).unwrap_or(u16::MAX),
                row: u16::try_from(self.frame.lines.len()).unwrap_or(u16::MAX),
            });
        }
        self.push(line);
    }

    fn row(&mut self, children: &[ViewNode]) {
        let mut line = Vec::new();
        for (idx, child) in children.iter().enumerate() {
            if idx > 0 {
                line.push(Span::new(" "));
            }
            let style = self.text_style(child.test_id().is_some());
            line.push(Span::styled(child.text_content(), style));
        }
        self.push(line);
    }

    fn text_style(&self, is_value: bool) -> Style {
        if is_value {
            self.theme.display_value
        } else {
            self.theme.display_label
        }
    }

    fn push(&mut self, line: SpanLine) {
        self.frame.lines.push(line);
    }
}

fn fit_width(line: SpanLine, width: usize) -> SpanLine {
    if line_width(&line) <= width {
        return line;
    }

    let mut remaining = width;
    let mut out = Vec::with_capacity(line.len());
    for span in line {
        if remaining == 0 {
            break;
        }
        if span.width() <= remaining {
            remaining -= span.width();
            out.push(span);
            continue;
        }
        let mut text = String::new();
        for ch in span.text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if ch_width > remaining {
                break;
            }
            remaining -= ch_width;
            text.push(ch);
        }
        out.push(Span::styled(text, span.style));
        break;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::core::reducer::{handle_input, handle_submit};
    use crate::core::state::FormState;
    use crate::ui::render::render;
    use crate::ui::span::line_text;

    const SIZE: TerminalSize = TerminalSize {
        width: 80,
        height: 24,
    };

    fn text_lines(frame: &RenderFrame) -> Vec<String> {
        frame.lines.iter().map(|line| line_text(line)).collect()
    }

    #[test]
    fn focused_input_is_bracketed_with_cursor() {
        let state = handle_input(FormState::new(), Field::FirstName, "app");
        let tree = render(&state, &FormConfig::default());
        let theme = Theme::default();
        let focus = FocusCursor {
            field: Field::FirstName,
            offset: 3,
        };
        let frame = FrameRenderer::render(&tree, Some(focus), &theme, SIZE);
        let lines = text_lines(&frame);

        assert_eq!(lines[2], "First Name: [app]");
        assert_eq!(lines[3], "  Error: firstName must have at least 5 characters.");
        assert_eq!(frame.cursor, Some(CursorPos { col: 16, row: 2 }));
    }

    #[test]
    fn empty_inputs_show_placeholders() {
        let tree = render(&FormState::new(), &FormConfig::default());
        let theme = Theme::default();
        let frame = FrameRenderer::render(&tree, None, &theme, SIZE);
        let lines = text_lines(&frame);
        assert!(lines.contains(&"Last Name: Burke".to_string()));
        assert!(lines.contains(&"Message: ".to_string()));
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn submission_renders_one_row_per_value() {
        let state = handle_input(FormState::new(), Field::FirstName, "test1");
        let state = handle_input(state, Field::LastName, "test2");
        let state = handle_input(state, Field::Email, "test@test.com");
        let tree = render(&handle_submit(state), &FormConfig::default());
        let theme = Theme::default();
        let lines = text_lines(&FrameRenderer::render(&tree, None, &theme, SIZE));

        assert_eq!(
            lines,
            vec![
                "Contact Form".to_string(),
                String::new(),
                "First Name: test1".to_string(),
                "Last Name: test2".to_string(),
                "Email: test@test.com".to_string(),
            ]
        );
    }

    #[test]
    fn long_lines_are_cut_at_terminal_width() {
        let line = vec![Span::new("abc"), Span::new("défgh")];
        let fitted = fit_width(line, 5);
        assert_eq!(line_text(&fitted), "abcdé");
    }
}
