use crate::config::FormConfig;
use crate::core::field::Field;
use crate::core::reducer::{Action, FormEvent, Reducer};
use crate::core::state::{FormState, Phase};
use crate::input::{KeyResult, TextInput};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, TerminalSize};
use crate::ui::frame::{FocusCursor, FrameRenderer, RenderFrame};
use crate::ui::render::render;
use crate::ui::theme::Theme;
use crate::ui::view::ViewTree;
use tracing::trace;

/// Interactive contact form: routes key events to the focused field's edit
/// buffer and every resulting change through the reducer.
pub struct App {
    state: FormState,
    config: FormConfig,
    theme: Theme,
    inputs: [TextInput; 4],
    focus: usize,
    should_exit: bool,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        Self {
            state: FormState::new(),
            config,
            theme: Theme::default(),
            inputs: Default::default(),
            focus: 0,
            should_exit: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn focused_field(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn view(&self) -> ViewTree {
        render(&self.state, &self.config)
    }

    pub fn frame(&self, size: TerminalSize) -> RenderFrame {
        let focus = match self.state.phase() {
            Phase::Editing => Some(FocusCursor {
                field: self.focused_field(),
                offset: self.inputs[self.focus].cursor_offset(),
            }),
            Phase::Submitted => None,
        };
        FrameRenderer::render(&self.view(), focus, &self.theme, size)
    }

    /// Returns the form event produced by the key, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormEvent> {
        trace!(?key, "key");
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                self.should_exit = true;
                None
            }
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
                self.should_exit = true;
                None
            }
            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                self.move_focus(1);
                None
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.move_focus(-1);
                None
            }
            (code, modifiers) => self.update_focused_input(code, modifiers),
        }
    }

    pub fn dispatch(&mut self, action: Action) -> FormEvent {
        let event = Reducer::reduce(&mut self.state, action);
        self.sync_inputs();
        event
    }

    fn move_focus(&mut self, direction: isize) {
        let len = self.inputs.len() as isize;
        let next = (self.focus as isize + direction).rem_euclid(len);
        self.focus = next as usize;
    }

    fn update_focused_input(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<FormEvent> {
        let field = self.focused_field();
        let input = &mut self.inputs[self.focus];

        let before = input.value().to_string();
        let result = input.handle_key(code, modifiers);
        let after = input.value().to_string();

        let mut event = None;
        if before != after {
            event = Some(Reducer::reduce(
                &mut self.state,
                Action::Input {
                    field,
                    value: after,
                },
            ));
        }
        if result == KeyResult::Submit {
            event = Some(Reducer::reduce(&mut self.state, Action::Submit));
        }
        event
    }

    /// Align edit buffers with the state after an action applied from outside.
    fn sync_inputs(&mut self) {
        for field in Field::ALL {
            let input = &mut self.inputs[field.index()];
            let value = self.state.value(field);
            if input.value() != value {
                input.set_value(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::view::ViewNode;

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyEvent::plain(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn tab_cycles_focus_both_ways() {
        let mut app = App::new(FormConfig::default());
        assert_eq!(app.focused_field(), Field::FirstName);
        app.handle_key(KeyEvent::plain(KeyCode::BackTab));
        assert_eq!(app.focused_field(), Field::Message);
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        app.handle_key(KeyEvent::plain(KeyCode::Down));
        assert_eq!(app.focused_field(), Field::LastName);
    }

    #[test]
    fn typing_updates_state_live() {
        let mut app = App::new(FormConfig::default());
        type_str(&mut app, "app");
        assert_eq!(app.state().value(Field::FirstName), "app");
        assert_eq!(app.view().errors().len(), 1);
    }

    #[test]
    fn cursor_moves_do_not_touch_fields() {
        let mut app = App::new(FormConfig::default());
        let event = app.handle_key(KeyEvent::plain(KeyCode::Left));
        assert_eq!(event, None);
        assert!(!app.state().is_touched(Field::FirstName));
    }

    #[test]
    fn enter_submits_and_reports_outcome() {
        let mut app = App::new(FormConfig::default());
        let event = app.handle_key(KeyEvent::plain(KeyCode::Enter));
        assert!(matches!(event, Some(FormEvent::SubmitRejected { ref failing }) if failing.len() == 3));

        type_str(&mut app, "test1");
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        type_str(&mut app, "test2");
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        type_str(&mut app, "test@test.com");
        let event = app.handle_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(event, Some(FormEvent::SubmitAccepted));
        assert_eq!(app.state().phase(), Phase::Submitted);
        assert!(app.frame(TerminalSize { width: 80, height: 24 }).cursor.is_none());
    }

    #[test]
    fn typing_after_submit_reopens_the_form() {
        let mut app = App::new(FormConfig::default());
        app.dispatch(Action::Input {
            field: Field::FirstName,
            value: "test1".into(),
        });
        app.dispatch(Action::Input {
            field: Field::LastName,
            value: "test2".into(),
        });
        app.dispatch(Action::Input {
            field: Field::Email,
            value: "test@test.com".into(),
        });
        app.dispatch(Action::Submit);
        assert_eq!(app.state().phase(), Phase::Submitted);

        app.handle_key(KeyEvent::plain(KeyCode::Char('!')));
        assert_eq!(app.state().phase(), Phase::Editing);
        assert_eq!(app.state().value(Field::FirstName), "test1!");
        assert!(matches!(app.view().nodes()[1], ViewNode::Input { .. }));
    }

    #[test]
    fn escape_and_ctrl_c_exit() {
        let mut app = App::new(FormConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_exit());

        let mut app = App::new(FormConfig::default());
        app.handle_key(KeyEvent::plain(KeyCode::Esc));
        assert!(app.should_exit());
    }
}
