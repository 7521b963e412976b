//! The form body: labeled inputs, inline error annotations and the submit
//! control.
//!
//! Editing goes through `tui-input`: the component mirrors the focused
//! field's text in an `Input` and emits `Action::SetField` with the full new
//! value on every keystroke, so validation in the reducer re-runs per change
//! (there is no separate enter-to-edit mode; typing always edits the focused
//! field, matching how a plain form behaves).

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    action::Action,
    components::Component,
    core::state::{Field, FocusTarget, FormModel},
    style,
    tui::EventResponse,
};

/// Width of the label column; values start after it.
const LABEL_WIDTH: usize = 12;

const TITLE: &str = "Contact Form";
const SUBMIT_LABEL: &str = "[ Submit ]";

pub struct ContactForm {
    input: Input,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    /// Reload the editing buffer from the model's focused field. Called on
    /// init and whenever focus moves; intentionally not on `SetField`, which
    /// originates from this buffer and must keep its cursor position.
    fn sync_input(&mut self, model: &FormModel) {
        let value = model
            .focused_field()
            .map(|field| model.values.get(field).to_string())
            .unwrap_or_default();
        self.input = Input::default().with_value(value);
    }

    fn field_line<'a>(&'a self, field: Field, model: &'a FormModel) -> Line<'a> {
        let focused = model.focused_field() == Some(field);
        let label_style = if focused {
            style::label_focused()
        } else {
            style::label()
        };
        let value = if focused {
            self.input.value()
        } else {
            model.values.get(field)
        };
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
            Span::styled(value, style::value()),
        ])
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactForm {
    fn init(&mut self, model: &FormModel) -> Result<()> {
        self.sync_input(model);
        Ok(())
    }

    fn height_constraint(&self, model: &FormModel) -> Constraint {
        // Four value lines, one line per present error, a separator and the
        // submit control, plus the block border.
        let lines = Field::ALL.len() + model.errors.len() + 2;
        Constraint::Length(lines as u16 + 2)
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        model: &FormModel,
    ) -> Result<Option<EventResponse<Action>>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(Some(EventResponse::Stop(Action::Quit))),
                KeyCode::Char('z') => return Ok(Some(EventResponse::Stop(Action::Suspend))),
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => Ok(Some(EventResponse::Stop(Action::Quit))),
            KeyCode::Tab | KeyCode::Down => Ok(Some(EventResponse::Stop(Action::FocusNext))),
            KeyCode::BackTab | KeyCode::Up => Ok(Some(EventResponse::Stop(Action::FocusPrev))),
            KeyCode::Enter => match model.focused() {
                FocusTarget::Submit => Ok(Some(EventResponse::Stop(Action::Submit))),
                // Enter inside a text field advances focus; only the submit
                // control actually submits.
                FocusTarget::Input(_) => Ok(Some(EventResponse::Stop(Action::FocusNext))),
            },
            _ => {
                let Some(field) = model.focused_field() else {
                    return Ok(None);
                };
                self.input
                    .handle_event(&crossterm::event::Event::Key(key));
                Ok(Some(EventResponse::Stop(Action::SetField(
                    field,
                    self.input.value().to_string(),
                ))))
            }
        }
    }

    fn update(&mut self, action: &Action, model: &FormModel) -> Result<Option<Action>> {
        match action {
            Action::FocusNext | Action::FocusPrev => {
                self.sync_input(model);
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, model: &FormModel) -> Result<()> {
        let block = Block::bordered().title(Span::styled(TITLE, style::title()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        let mut cursor: Option<Position> = None;

        for field in Field::ALL {
            if model.focused_field() == Some(field) {
                let x = inner.x as usize + LABEL_WIDTH + self.input.visual_cursor();
                let y = inner.y as usize + lines.len();
                cursor = Some(Position::new(
                    (x as u16).min(inner.right().saturating_sub(1)),
                    y as u16,
                ));
            }
            lines.push(self.field_line(field, model));
            if let Some(msg) = model.errors.for_field(field) {
                lines.push(Line::from(Span::styled(
                    format!("{:LABEL_WIDTH$}▪ {msg}", ""),
                    style::error(),
                )));
            }
        }

        lines.push(Line::raw(""));
        let submit_focused = model.focused() == FocusTarget::Submit;
        lines.push(Line::from(Span::styled(
            SUBMIT_LABEL,
            style::submit(submit_focused),
        )));

        f.render_widget(Paragraph::new(lines), inner);
        if let Some(position) = cursor {
            f.set_cursor_position(position);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::reducer::reduce;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_emits_set_field_with_the_full_value() {
        let model = FormModel::new();
        let mut form = ContactForm::new();
        form.init(&model).unwrap();

        let response = form.handle_key_events(key(KeyCode::Char('J')), &model).unwrap();
        assert_eq!(
            response,
            Some(EventResponse::Stop(Action::SetField(
                Field::FirstName,
                "J".into()
            )))
        );

        let response = form.handle_key_events(key(KeyCode::Char('o')), &model).unwrap();
        assert_eq!(
            response,
            Some(EventResponse::Stop(Action::SetField(
                Field::FirstName,
                "Jo".into()
            )))
        );
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let model = FormModel::new();
        let mut form = ContactForm::new();
        form.init(&model).unwrap();
        form.handle_key_events(key(KeyCode::Char('a')), &model).unwrap();
        form.handle_key_events(key(KeyCode::Char('b')), &model).unwrap();

        let response = form.handle_key_events(key(KeyCode::Backspace), &model).unwrap();
        assert_eq!(
            response,
            Some(EventResponse::Stop(Action::SetField(
                Field::FirstName,
                "a".into()
            )))
        );
    }

    #[test]
    fn tab_and_back_tab_move_focus() {
        let model = FormModel::new();
        let mut form = ContactForm::new();
        assert_eq!(
            form.handle_key_events(key(KeyCode::Tab), &model).unwrap(),
            Some(EventResponse::Stop(Action::FocusNext))
        );
        assert_eq!(
            form.handle_key_events(key(KeyCode::BackTab), &model).unwrap(),
            Some(EventResponse::Stop(Action::FocusPrev))
        );
    }

    #[test]
    fn enter_in_a_field_advances_instead_of_submitting() {
        let model = FormModel::new();
        let mut form = ContactForm::new();
        assert_eq!(
            form.handle_key_events(key(KeyCode::Enter), &model).unwrap(),
            Some(EventResponse::Stop(Action::FocusNext))
        );
    }

    #[test]
    fn enter_on_the_submit_control_submits() {
        let mut model = FormModel::new();
        for _ in 0..Field::ALL.len() {
            reduce(&mut model, Action::FocusNext);
        }
        assert_eq!(model.focused(), FocusTarget::Submit);

        let mut form = ContactForm::new();
        form.init(&model).unwrap();
        assert_eq!(
            form.handle_key_events(key(KeyCode::Enter), &model).unwrap(),
            Some(EventResponse::Stop(Action::Submit))
        );

        // Printable keys have nowhere to go while the control is focused.
        assert_eq!(
            form.handle_key_events(key(KeyCode::Char('x')), &model).unwrap(),
            None
        );
    }

    #[test]
    fn esc_and_ctrl_c_quit_ctrl_z_suspends() {
        let model = FormModel::new();
        let mut form = ContactForm::new();
        assert_eq!(
            form.handle_key_events(key(KeyCode::Esc), &model).unwrap(),
            Some(EventResponse::Stop(Action::Quit))
        );
        assert_eq!(
            form.handle_key_events(ctrl('c'), &model).unwrap(),
            Some(EventResponse::Stop(Action::Quit))
        );
        assert_eq!(
            form.handle_key_events(ctrl('z'), &model).unwrap(),
            Some(EventResponse::Stop(Action::Suspend))
        );
    }

    #[test]
    fn focus_change_reloads_the_buffer_from_the_model() {
        let mut model = FormModel::new();
        reduce(
            &mut model,
            Action::SetField(Field::LastName, "Gearheart".into()),
        );

        let mut form = ContactForm::new();
        form.init(&model).unwrap();
        reduce(&mut model, Action::FocusNext);
        form.update(&Action::FocusNext, &model).unwrap();

        let response = form.handle_key_events(key(KeyCode::Char('!')), &model).unwrap();
        assert_eq!(
            response,
            Some(EventResponse::Stop(Action::SetField(
                Field::LastName,
                "Gearheart!".into()
            )))
        );
    }
}
