use color_eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Rect},
    Frame,
};

use crate::{
    action::Action,
    core::state::FormModel,
    tui::{Event, EventResponse},
};

pub mod footer;
pub mod form;
pub mod summary;

/// `Component` is a trait that represents a visual and interactive element of
/// the user interface.
///
/// Implementors are registered with the main application loop, receive
/// events, may react to dispatched actions, and are rendered from the shared
/// form model (components never mutate it directly; they emit actions).
pub trait Component {
    fn init(&mut self, _model: &FormModel) -> Result<()> {
        Ok(())
    }

    fn height_constraint(&self, model: &FormModel) -> Constraint;

    fn handle_events(
        &mut self,
        event: Event,
        model: &FormModel,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match event {
            Event::Key(key_event) => self.handle_key_events(key_event, model)?,
            Event::Mouse(mouse_event) => self.handle_mouse_events(mouse_event, model)?,
            _ => None,
        };
        Ok(r)
    }

    fn handle_key_events(
        &mut self,
        _key: KeyEvent,
        _model: &FormModel,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn handle_mouse_events(
        &mut self,
        _mouse: MouseEvent,
        _model: &FormModel,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn update(&mut self, _action: &Action, _model: &FormModel) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, model: &FormModel) -> Result<()>;
}
