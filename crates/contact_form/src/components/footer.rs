use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{components::Component, core::state::FormModel, style};

/// Footer component
///
/// Renders a compact bottom bar with the key hints for the form. Not
/// focusable, never consumes events.
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Footer {
    fn height_constraint(&self, _model: &FormModel) -> Constraint {
        Constraint::Fill(1)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _model: &FormModel) -> Result<()> {
        if area.height == 0 {
            return Ok(());
        }
        // Pin the hint line to the bottom of whatever space is left over.
        let line_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        let hints = Line::from(Span::styled(
            " Tab/↓ next · Shift-Tab/↑ prev · Enter submit · Esc quit · Ctrl-Z suspend",
            style::hint(),
        ));
        f.render_widget(Paragraph::new(hints), line_area);
        Ok(())
    }
}
