//! Shared styles. Kept to the handful of roles the form actually uses.

use ratatui::style::{Color, Modifier, Style};

pub fn label() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn label_focused() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn value() -> Style {
    Style::default()
}

pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn submit(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}
