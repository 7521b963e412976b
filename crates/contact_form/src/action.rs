use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::state::Field;

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    FocusNext,
    FocusPrev,
    /// Replace a field's value with the full new text (per keystroke).
    SetField(Field, String),
    Submit,
}
