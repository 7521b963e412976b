//! Post-submit summary card.
//!
//! Renders exclusively from the `Submission` snapshot, so later edits to the
//! live fields never change what is displayed here. Absent until the first
//! valid submit.

use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::{
    components::Component,
    core::state::{Field, FormModel, Submission},
    style,
};

const TITLE: &str = "You submitted:";

/// Key/value rows of the summary, in display order. The message row is only
/// present when the submitted message was non-empty.
pub fn summary_rows(submission: &Submission) -> Vec<(&'static str, &str)> {
    let mut rows = vec![
        (Field::FirstName.key(), submission.first_name.as_str()),
        (Field::LastName.key(), submission.last_name.as_str()),
        (Field::Email.key(), submission.email.as_str()),
    ];
    if let Some(message) = submission.message_block() {
        rows.push((Field::Message.key(), message));
    }
    rows
}

#[derive(Default)]
pub struct SummaryCard;

impl SummaryCard {
    pub fn new() -> Self {
        Self
    }
}

impl Component for SummaryCard {
    fn height_constraint(&self, model: &FormModel) -> Constraint {
        match &model.submission {
            Some(submission) => Constraint::Length(summary_rows(submission).len() as u16 + 2),
            None => Constraint::Length(0),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, model: &FormModel) -> Result<()> {
        let Some(submission) = &model.submission else {
            return Ok(());
        };

        let block = Block::bordered().title(Span::styled(TITLE, style::title()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines: Vec<Line> = summary_rows(submission)
            .into_iter()
            .map(|(key, value)| {
                Line::from(vec![
                    Span::styled(format!("{key:<12}"), style::label()),
                    Span::styled(value, style::value()),
                ])
            })
            .collect();
        f.render_widget(Paragraph::new(lines), inner);
        Ok(())
    }
}
