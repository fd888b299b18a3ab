//! # ChoiceList Component
//!
//! The selectable options below the content pane. Stateless: selection and
//! focus are core state, passed in as props each frame. Each row carries a
//! 2-character cursor marker — `"> "` on the selected row, `"  "` elsewhere.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::border_style;

pub struct ChoiceList<'a> {
    choices: &'a [String],
    selected: usize,
    focused: bool,
}

impl<'a> ChoiceList<'a> {
    pub fn new(choices: &'a [String], selected: usize, focused: bool) -> Self {
        Self {
            choices,
            selected,
            focused,
        }
    }

    fn rows(&self) -> Vec<Line<'a>> {
        self.choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let marker = if i == self.selected { "> " } else { "  " };
                Line::raw(format!("{marker}{choice}"))
            })
            .collect()
    }
}

impl<'a> Component for ChoiceList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style(self.focused));
        let paragraph = Paragraph::new(self.rows()).block(block);
        frame.render_widget(paragraph, area);
    }
}
