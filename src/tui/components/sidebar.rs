//! # Sidebar Component
//!
//! Static right-hand panel. Non-interactive: it never receives focus or
//! events, so it is a plain stateless renderer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct Sidebar<'a> {
    text: &'a str,
}

impl<'a> Sidebar<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Component for Sidebar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text)
            .block(Block::new().padding(Padding::left(1)))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_text_with_left_padding() {
        let backend = TestBackend::new(30, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut sidebar = Sidebar::new("lorem ipsum");
        terminal.draw(|f| sidebar.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.starts_with(" lorem ipsum"));
    }
}
