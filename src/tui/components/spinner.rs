//! # Spinner Component
//!
//! Blocking loading indicator. Takes over the whole body while a view waits
//! on its fetch.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner {
    pub frame_index: usize,
    pub color: Color,
}

impl Component for Spinner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [center] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let glyph = FRAMES[self.frame_index % FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(
                glyph,
                Style::default().fg(self.color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Loading...", Style::default().fg(self.color)),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), center);
    }
}
