//! # Pager Component
//!
//! "Previous" / "Next" affordances under the list. Each one is drawn only
//! when the page carries the matching cursor; a missing cursor means there is
//! nothing to press.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct Pager {
    pub has_previous: bool,
    pub has_next: bool,
    pub palette: Palette,
}

impl Component for Pager {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
        let style = Style::default()
            .fg(self.palette.link)
            .add_modifier(Modifier::UNDERLINED);

        if self.has_previous {
            frame.render_widget(
                Paragraph::new("< Previous (p)").style(style).alignment(Alignment::Center),
                left,
            );
        }
        if self.has_next {
            frame.render_widget(
                Paragraph::new("Next (n) >").style(style).alignment(Alignment::Center),
                right,
            );
        }
    }
}
