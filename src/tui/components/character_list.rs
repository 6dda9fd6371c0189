//! # CharacterList Component
//!
//! The names on the current page, one per row, with the selected row
//! highlighted. Created each frame from borrowed page data.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::api::CharacterRecord;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct CharacterList<'a> {
    pub people: &'a [CharacterRecord],
    pub selected: usize,
    /// Whether arrow keys move the selection (Prop)
    pub focused: bool,
    pub palette: Palette,
}

impl Component for CharacterList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(self.palette.highlight_fg)
        } else {
            Style::default().fg(self.palette.border)
        };
        let block = Block::bordered()
            .title("This is a list of Star Wars Characters")
            .border_style(border_style);

        if self.people.is_empty() {
            let empty = Paragraph::new("No characters")
                .style(Style::default().fg(self.palette.muted))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .people
            .iter()
            .map(|record| ListItem::new(record.name.as_str()))
            .collect();

        let highlight = if self.focused {
            Style::default()
                .bg(self.palette.highlight_bg)
                .fg(self.palette.highlight_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.palette.highlight_bg)
        };

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(self.palette.text))
            .highlight_style(highlight)
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected.min(self.people.len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
