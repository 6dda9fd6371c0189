//! # SearchBox Component
//!
//! Single-line search field above the character list.
//!
//! The buffer is internal state: what the user is typing right now. The
//! List only learns about it on submit, so editing never triggers a fetch.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const PLACEHOLDER: &str = "Search a character....";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Enter pressed; carries the whole buffer
    Submit(String),
    ContentChanged,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
    /// Colors for this frame (Prop)
    pub palette: Palette,
}

impl SearchBox {
    pub fn new(initial: &str, palette: Palette) -> Self {
        Self {
            buffer: initial.to_string(),
            focused: true,
            palette,
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Search is single-line
                self.buffer
                    .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| SearchEvent::ContentChanged),
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette;

        let border_style = if self.focused {
            Style::default().fg(palette.highlight_fg)
        } else {
            Style::default().fg(palette.border)
        };

        let content = if self.buffer.is_empty() {
            Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(self.buffer.as_str(), Style::default().fg(palette.text))
        };

        let paragraph = Paragraph::new(content).block(
            Block::bordered()
                .title("Search character (Enter)")
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);

        if self.focused {
            let inner_width = area.width.saturating_sub(2);
            let text_width = self.buffer.width().min(u16::MAX as usize) as u16;
            let x = area.x + 1 + text_width.min(inner_width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}
