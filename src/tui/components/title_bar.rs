//! # TitleBar Component
//!
//! Top status bar: app title followed by the status text of the view on
//! screen.
//!
//! Stateless. All fields are props, so the title bar renders exactly what it
//! is given:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message().to_string(), palette);
//! title_bar.render(frame, title_area);
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct TitleBar {
    /// Status message (e.g. "Request failed", "Leia Organa's Details")
    pub status_message: String,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(status_message: String, palette: Palette) -> Self {
        Self {
            status_message,
            palette,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Star Wars Characters",
            Style::default()
                .fg(self.palette.title)
                .add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(self.palette.muted),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorMode;
    use crate::tui::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let palette = Theme::new(ColorMode::Dark).palette();
        let mut title_bar = TitleBar::new("82 characters found".to_string(), palette);

        let text = render_to_string(&mut title_bar);
        assert!(text.contains("Star Wars Characters"));
        assert!(text.contains("| 82 characters found"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let palette = Theme::new(ColorMode::Light).palette();
        let mut title_bar = TitleBar::new(String::new(), palette);

        let text = render_to_string(&mut title_bar);
        assert!(text.contains("Star Wars Characters"));
        assert!(!text.contains('|'));
    }
}
