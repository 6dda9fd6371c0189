//! # DetailCard Component
//!
//! The Detail screen once its fetch has resolved. Shows six fields of the
//! record in a 3x2 grid. A failed fetch leaves `record` empty and the card
//! renders only its header and the way back.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::api::CharacterRecord;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct DetailCard<'a> {
    pub record: Option<&'a CharacterRecord>,
    pub palette: Palette,
}

impl DetailCard<'_> {
    /// (label, value) pairs, two per row.
    fn fields(record: &CharacterRecord) -> [[(&'static str, String); 2]; 3] {
        [
            [
                ("Name", record.name.clone()),
                ("Birth Year", record.birth_year.clone()),
            ],
            [
                ("Gender", record.gender.to_string()),
                ("Skin color", record.skin_color.clone()),
            ],
            [
                ("Hair color", record.hair_color.clone()),
                ("Eye color", record.eye_color.clone()),
            ],
        ]
    }

    fn field_line(&self, label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default()
                    .fg(self.palette.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(self.palette.text)),
        ])
    }
}

impl Component for DetailCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, grid_area, back_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(1),
        ])
        .areas(area);

        let name = self.record.map(|r| r.name.as_str()).unwrap_or_default();
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Character detail",
                Style::default()
                    .fg(self.palette.title)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{name}'s Details"),
                Style::default().fg(self.palette.muted),
            )),
        ]);
        frame.render_widget(header, header_area);

        if let Some(record) = self.record {
            let rows = Layout::vertical([Constraint::Length(3); 3]).split(grid_area);
            for (row_area, pair) in rows.iter().zip(Self::fields(record)) {
                let [left, right] =
                    Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(*row_area);
                for (cell, (label, value)) in [left, right].into_iter().zip(pair) {
                    let paragraph = Paragraph::new(self.field_line(label, value))
                        .block(Block::bordered().border_style(Style::default().fg(self.palette.border)));
                    frame.render_widget(paragraph, cell);
                }
            }
        }

        let back = Paragraph::new(Span::styled(
            "Go back to List (Esc)",
            Style::default()
                .fg(self.palette.link)
                .add_modifier(Modifier::UNDERLINED),
        ));
        frame.render_widget(back, back_area);
    }
}
