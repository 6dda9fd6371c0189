use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::core::state::{App, DetailView, ListView};
use crate::tui::component::Component;
use crate::tui::components::{CharacterList, DetailCard, Pager, Spinner, TitleBar};
use crate::tui::theme::{Palette, Theme};
use crate::tui::{InputMode, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, theme: &Theme, spinner_frame: usize) {
    use Constraint::{Length, Min};

    // Queried once; everything below receives it as a prop.
    let palette = theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        frame.area(),
    );

    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.status_message().to_string(), palette).render(frame, title_area);

    match app.navigator.detail() {
        Some(detail) => draw_detail(frame, body_area, detail, palette, spinner_frame),
        None => draw_list(frame, body_area, app.navigator.list(), tui, palette, spinner_frame),
    }

    frame.render_widget(
        Span::styled(help_text(app, tui), Style::default().fg(palette.muted)),
        help_area,
    );
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    list: &ListView,
    tui: &mut TuiState,
    palette: Palette,
    spinner_frame: usize,
) {
    if list.is_loading() {
        draw_spinner(frame, area, palette, spinner_frame);
        return;
    }

    use Constraint::{Length, Min};
    let [search_area, list_area, pager_area] =
        Layout::vertical([Length(3), Min(0), Length(1)]).areas(area);

    tui.search_box.focused = tui.input_mode == InputMode::Search;
    tui.search_box.palette = palette;
    tui.search_box.render(frame, search_area);

    CharacterList {
        people: &list.page.people,
        selected: list.selected,
        focused: tui.input_mode == InputMode::Results,
        palette,
    }
    .render(frame, list_area);

    Pager {
        has_previous: list.page.has_previous(),
        has_next: list.page.has_next(),
        palette,
    }
    .render(frame, pager_area);
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailView,
    palette: Palette,
    spinner_frame: usize,
) {
    if detail.is_loading {
        draw_spinner(frame, area, palette, spinner_frame);
        return;
    }
    DetailCard {
        record: detail.record.as_ref(),
        palette,
    }
    .render(frame, area);
}

fn draw_spinner(frame: &mut Frame, area: Rect, palette: Palette, spinner_frame: usize) {
    Spinner {
        frame_index: spinner_frame,
        color: palette.spinner,
    }
    .render(frame, area);
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    if app.navigator.detail().is_some() {
        return "Esc back · q quit";
    }
    if app.is_loading() {
        return "Ctrl+C quit";
    }
    match tui.input_mode {
        InputMode::Search => "Enter search · Tab results · Ctrl+C quit",
        InputMode::Results => "↑↓ select · Enter open · ←/p previous · →/n next · / search · q quit",
    }
}
