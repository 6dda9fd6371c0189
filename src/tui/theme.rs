//! # Theme
//!
//! The one place that knows about the color scheme. Rendering asks for a
//! `Palette` once per frame and hands it to components as a prop.

use ratatui::style::Color;

use crate::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub link: Color,
    pub spinner: Color,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    mode: ColorMode,
}

impl Theme {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        match self.mode {
            ColorMode::Dark => Palette {
                background: Color::Rgb(0x22, 0x22, 0x22),
                text: Color::Rgb(0xF3, 0xF3, 0xF3),
                muted: Color::Rgb(0x88, 0x88, 0x88),
                title: Color::White,
                border: Color::DarkGray,
                highlight_bg: Color::Rgb(0x44, 0x44, 0x44),
                highlight_fg: Color::Yellow,
                link: Color::Cyan,
                spinner: Color::Rgb(0x00, 0xFF, 0x00),
            },
            ColorMode::Light => Palette {
                background: Color::Rgb(0xF3, 0xF3, 0xF3),
                text: Color::Rgb(0x22, 0x22, 0x22),
                muted: Color::Rgb(0x66, 0x66, 0x66),
                title: Color::Black,
                border: Color::Gray,
                highlight_bg: Color::Rgb(0xDD, 0xDD, 0xDD),
                highlight_fg: Color::Blue,
                link: Color::Blue,
                spinner: Color::Rgb(0x00, 0xFF, 0x00),
            },
        }
    }
}
