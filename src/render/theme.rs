use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colour scheme for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Four-shade handheld green
    #[default]
    Classic,
    Midnight,
    Neon,
}

/// Colours for every kind of cell plus the HUD accent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub head: Color,
    pub body: Color,
    pub food: Color,
    pub wall: Color,
    pub obstacle: Color,
    pub accent: Color,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Self::Classic => Palette {
                background: Color::Rgb(0x9b, 0xbc, 0x0f),
                grid: Color::Rgb(0x8b, 0xac, 0x0f),
                head: Color::Rgb(0x0f, 0x38, 0x0f),
                body: Color::Rgb(0x30, 0x62, 0x30),
                food: Color::Rgb(0x22, 0x32, 0x00),
                wall: Color::Rgb(0x4a, 0x5a, 0x10),
                obstacle: Color::Rgb(0x6b, 0x1e, 0x1e),
                accent: Color::Yellow,
            },
            Self::Midnight => Palette {
                background: Color::Rgb(0x10, 0x14, 0x24),
                grid: Color::Rgb(0x2a, 0x30, 0x48),
                head: Color::Rgb(0x7f, 0xdb, 0xff),
                body: Color::Rgb(0x3a, 0x8f, 0xd9),
                food: Color::Rgb(0xff, 0x85, 0x85),
                wall: Color::Rgb(0x5c, 0x63, 0x7a),
                obstacle: Color::Rgb(0xff, 0xc1, 0x4d),
                accent: Color::Rgb(0x7f, 0xdb, 0xff),
            },
            Self::Neon => Palette {
                background: Color::Black,
                grid: Color::Rgb(0x22, 0x22, 0x22),
                head: Color::Rgb(0x39, 0xff, 0x14),
                body: Color::Rgb(0x1f, 0xb8, 0x0a),
                food: Color::Rgb(0xff, 0x14, 0x93),
                wall: Color::Rgb(0x00, 0xe5, 0xff),
                obstacle: Color::Rgb(0xff, 0xea, 0x00),
                accent: Color::Magenta,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Midnight => "Midnight",
            Self::Neon => "Neon",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Classic => Self::Midnight,
            Self::Midnight => Self::Neon,
            Self::Neon => Self::Classic,
        }
    }
}
