//! Color theme for the demo menu.
//!
//! Dark and light variants are built from the same handful of role colors.

use ratatui::style::{Color, Modifier, Style};
use strum::{Display, EnumString};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the demo menu.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub warning: Color,

    pub item: Style,
    pub selected: Style,
    pub border: Style,
    pub title: Style,
    pub hint: Style,
    /// Header and footer rows.
    pub bar: Style,
}

/// Role colors one variant is built from.
struct Palette {
    background: Color,
    surface: Color,
    highlight: Color,
    text: Color,
    item: Color,
    hint: Color,
    border: Color,
    accent: Color,
    warning: Color,
}

const DARK: Palette = Palette {
    background: Color::Rgb(15, 23, 42),
    surface: Color::Rgb(30, 41, 59),
    highlight: Color::Rgb(51, 65, 85),
    text: Color::Rgb(241, 245, 249),
    item: Color::Rgb(203, 213, 225),
    hint: Color::Rgb(148, 163, 184),
    border: Color::Rgb(71, 85, 105),
    accent: Color::Rgb(96, 165, 250),
    warning: Color::Rgb(234, 179, 8),
};

const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    surface: Color::Rgb(241, 245, 249),
    highlight: Color::Rgb(226, 232, 240),
    text: Color::Rgb(15, 23, 42),
    item: Color::Rgb(51, 65, 85),
    hint: Color::Rgb(71, 85, 105),
    border: Color::Rgb(148, 163, 184),
    accent: Color::Rgb(29, 78, 216),
    warning: Color::Rgb(202, 138, 4),
};

impl Theme {
    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        let palette = match variant {
            ThemeVariant::Dark => &DARK,
            ThemeVariant::Light => &LIGHT,
        };
        let bold = Style::new().add_modifier(Modifier::BOLD);

        Self {
            variant,
            background: palette.background,
            foreground: palette.text,
            muted: palette.hint,
            accent: palette.accent,
            warning: palette.warning,
            item: Style::new().fg(palette.item),
            selected: bold.bg(palette.highlight).fg(palette.text),
            border: Style::new().fg(palette.border),
            title: bold.fg(palette.accent),
            hint: Style::new().fg(palette.hint),
            bar: Style::new().bg(palette.surface).fg(palette.text),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::from_variant(ThemeVariant::Light),
            ThemeVariant::Light => Self::from_variant(ThemeVariant::Dark),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_variant(ThemeVariant::Dark)
    }
}
