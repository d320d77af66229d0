//! Color schemes for the terminal browser

use std::cell::RefCell;

use ratatui::prelude::Color;

pub use replay_stats_core::config::ThemeName;

/// Theme color palette
#[derive(Debug, Clone)]
pub struct Theme {
    /// Headers, section titles and key hints
    pub accent: Color,
    /// Highlighted (winning) stat cells
    pub winner: Color,
    pub text: Color,
    /// Dimmed text, borders of inactive panels
    pub subtle: Color,
    pub error: Color,
    pub border: Color,
    /// Background of the selected list row
    pub selection_bg: Color,
}

impl Theme {
    pub fn green_theme() -> Self {
        Self {
            accent: Color::Rgb(114, 208, 127),      // #72d07f
            winner: Color::Rgb(33, 186, 69),        // #21ba45
            text: Color::Rgb(204, 204, 204),
            subtle: Color::Rgb(117, 121, 133),      // #757985
            error: Color::Rgb(230, 110, 110),
            border: Color::Rgb(117, 121, 133),
            selection_bg: Color::Rgb(45, 49, 58),   // #2d313a
        }
    }

    pub fn purple_theme() -> Self {
        Self {
            accent: Color::Rgb(185, 132, 187),      // #b984bb
            winner: Color::Rgb(222, 170, 224),
            text: Color::Rgb(204, 204, 204),
            subtle: Color::Rgb(117, 121, 133),
            error: Color::Rgb(230, 110, 110),
            border: Color::Rgb(120, 90, 140),
            selection_bg: Color::Rgb(49, 0, 87),    // #310057
        }
    }

    pub fn monochrome_theme() -> Self {
        Self {
            accent: Color::White,
            winner: Color::White,
            text: Color::Rgb(220, 220, 220),
            subtle: Color::Rgb(128, 128, 128),
            error: Color::Rgb(220, 140, 140),
            border: Color::Rgb(100, 100, 100),
            selection_bg: Color::Rgb(60, 60, 60),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Green => Self::green_theme(),
            ThemeName::Purple => Self::purple_theme(),
            ThemeName::Monochrome => Self::monochrome_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::green_theme()
    }
}

thread_local! {
    static CURRENT_THEME: RefCell<Theme> = RefCell::new(Theme::default());
    static CURRENT_THEME_NAME: RefCell<ThemeName> = RefCell::new(ThemeName::default());
}

/// Set the current global theme
pub fn set_theme(name: ThemeName) {
    CURRENT_THEME.with(|t| {
        *t.borrow_mut() = Theme::from_name(name);
    });
    CURRENT_THEME_NAME.with(|n| {
        *n.borrow_mut() = name;
    });
}

pub fn current_theme_name() -> ThemeName {
    CURRENT_THEME_NAME.with(|n| *n.borrow())
}

pub fn accent() -> Color {
    CURRENT_THEME.with(|t| t.borrow().accent)
}

pub fn winner() -> Color {
    CURRENT_THEME.with(|t| t.borrow().winner)
}

pub fn text() -> Color {
    CURRENT_THEME.with(|t| t.borrow().text)
}

pub fn subtle() -> Color {
    CURRENT_THEME.with(|t| t.borrow().subtle)
}

pub fn error() -> Color {
    CURRENT_THEME.with(|t| t.borrow().error)
}

pub fn border() -> Color {
    CURRENT_THEME.with(|t| t.borrow().border)
}

pub fn selection_bg() -> Color {
    CURRENT_THEME.with(|t| t.borrow().selection_bg)
}
