use owo_colors::Style;
use std::sync::OnceLock;

use crate::company::Rarity;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub info: Style,
    pub dim: Style,
    pub rarity_low: Style,
    pub rarity_medium: Style,
    pub rarity_high: Style,
}

impl Theme {
    /// Colors only when stdout is a terminal.
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            info: Style::new().magenta(),
            dim: Style::new().white().dimmed(),
            rarity_low: Style::new().bright_black(),
            rarity_medium: Style::new().blue(),
            rarity_high: Style::new().yellow().bold(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            rarity_low: Style::new(),
            rarity_medium: Style::new(),
            rarity_high: Style::new(),
        }
    }

    pub fn rarity(&self, rarity: Rarity) -> Style {
        match rarity {
            Rarity::Low => self.rarity_low.clone(),
            Rarity::Medium => self.rarity_medium.clone(),
            Rarity::High => self.rarity_high.clone(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
