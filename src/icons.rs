//! Icon service for managing different icon themes
//!
//! Provides a centralized way to pick the glyphs used in the UI, supporting
//! emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Marker shown in front of a pending task.
    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "🔳",
            IconTheme::Unicode => "□",
            IconTheme::Ascii => "[ ]",
        }
    }

    /// Marker shown in front of a completed task.
    #[must_use]
    pub fn task_done(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "✅",
            IconTheme::Unicode => "✓",
            IconTheme::Ascii => "[X]",
        }
    }

    /// Glyph used in the header title.
    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "📝",
            IconTheme::Unicode => "▸",
            IconTheme::Ascii => ">",
        }
    }

    /// Glyph used in the delete confirmation dialog title.
    #[must_use]
    pub fn warning(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "⚠️",
            IconTheme::Unicode => "⚠",
            IconTheme::Ascii => "!",
        }
    }
}
