//! Theme support module for the ruler GUI.
//!
//! Provides color schemes for the ruler strip (background, baseline, tick
//! marks, labels) with built-in themes and a centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use timeruler::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Dark baseline: {:?}", dark.colors.baseline);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Color palette for the ruler strip.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Strip background, painted on clear
    pub background: Color32,
    /// The horizontal baseline
    pub baseline: Color32,
    /// Long (major) tick marks
    pub major_tick: Color32,
    /// Short (minor) tick marks
    pub minor_tick: Color32,
    /// Second labels
    pub label: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        &self.themes[&self.current_theme_name]
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light strip with dark marks".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            baseline: Color32::from_rgb(60, 60, 60),
            major_tick: Color32::from_rgb(60, 60, 60),
            minor_tick: Color32::from_rgb(160, 160, 160),
            label: Color32::from_rgb(0, 0, 0),
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark strip with light marks".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(16, 16, 16),
            baseline: Color32::from_rgb(220, 220, 220),
            major_tick: Color32::from_rgb(220, 220, 220),
            minor_tick: Color32::from_rgb(110, 110, 110),
            label: Color32::from_rgb(255, 255, 255),
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            // Background: #282a36
            background: hex_to_color32("#282a36"),
            // Foreground: #f8f8f2
            baseline: hex_to_color32("#f8f8f2"),
            major_tick: hex_to_color32("#f8f8f2"),
            // Comment: #6272a4
            minor_tick: hex_to_color32("#6272a4"),
            // Cyan: #8be9fd
            label: hex_to_color32("#8be9fd"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}
