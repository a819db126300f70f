//! Dark and light color palettes.
//!
//! Widgets read colors from the global theme instead of hardcoding them.

use std::sync::OnceLock;

use crate::renderer::Color;

/// A complete color theme for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main application background
    pub background: Color,
    /// Panel background
    pub surface: Color,

    pub input_bg: Color,
    pub input_bg_focused: Color,

    pub border: Color,
    pub border_focused: Color,

    /// High-contrast text
    pub text_primary: Color,
    /// Labels and secondary information
    pub text_secondary: Color,
    pub text_placeholder: Color,

    pub button_bg: Color,
    pub button_hover: Color,

    /// Focus rings, check marks, active elements
    pub accent: Color,
    /// Text selection background
    pub selection: Color,
    pub cursor: Color,

    pub scrollbar_track: Color,
    pub scrollbar_thumb: Color,
    pub scrollbar_thumb_drag: Color,

    /// Popup panel background
    pub popup_bg: Color,
    /// Background of the active (hovered or keyboard-focused) row
    pub option_active: Color,
    /// Background of selected rows
    pub option_selected: Color,

    /// Drop shadow under popups
    pub shadow: Color,
    pub divider: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(0.09, 0.09, 0.11),
            surface: Color::rgb(0.13, 0.13, 0.16),
            input_bg: Color::rgb(0.11, 0.11, 0.14),
            input_bg_focused: Color::rgb(0.14, 0.14, 0.18),

            border: Color::rgb(0.20, 0.20, 0.26),
            border_focused: Color::rgb(0.40, 0.58, 0.98),

            text_primary: Color::rgb(0.95, 0.95, 0.97),
            text_secondary: Color::rgb(0.58, 0.58, 0.65),
            text_placeholder: Color::rgb(0.42, 0.42, 0.50),

            button_bg: Color::rgb(0.18, 0.18, 0.22),
            button_hover: Color::rgb(0.26, 0.26, 0.32),

            accent: Color::rgb(0.40, 0.58, 0.98),
            selection: Color::rgba(0.40, 0.58, 0.98, 0.25),
            cursor: Color::rgb(0.40, 0.58, 0.98),

            scrollbar_track: Color::rgba(0.12, 0.12, 0.15, 0.3),
            scrollbar_thumb: Color::rgba(0.35, 0.35, 0.42, 0.6),
            scrollbar_thumb_drag: Color::rgba(0.55, 0.55, 0.62, 0.9),

            popup_bg: Color::rgba(0.11, 0.11, 0.14, 0.98),
            option_active: Color::rgb(0.22, 0.22, 0.28),
            option_selected: Color::rgba(0.40, 0.58, 0.98, 0.12),

            shadow: Color::rgba(0.0, 0.0, 0.0, 0.5),
            divider: Color::rgba(1.0, 1.0, 1.0, 0.06),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::rgb(0.97, 0.97, 0.98),
            surface: Color::rgb(1.0, 1.0, 1.0),
            input_bg: Color::rgb(0.99, 0.99, 1.0),
            input_bg_focused: Color::rgb(1.0, 1.0, 1.0),

            border: Color::rgb(0.82, 0.82, 0.86),
            border_focused: Color::rgb(0.35, 0.52, 0.92),

            text_primary: Color::rgb(0.12, 0.12, 0.15),
            text_secondary: Color::rgb(0.45, 0.45, 0.52),
            text_placeholder: Color::rgb(0.62, 0.62, 0.68),

            button_bg: Color::rgb(0.94, 0.94, 0.96),
            button_hover: Color::rgb(0.88, 0.88, 0.92),

            accent: Color::rgb(0.35, 0.52, 0.92),
            selection: Color::rgba(0.35, 0.52, 0.92, 0.2),
            cursor: Color::rgb(0.35, 0.52, 0.92),

            scrollbar_track: Color::rgba(0.88, 0.88, 0.90, 0.3),
            scrollbar_thumb: Color::rgba(0.55, 0.55, 0.60, 0.5),
            scrollbar_thumb_drag: Color::rgba(0.38, 0.38, 0.45, 0.8),

            popup_bg: Color::rgba(1.0, 1.0, 1.0, 0.98),
            option_active: Color::rgb(0.92, 0.94, 0.98),
            option_selected: Color::rgba(0.35, 0.52, 0.92, 0.1),

            shadow: Color::rgba(0.0, 0.0, 0.0, 0.25),
            divider: Color::rgba(0.0, 0.0, 0.0, 0.08),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

static CURRENT_THEME: OnceLock<Theme> = OnceLock::new();

/// Set the global theme (can only be called once)
///
/// Returns `Err` with the provided theme if a theme has already been set.
pub fn set_theme(theme: Theme) -> Result<(), Theme> {
    CURRENT_THEME.set(theme)
}

/// Get the current global theme (or dark theme if not set)
pub fn current_theme() -> &'static Theme {
    CURRENT_THEME.get_or_init(Theme::dark)
}
