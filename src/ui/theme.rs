use crate::marketplace::Tone;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_input: ColorSpec,
    pub footer_debug: ColorSpec,
    pub footer_dialog: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    /// Dark blue theme; the default.
    ///
    pub fn midnight() -> Self {
        Theme {
            name: "midnight".to_string(),
            primary: rgb(59, 130, 246),
            secondary: rgb(100, 116, 139),
            accent: rgb(168, 85, 247),
            banner: rgb(96, 165, 250),
            text: rgb(226, 232, 240),
            text_secondary: rgb(148, 163, 184),
            text_muted: rgb(100, 116, 139),
            background: rgb(15, 23, 42),
            surface: rgb(30, 41, 59),
            success: rgb(34, 197, 94),
            warning: rgb(234, 179, 8),
            error: rgb(239, 68, 68),
            info: rgb(14, 165, 233),
            border_active: rgb(59, 130, 246),
            border_normal: rgb(71, 85, 105),
            highlight_bg: rgb(59, 130, 246),
            highlight_fg: rgb(15, 23, 42),
            footer_input: rgb(14, 165, 233),
            footer_debug: rgb(34, 197, 94),
            footer_dialog: rgb(234, 179, 8),
            footer_normal: rgb(0, 0, 0),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(125, 207, 255),
            secondary: rgb(158, 206, 106),
            accent: rgb(255, 158, 100),
            banner: rgb(255, 158, 100),
            text: rgb(169, 177, 214),
            text_secondary: rgb(192, 202, 245),
            text_muted: rgb(117, 127, 170),
            background: rgb(26, 27, 38),
            surface: rgb(36, 40, 59),
            success: rgb(158, 206, 106),
            warning: rgb(255, 158, 100),
            error: rgb(247, 118, 142),
            info: rgb(125, 207, 255),
            border_active: rgb(125, 207, 255),
            border_normal: rgb(117, 127, 170),
            highlight_bg: rgb(125, 207, 255),
            highlight_fg: rgb(26, 27, 38),
            footer_input: rgb(125, 207, 255),
            footer_debug: rgb(158, 206, 106),
            footer_dialog: rgb(255, 158, 100),
            footer_normal: rgb(0, 0, 0),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),
            secondary: rgb(98, 114, 164),
            accent: rgb(255, 121, 198),
            banner: rgb(255, 121, 198),
            text: rgb(248, 248, 242),
            text_secondary: rgb(189, 189, 189),
            text_muted: rgb(98, 114, 164),
            background: rgb(40, 42, 54),
            surface: rgb(68, 71, 90),
            success: rgb(80, 250, 123),
            warning: rgb(241, 250, 140),
            error: rgb(255, 85, 85),
            info: rgb(139, 233, 253),
            border_active: rgb(189, 147, 249),
            border_normal: rgb(98, 114, 164),
            highlight_bg: rgb(189, 147, 249),
            highlight_fg: rgb(40, 42, 54),
            footer_input: rgb(139, 233, 253),
            footer_debug: rgb(80, 250, 123),
            footer_dialog: rgb(241, 250, 140),
            footer_normal: rgb(0, 0, 0),
        }
    }

    /// Rose Pine Dawn theme, for light terminals.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(144, 122, 169),
            secondary: rgb(86, 148, 159),
            accent: rgb(215, 130, 126),
            banner: rgb(180, 99, 122),
            text: rgb(87, 82, 121),
            text_secondary: rgb(121, 117, 147),
            text_muted: rgb(152, 147, 165),
            background: rgb(250, 244, 237),
            surface: rgb(255, 250, 243),
            success: rgb(40, 105, 131),
            warning: rgb(234, 157, 52),
            error: rgb(180, 99, 122),
            info: rgb(86, 148, 159),
            border_active: rgb(144, 122, 169),
            border_normal: rgb(152, 147, 165),
            highlight_bg: rgb(144, 122, 169),
            highlight_fg: rgb(250, 244, 237),
            footer_input: rgb(86, 148, 159),
            footer_debug: rgb(40, 105, 131),
            footer_dialog: rgb(234, 157, 52),
            footer_normal: rgb(255, 255, 255),
        }
    }

    /// Green theme.
    ///
    pub fn forest() -> Self {
        Theme {
            name: "forest".to_string(),
            primary: rgb(134, 239, 172),
            secondary: rgb(110, 130, 110),
            accent: rgb(253, 186, 116),
            banner: rgb(74, 222, 128),
            text: rgb(220, 232, 220),
            text_secondary: rgb(170, 190, 170),
            text_muted: rgb(110, 130, 110),
            background: rgb(20, 30, 24),
            surface: rgb(30, 44, 36),
            success: rgb(74, 222, 128),
            warning: rgb(250, 204, 21),
            error: rgb(248, 113, 113),
            info: rgb(103, 232, 249),
            border_active: rgb(134, 239, 172),
            border_normal: rgb(110, 130, 110),
            highlight_bg: rgb(134, 239, 172),
            highlight_fg: rgb(20, 30, 24),
            footer_input: rgb(103, 232, 249),
            footer_debug: rgb(74, 222, 128),
            footer_dialog: rgb(250, 204, 21),
            footer_normal: rgb(0, 0, 0),
        }
    }

    /// Terminal colour of a badge tone.
    ///
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Destructive => self.error,
            Tone::Info => self.info,
            Tone::Accent => self.accent,
            Tone::Primary => self.primary,
            Tone::Muted => self.text_muted,
            Tone::Secondary => self.secondary,
        }
        .to_color()
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "midnight" => Some(Self::midnight()),
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "forest" => Some(Self::forest()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "midnight".to_string(),
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
            "forest".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("neon").is_none());
        assert_eq!(Theme::default().name, "midnight");
    }

    #[test]
    fn tones_map_to_status_colors() {
        let theme = Theme::dracula();
        assert_eq!(theme.tone(Tone::Success), Color::Rgb(80, 250, 123));
        assert_eq!(theme.tone(Tone::Destructive), theme.error.to_color());
        assert_eq!(theme.tone(Tone::Muted), theme.text_muted.to_color());
    }
}
