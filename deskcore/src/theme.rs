//! Desk theme — dark panel, orange operators
//!
//! Colors are kept as `#rrggbb` strings so they can live in a JSON config
//! file. A slot that fails to parse falls back to its default color.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

/// Built-in colors.
pub struct DeskColors;

impl DeskColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b);
    pub const TEXT: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
    pub const MUTED: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
    pub const NUMBER: Color32 = Color32::from_rgb(0x40, 0x40, 0x40);
    pub const OPERATOR: Color32 = Color32::from_rgb(0xff, 0x95, 0x00);
    pub const FUNCTION: Color32 = Color32::from_rgb(0x60, 0x60, 0x60);
    pub const PRESSED: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
}

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Render a color as `#rrggbb`.
pub fn to_hex(c: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

/// Persisted palette. Every slot is optional in the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub text: String,
    pub muted_text: String,
    pub number_key: String,
    pub operator_key: String,
    pub function_key: String,
    pub equals_key: String,
    pub pressed: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: to_hex(DeskColors::BACKGROUND),
            text: to_hex(DeskColors::TEXT),
            muted_text: to_hex(DeskColors::MUTED),
            number_key: to_hex(DeskColors::NUMBER),
            operator_key: to_hex(DeskColors::OPERATOR),
            function_key: to_hex(DeskColors::FUNCTION),
            equals_key: to_hex(DeskColors::OPERATOR),
            pressed: to_hex(DeskColors::PRESSED),
        }
    }
}

/// Palette with every slot parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colors {
    pub background: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub number_key: Color32,
    pub operator_key: Color32,
    pub function_key: Color32,
    pub equals_key: Color32,
    pub pressed: Color32,
}

impl Palette {
    pub fn resolve(&self) -> Colors {
        let slot = |name: &str, value: &str, fallback: Color32| {
            parse_hex(value).unwrap_or_else(|| {
                tracing::warn!(slot = name, value, "invalid palette color, using default");
                fallback
            })
        };
        Colors {
            background: slot("background", &self.background, DeskColors::BACKGROUND),
            text: slot("text", &self.text, DeskColors::TEXT),
            muted_text: slot("muted_text", &self.muted_text, DeskColors::MUTED),
            number_key: slot("number_key", &self.number_key, DeskColors::NUMBER),
            operator_key: slot("operator_key", &self.operator_key, DeskColors::OPERATOR),
            function_key: slot("function_key", &self.function_key, DeskColors::FUNCTION),
            equals_key: slot("equals_key", &self.equals_key, DeskColors::OPERATOR),
            pressed: slot("pressed", &self.pressed, DeskColors::PRESSED),
        }
    }
}

/// Theme configuration for the calculator window
pub struct DeskTheme {
    pub colors: Colors,
    pub font_size_body: f32,
    pub font_size_key: f32,
    pub font_size_display: f32,
    pub font_size_pending: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl DeskTheme {
    pub fn new(palette: &Palette) -> Self {
        Self {
            colors: palette.resolve(),
            font_size_body: 14.0,
            font_size_key: 16.0,
            font_size_display: 24.0,
            font_size_pending: 12.0,
            window_padding: 20.0,
            item_spacing: 4.0,
        }
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_pending, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_key, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_display, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();
        let c = &self.colors;

        visuals.window_fill = c.background;
        visuals.panel_fill = c.background;
        visuals.faint_bg_color = c.background;
        visuals.extreme_bg_color = c.background;
        visuals.override_text_color = Some(c.text);
        visuals.window_stroke = Stroke::new(1.0, c.muted_text);
        visuals.window_rounding = Rounding::same(4.0);

        let keycap = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.fg_stroke = Stroke::new(1.0, c.text);
            ws.rounding = Rounding::same(2.0);
        };
        keycap(&mut visuals.widgets.inactive, c.function_key);
        keycap(&mut visuals.widgets.hovered, c.function_key);
        keycap(&mut visuals.widgets.active, c.pressed);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);

        ctx.set_style(style);
    }
}
