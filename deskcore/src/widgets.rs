//! Custom widgets — keycaps and the alert dialog

use egui::{Color32, Response, Ui, Widget};

/// Scale the RGB channels of a color, keeping it opaque.
pub fn shade(c: Color32, factor: f32) -> Color32 {
    let scale = |v: u8| ((v as f32) * factor).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgb(scale(c.r()), scale(c.g()), scale(c.b()))
}

/// A keypad button: solid fill, swaps to the pressed color while held.
pub struct KeyButton<'a> {
    text: &'a str,
    fill: Color32,
    pressed_fill: Color32,
    text_color: Color32,
    font_size: f32,
    size: egui::Vec2,
}

impl<'a> KeyButton<'a> {
    pub fn new(text: &'a str, fill: Color32) -> Self {
        Self {
            text,
            fill,
            pressed_fill: shade(fill, 1.3),
            text_color: Color32::WHITE,
            font_size: 16.0,
            size: egui::vec2(64.0, 48.0),
        }
    }

    pub fn pressed_fill(mut self, color: Color32) -> Self {
        self.pressed_fill = color;
        self
    }

    pub fn text_color(mut self, color: Color32) -> Self {
        self.text_color = color;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn size(mut self, size: egui::Vec2) -> Self {
        self.size = size;
        self
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let fill = if response.is_pointer_button_down_on() {
                self.pressed_fill
            } else if response.hovered() {
                shade(self.fill, 1.15)
            } else {
                self.fill
            };
            painter.rect_filled(rect, 2.0, fill);

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(self.font_size),
                self.text_color,
            );
        }

        response
    }
}

/// Centered modal-style alert with a single "ok" button.
/// Returns `true` when the user dismissed it this frame.
pub fn alert_window(ctx: &egui::Context, title: &str, message: &str) -> bool {
    let mut dismissed = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("ok").clicked() {
                    dismissed = true;
                }
            });
        });
    dismissed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_darkens_and_lightens() {
        let c = Color32::from_rgb(100, 50, 0);
        assert_eq!(shade(c, 0.5), Color32::from_rgb(50, 25, 0));
        assert_eq!(shade(c, 2.0), Color32::from_rgb(200, 100, 0));
    }

    #[test]
    fn test_shade_saturates() {
        let c = Color32::from_rgb(0xff, 0x95, 0x00);
        assert_eq!(shade(c, 2.0), Color32::from_rgb(255, 255, 0));
    }
}
