//! Calculator window

use deskcalc::display::DisplayConfig;
use deskcalc::keymap::{collect_events, KeyRole, KEYPAD, KEYPAD_COLUMNS};
use deskcalc::settings::CalcSettings;
use deskcalc::{Calculator, EngineError, InputEvent};
use deskcore::theme::Colors;
use deskcore::widgets::{alert_window, KeyButton};
use deskcore::DeskTheme;
use egui::{Context, Key};

pub struct DeskCalcApp {
    calc: Calculator,
    display: DisplayConfig,
    theme: DeskTheme,
    /// Error waiting to be acknowledged; input is held back until it is.
    alert: Option<EngineError>,
}

impl DeskCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings, theme: DeskTheme) -> Self {
        Self {
            calc: Calculator::new(),
            display: settings.display,
            theme,
            alert: None,
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        if self.alert.is_some() {
            return;
        }
        if let Err(err) = self.calc.apply(event) {
            tracing::info!(?event, %err, "showing alert");
            self.alert = Some(err);
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        if self.alert.is_some() {
            let dismiss = ctx.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Escape));
            if dismiss {
                self.alert = None;
            }
            return;
        }

        // Keys after the failing one are discarded, as the alert blocks input.
        let events = ctx.input(|i| collect_events(&i.events));
        if let Err((err, dropped)) = self.calc.apply_until_error(&events) {
            tracing::info!(%err, "showing alert");
            if !dropped.is_empty() {
                tracing::debug!(?dropped, "discarded keys typed behind the alert");
            }
            self.alert = Some(err);
        }
    }

    fn key_color(colors: &Colors, role: KeyRole) -> egui::Color32 {
        match role {
            KeyRole::Number => colors.number_key,
            KeyRole::Operator => colors.operator_key,
            KeyRole::Function => colors.function_key,
            KeyRole::Equals => colors.equals_key,
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let colors = &self.theme.colors;
        let pending = self.calc.pending_line().unwrap_or_default();

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(pending)
                    .size(self.theme.font_size_pending)
                    .color(colors.muted_text),
            );
        });
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(egui::Color32::from_black_alpha(60))
            .stroke(egui::Stroke::new(2.0, colors.muted_text))
            .inner_margin(egui::Margin::symmetric(8.0, 10.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.display.fit(self.calc.current()))
                            .size(self.theme.font_size_display)
                            .color(colors.text)
                            .strong(),
                    );
                });
            });
    }

    /// Draws the grid and returns the key clicked this frame, if any.
    fn render_keypad(&self, ui: &mut egui::Ui) -> Option<InputEvent> {
        let colors = &self.theme.colors;
        let gap = ui.spacing().item_spacing.x;
        let rows = KEYPAD.len() as f32;
        let cols = KEYPAD_COLUMNS as f32;
        let size = egui::vec2(
            ((ui.available_width() - gap * (cols - 1.0)) / cols).max(24.0),
            ((ui.available_height() - gap * (rows - 1.0)) / rows).max(24.0),
        );

        let mut clicked = None;
        for row in KEYPAD.iter() {
            ui.horizontal(|ui| {
                for cell in row {
                    let button = KeyButton::new(cell.label(), Self::key_color(colors, cell.role))
                        .pressed_fill(colors.pressed)
                        .text_color(colors.text)
                        .font_size(self.theme.font_size_key)
                        .size(size);
                    if ui.add(button).clicked() {
                        clicked = Some(cell.event);
                    }
                }
            });
        }
        clicked
    }

    fn frame(&mut self, ctx: &Context) {
        self.handle_keys(ctx);

        let background = self.theme.colors.background;
        let clicked = egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(background)
                    .inner_margin(egui::Margin::same(self.theme.window_padding)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(12.0);
                self.render_keypad(ui)
            })
            .inner;

        if let Some(event) = clicked {
            self.dispatch(event);
        }

        if let Some(err) = self.alert {
            if alert_window(ctx, "Error", err.alert_message()) {
                self.alert = None;
            }
        }
    }
}

impl eframe::App for DeskCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        deskcore::safety::catch_or((), || self.frame(ctx));
    }
}
