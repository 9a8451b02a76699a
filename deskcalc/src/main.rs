//! deskcalc - a desktop calculator
//!
//! Keypad and keyboard input, four operators, sign, percent, square root.

mod app;

use app::DeskCalcApp;
use deskcalc::settings::CalcSettings;
use deskcore::DeskTheme;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    deskcore::logging::init(deskcore::logging::DEFAULT_DIRECTIVE);

    let settings = CalcSettings::load();
    tracing::info!(
        size = ?settings.window_size,
        max_chars = settings.display.max_chars,
        "starting calculator"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_resizable(settings.resizable)
            .with_title("Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Calculator",
        options,
        Box::new(move |cc| {
            let theme = DeskTheme::new(&settings.palette);
            theme.apply(&cc.egui_ctx);
            Box::new(DeskCalcApp::new(cc, settings, theme))
        }),
    )
}
