//! deskcalc — a single-window desktop calculator
//!
//! The engine in [`engine`] is independent of any UI; the `deskcalc` binary
//! is a thin eframe adapter that feeds it [`InputEvent`]s and renders the
//! result.

pub mod display;
pub mod engine;
pub mod error;
pub mod event;
pub mod format;
pub mod keymap;
pub mod settings;

pub use engine::{Calculator, CalculatorState};
pub use error::EngineError;
pub use event::{InputEvent, Operator};
