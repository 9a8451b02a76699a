//! deskcore — shared plumbing for the desk calculator window

pub mod logging;
pub mod safety;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use theme::{DeskTheme, Palette};
