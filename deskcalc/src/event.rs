//! Input alphabet understood by the engine.

use std::fmt;

/// A binary operator, or none pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    None,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Symbol shown on the keypad and in the pending line.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    pub fn is_pending(self) -> bool {
        self != Operator::None
    }

    /// Apply to two operands. `Div` does not check for zero.
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::None => rhs,
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One discrete keystroke, decoupled from the key or button that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// 0..=9; larger values are rejected by the engine.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
    SquareRoot,
    Backspace,
}

impl InputEvent {
    /// Keypad caption for this event.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            InputEvent::Digit(d) => DIGITS.get(d as usize).copied().unwrap_or("?"),
            InputEvent::Decimal => ".",
            InputEvent::Operator(op) => op.symbol(),
            InputEvent::Equals => "=",
            InputEvent::Clear => "C",
            InputEvent::ToggleSign => "±",
            InputEvent::Percent => "%",
            InputEvent::SquareRoot => "√",
            InputEvent::Backspace => "⌫",
        }
    }
}
