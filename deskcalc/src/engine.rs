//! Calculator engine
//!
//! A small state machine driven by [`InputEvent`]s. Binary operators chain
//! strictly left to right: choosing a new operator after typing a second
//! operand resolves the pending one first, so `2 + 3 × 4` gives `20`.
//!
//! The state is owned by [`Calculator`] and only changes through
//! [`Calculator::apply`]. A failed transition leaves the state as it was,
//! except for an unparsable operand during `Equals`, which clears it.

use crate::error::EngineError;
use crate::event::{InputEvent, Operator};
use crate::format::{format_result, parse_operand};

/// The four fields the transitions read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    current: String,
    previous: String,
    operator: Operator,
    reset_on_next_digit: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operator: Operator::None,
            reset_on_next_digit: false,
        }
    }
}

impl CalculatorState {
    /// Operand being typed, or the latest result.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Left operand of the pending operation; empty when none is pending.
    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Whether the next digit replaces `current` instead of extending it.
    pub fn resets_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    fn has_pending(&self) -> bool {
        self.operator.is_pending() && !self.previous.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn current(&self) -> &str {
        self.state.current()
    }

    pub fn previous(&self) -> &str {
        self.state.previous()
    }

    pub fn operator(&self) -> Operator {
        self.state.operator()
    }

    pub fn resets_on_next_digit(&self) -> bool {
        self.state.resets_on_next_digit()
    }

    /// Secondary display line, e.g. `"5 ÷"`, while an operation is pending.
    pub fn pending_line(&self) -> Option<String> {
        if self.state.has_pending() {
            Some(format!("{} {}", self.state.previous, self.state.operator.symbol()))
        } else {
            None
        }
    }

    /// Feed one event through the state machine.
    pub fn apply(&mut self, event: InputEvent) -> Result<(), EngineError> {
        let result = match event {
            InputEvent::Digit(d) => {
                self.input_digit(d);
                Ok(())
            }
            InputEvent::Decimal => {
                self.input_decimal();
                Ok(())
            }
            InputEvent::Operator(op) => self.input_operator(op),
            InputEvent::Equals => self.evaluate(),
            InputEvent::Clear => {
                self.clear();
                Ok(())
            }
            InputEvent::ToggleSign => {
                self.toggle_sign();
                Ok(())
            }
            InputEvent::Percent => self.percent(),
            InputEvent::SquareRoot => self.square_root(),
            InputEvent::Backspace => {
                self.backspace();
                Ok(())
            }
        };

        match &result {
            Ok(()) => tracing::trace!(?event, state = ?self.state, "applied"),
            Err(err) => tracing::debug!(?event, %err, state = ?self.state, "rejected"),
        }
        result
    }

    /// Apply events in order, stopping at the first failure. On failure the
    /// error comes back with the events that were not applied.
    pub fn apply_until_error<'a>(
        &mut self,
        events: &'a [InputEvent],
    ) -> Result<(), (EngineError, &'a [InputEvent])> {
        for (i, &event) in events.iter().enumerate() {
            if let Err(err) = self.apply(event) {
                return Err((err, &events[i + 1..]));
            }
        }
        Ok(())
    }

    fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let ch = char::from(b'0' + digit);
        let s = &mut self.state;
        if s.reset_on_next_digit || s.current == "0" {
            s.current = ch.to_string();
            s.reset_on_next_digit = false;
        } else {
            s.current.push(ch);
        }
    }

    fn input_decimal(&mut self) {
        let s = &mut self.state;
        if s.reset_on_next_digit {
            s.current = "0.".to_string();
            s.reset_on_next_digit = false;
        } else if !s.current.contains('.') {
            s.current.push('.');
        }
    }

    fn input_operator(&mut self, op: Operator) -> Result<(), EngineError> {
        if op == Operator::None {
            return Ok(());
        }
        if self.state.operator.is_pending() && !self.state.reset_on_next_digit {
            self.evaluate()?;
        }
        let s = &mut self.state;
        s.operator = op;
        s.previous = s.current.clone();
        s.reset_on_next_digit = true;
        Ok(())
    }

    fn evaluate(&mut self) -> Result<(), EngineError> {
        if !self.state.has_pending() {
            return Ok(());
        }

        let operands = parse_operand(&self.state.previous).zip(parse_operand(&self.state.current));
        let Some((lhs, rhs)) = operands else {
            self.clear();
            return Err(EngineError::InvalidOperand { during_equals: true });
        };

        if self.state.operator == Operator::Div && rhs == 0.0 {
            return Err(EngineError::DivideByZero);
        }

        let result = self.state.operator.apply(lhs, rhs);
        if !result.is_finite() {
            return Err(EngineError::Overflow);
        }

        let s = &mut self.state;
        s.current = format_result(result);
        s.previous.clear();
        s.operator = Operator::None;
        s.reset_on_next_digit = true;
        Ok(())
    }

    fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    fn toggle_sign(&mut self) {
        let s = &mut self.state;
        if s.current == "0" {
            return;
        }
        if s.current.starts_with('-') {
            s.current.remove(0);
        } else {
            s.current.insert(0, '-');
        }
    }

    fn percent(&mut self) -> Result<(), EngineError> {
        let value = self.current_operand()?;
        self.write_result(value / 100.0)
    }

    fn square_root(&mut self) -> Result<(), EngineError> {
        let value = self.current_operand()?;
        if value < 0.0 {
            return Err(EngineError::NegativeRadicand);
        }
        self.write_result(value.sqrt())
    }

    /// Drops the last character. A lone sign or a signed zero left behind
    /// collapses to `"0"` so `current` stays a number.
    fn backspace(&mut self) {
        let s = &mut self.state;
        if s.current.chars().count() > 1 {
            s.current.pop();
        } else {
            s.current = "0".to_string();
        }
        if s.current == "-" || s.current == "-0" {
            s.current = "0".to_string();
        }
    }

    fn current_operand(&self) -> Result<f64, EngineError> {
        parse_operand(&self.state.current).ok_or(EngineError::InvalidOperand { during_equals: false })
    }

    fn write_result(&mut self, value: f64) -> Result<(), EngineError> {
        if !value.is_finite() {
            return Err(EngineError::Overflow);
        }
        self.state.current = format_result(value);
        Ok(())
    }
}
