//! Keypad layout and keyboard bindings.

use crate::event::{InputEvent, Operator};

/// Which palette slot a key is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Number,
    Operator,
    Function,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCell {
    pub event: InputEvent,
    pub role: KeyRole,
}

impl KeyCell {
    const fn new(event: InputEvent, role: KeyRole) -> Self {
        Self { event, role }
    }

    pub fn label(&self) -> &'static str {
        self.event.label()
    }
}

pub const KEYPAD_COLUMNS: usize = 4;

const fn num(d: u8) -> KeyCell {
    KeyCell::new(InputEvent::Digit(d), KeyRole::Number)
}

const fn op(o: Operator) -> KeyCell {
    KeyCell::new(InputEvent::Operator(o), KeyRole::Operator)
}

const fn func(event: InputEvent) -> KeyCell {
    KeyCell::new(event, KeyRole::Function)
}

/// Button grid, top row first.
pub const KEYPAD: [[KeyCell; KEYPAD_COLUMNS]; 5] = [
    [
        func(InputEvent::Clear),
        func(InputEvent::ToggleSign),
        func(InputEvent::Percent),
        op(Operator::Div),
    ],
    [num(7), num(8), num(9), op(Operator::Mul)],
    [num(4), num(5), num(6), op(Operator::Sub)],
    [num(1), num(2), num(3), op(Operator::Add)],
    [
        func(InputEvent::SquareRoot),
        num(0),
        KeyCell::new(InputEvent::Decimal, KeyRole::Number),
        KeyCell::new(InputEvent::Equals, KeyRole::Equals),
    ],
];

/// Typed characters.
pub fn map_char(c: char) -> Option<InputEvent> {
    let event = match c {
        '0'..='9' => InputEvent::Digit(c as u8 - b'0'),
        '.' => InputEvent::Decimal,
        '+' => InputEvent::Operator(Operator::Add),
        '-' => InputEvent::Operator(Operator::Sub),
        '*' => InputEvent::Operator(Operator::Mul),
        '/' => InputEvent::Operator(Operator::Div),
        '=' => InputEvent::Equals,
        'c' | 'C' => InputEvent::Clear,
        _ => return None,
    };
    Some(event)
}

/// Named keys that produce no text.
pub fn map_key(key: egui::Key) -> Option<InputEvent> {
    match key {
        egui::Key::Enter => Some(InputEvent::Equals),
        egui::Key::Escape => Some(InputEvent::Clear),
        egui::Key::Backspace => Some(InputEvent::Backspace),
        _ => None,
    }
}

/// Translate one raw egui event. Command chords are left to the window.
pub fn map_event(event: &egui::Event) -> Option<InputEvent> {
    match event {
        egui::Event::Text(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => map_char(c),
                _ => None,
            }
        }
        egui::Event::Key { key, pressed: true, modifiers, .. } if !modifiers.command => map_key(*key),
        _ => None,
    }
}

/// All events in a frame, in order.
pub fn collect_events(events: &[egui::Event]) -> Vec<InputEvent> {
    events.iter().filter_map(map_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_layout() {
        let labels: Vec<Vec<&str>> = KEYPAD
            .iter()
            .map(|row| row.iter().map(KeyCell::label).collect())
            .collect();
        assert_eq!(
            labels,
            vec![
                vec!["C", "±", "%", "÷"],
                vec!["7", "8", "9", "×"],
                vec!["4", "5", "6", "-"],
                vec!["1", "2", "3", "+"],
                vec!["√", "0", ".", "="],
            ]
        );
    }

    #[test]
    fn test_keypad_roles() {
        assert_eq!(KEYPAD[0][0].role, KeyRole::Function);
        assert_eq!(KEYPAD[0][3].role, KeyRole::Operator);
        assert_eq!(KEYPAD[2][1].role, KeyRole::Number);
        assert_eq!(KEYPAD[4][2].role, KeyRole::Number);
        assert_eq!(KEYPAD[4][3].role, KeyRole::Equals);
    }

    #[test]
    fn test_every_digit_on_keypad() {
        for d in 0..=9u8 {
            let found = KEYPAD.iter().flatten().any(|k| k.event == InputEvent::Digit(d));
            assert!(found, "digit {d} missing");
        }
    }

    #[test]
    fn test_map_char() {
        assert_eq!(map_char('7'), Some(InputEvent::Digit(7)));
        assert_eq!(map_char('.'), Some(InputEvent::Decimal));
        assert_eq!(map_char('*'), Some(InputEvent::Operator(Operator::Mul)));
        assert_eq!(map_char('/'), Some(InputEvent::Operator(Operator::Div)));
        assert_eq!(map_char('='), Some(InputEvent::Equals));
        assert_eq!(map_char('C'), Some(InputEvent::Clear));
        assert_eq!(map_char('x'), None);
        assert_eq!(map_char('×'), None);
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(egui::Key::Enter), Some(InputEvent::Equals));
        assert_eq!(map_key(egui::Key::Escape), Some(InputEvent::Clear));
        assert_eq!(map_key(egui::Key::Backspace), Some(InputEvent::Backspace));
        assert_eq!(map_key(egui::Key::Tab), None);
    }

    #[test]
    fn test_text_events() {
        let events = vec![
            egui::Event::Text("1".into()),
            egui::Event::Text("+".into()),
            egui::Event::Text("2".into()),
            egui::Event::Text("ab".into()),
            egui::Event::Copy,
        ];
        assert_eq!(
            collect_events(&events),
            vec![
                InputEvent::Digit(1),
                InputEvent::Operator(Operator::Add),
                InputEvent::Digit(2),
            ]
        );
    }
}
