//! The widget's on-screen keypad.
//!
//! A fixed 7x4 grid mirroring the shipped layout row for row, with the zero
//! key spanning two cells. The grid model handles lookup, pressed-state
//! highlighting, and mouse hit-testing; [`KeypadWidget`] draws it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{BinaryOp, Button, UnaryOp};

/// Visual role of a key, matching the shipped widget's button tinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Digits and the decimal point
    Digit,
    /// Binary operators and equals
    Operator,
    /// Scientific functions and Ans
    Function,
    /// AC and backspace
    Clear,
}

/// A single key on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The event this key emits
    pub button: Button,
    /// Grid row (0-indexed, top to bottom)
    pub row: u16,
    /// Leftmost grid column occupied by this key
    pub col: u16,
    /// Number of columns this key spans
    pub span: u16,
    /// Whether the key is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(button: Button, row: u16, col: u16) -> Self {
        Self {
            button,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    fn wide(button: Button, row: u16, col: u16, span: u16) -> Self {
        Self {
            button,
            row,
            col,
            span,
            pressed: false,
        }
    }

    /// Returns the keycap text.
    #[must_use]
    pub fn label(&self) -> String {
        self.button.label()
    }

    /// Returns the key's visual role.
    #[must_use]
    pub fn role(&self) -> ButtonRole {
        match self.button {
            Button::Digit(_) | Button::Decimal => ButtonRole::Digit,
            Button::Operator(_) | Button::Equals => ButtonRole::Operator,
            Button::Function(_) | Button::Ans => ButtonRole::Function,
            Button::Clear | Button::Backspace => ButtonRole::Clear,
        }
    }

    /// Sets the highlight state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, row for row as shipped:
/// ```text
/// [ AC ] [ ⌫ ] [ π  ] [ ÷ ]
/// [ sin] [cos ] [tan ] [ × ]
/// [ √  ] [ x² ] [log ] [ − ]
/// [ 7  ] [ 8  ] [ 9  ] [ + ]
/// [ 4  ] [ 5  ] [ 6  ] [ = ]
/// [ 1  ] [ 2  ] [ 3  ] [ % ]
/// [ 0       -] [ .  ] [Ans]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: u16,
    cols: u16,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard widget keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: AC ⌫ π ÷
            KeypadButton::new(Button::Clear, 0, 0),
            KeypadButton::new(Button::Backspace, 0, 1),
            KeypadButton::new(Button::Function(UnaryOp::Pi), 0, 2),
            KeypadButton::new(Button::Operator(BinaryOp::Divide), 0, 3),
            // Row 1: sin cos tan ×
            KeypadButton::new(Button::Function(UnaryOp::Sin), 1, 0),
            KeypadButton::new(Button::Function(UnaryOp::Cos), 1, 1),
            KeypadButton::new(Button::Function(UnaryOp::Tan), 1, 2),
            KeypadButton::new(Button::Operator(BinaryOp::Multiply), 1, 3),
            // Row 2: √ x² log −
            KeypadButton::new(Button::Function(UnaryOp::Sqrt), 2, 0),
            KeypadButton::new(Button::Function(UnaryOp::Squared), 2, 1),
            KeypadButton::new(Button::Function(UnaryOp::Log), 2, 2),
            KeypadButton::new(Button::Operator(BinaryOp::Subtract), 2, 3),
            // Row 3: 7 8 9 +
            KeypadButton::new(Button::Digit(7), 3, 0),
            KeypadButton::new(Button::Digit(8), 3, 1),
            KeypadButton::new(Button::Digit(9), 3, 2),
            KeypadButton::new(Button::Operator(BinaryOp::Add), 3, 3),
            // Row 4: 4 5 6 =
            KeypadButton::new(Button::Digit(4), 4, 0),
            KeypadButton::new(Button::Digit(5), 4, 1),
            KeypadButton::new(Button::Digit(6), 4, 2),
            KeypadButton::new(Button::Equals, 4, 3),
            // Row 5: 1 2 3 %
            KeypadButton::new(Button::Digit(1), 5, 0),
            KeypadButton::new(Button::Digit(2), 5, 1),
            KeypadButton::new(Button::Digit(3), 5, 2),
            KeypadButton::new(Button::Operator(BinaryOp::Modulo), 5, 3),
            // Row 6: 0 (double width) . Ans
            KeypadButton::wide(Button::Digit(0), 6, 0, 2),
            KeypadButton::new(Button::Decimal, 6, 2),
            KeypadButton::new(Button::Ans, 6, 3),
        ];

        Self {
            buttons,
            rows: 7,
            cols: 4,
        }
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Gets a key by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the key covering a grid cell, honoring spans.
    #[must_use]
    pub fn button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.buttons
            .iter()
            .find(|b| b.row == row && col >= b.col && col < b.col + b.span)
    }

    /// Finds the index of the key emitting `button`.
    #[must_use]
    pub fn find(&self, button: Button) -> Option<usize> {
        self.buttons.iter().position(|b| b.button == button)
    }

    /// Finds the index of the key with the given keycap label.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label() == label)
    }

    /// Highlights a key by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(key) = self.buttons.get_mut(index) {
            key.set_pressed(true);
        }
    }

    /// Clears all highlights.
    pub fn release_all(&mut self) {
        for key in &mut self.buttons {
            key.set_pressed(false);
        }
    }

    /// Highlights exactly the key emitting `button`.
    pub fn highlight(&mut self, button: Button) {
        self.release_all();
        if let Some(index) = self.find(button) {
            self.press_button(index);
        }
    }

    /// Returns an iterator over all keys.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position inside `area` to a key index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // The outer border is not clickable
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let cell_width = (area.width - 2) / self.cols;
        let cell_height = (area.height - 2) / self.rows;
        if cell_width == 0 || cell_height == 0 {
            return None;
        }

        let col = (rel_x - 1) / cell_width;
        let row = (rel_y - 1) / cell_height;
        let target = self.button_at(row, col)?;
        self.find(target.button)
    }
}

/// Ratatui widget rendering a [`Keypad`].
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget for the given keypad.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn key_style(key: &KeypadButton) -> Style {
        if key.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match key.role() {
            ButtonRole::Digit => Style::default().fg(Color::White),
            ButtonRole::Operator => Style::default().fg(Color::Yellow),
            ButtonRole::Function => Style::default().fg(Color::Cyan),
            ButtonRole::Clear => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols * 5 || inner.height < rows {
            return; // too small to draw keycaps
        }

        let cell_width = inner.width / cols;
        let cell_height = inner.height / rows;

        for key in self.keypad.buttons() {
            let x = inner.x + key.col * cell_width;
            let y = inner.y + key.row * cell_height;
            let width = cell_width * key.span;

            let label = format!("[{}]", key.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + width.saturating_sub(label_width) / 2;
            let label_y = y + cell_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(
                    label_x,
                    label_y,
                    &Span::styled(label, Self::key_style(key)),
                    width,
                );
            }
        }
    }
}
