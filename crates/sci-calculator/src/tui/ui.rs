//! Terminal rendering.
//!
//! Draws what the platform drew: the operation trace and the primary value,
//! right-aligned, stacked above the keypad.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates the UI widget for one frame.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Splits the frame into the display block and the keypad block.
    ///
    /// Exposed so the event loop can hit-test mouse clicks against the same
    /// keypad rectangle the renderer used.
    #[must_use]
    pub fn layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(9)])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let lines = vec![
            Line::styled(
                state.secondary.clone(),
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                state.display.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Calculator ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (display_area, keypad_area) = Self::layout(area);
        self.render_display(display_area, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad_area, buf);
    }
}
