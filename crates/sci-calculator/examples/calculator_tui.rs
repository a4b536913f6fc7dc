//! Interactive calculator demo.
//!
//! Run with: cargo run --example calculator_tui
//!
//! Digits and operators come from the keyboard; the scientific functions
//! are clickable on the keypad, as they were on the shipped widget. Quit
//! with `q` or Ctrl-C.

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use sci_calculator::core::WidgetResult;
use sci_calculator::tui::{render, CalculatorApp, CalculatorUI, InputHandler, KeyAction};

fn main() -> WidgetResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> WidgetResult<()> {
    let mut app = CalculatorApp::new();
    let handler = InputHandler::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handler.handle_key(key) {
                    KeyAction::Press(button) => {
                        app.press(button);
                    }
                    KeyAction::Quit => app.quit(),
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let frame_area = Rect::new(0, 0, size.width, size.height);
                let (_, keypad_area) = CalculatorUI::layout(frame_area);
                let _ = app.click(keypad_area, mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
