//! Final "press any key" wait.

use std::io::{self, Write};

/// Block until a single key is pressed.
///
/// Uses raw mode so the key does not need Enter. Only call this when stdin
/// is a terminal.
pub fn wait_for_key() -> io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        terminal,
    };

    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;

    println!();
    io::stdout().flush()?;
    result
}
