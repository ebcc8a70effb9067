//! Interactive raw-mode terminal session.

use crate::config::KeyBindings;
use crate::integration::{self, KeyOutcome};
use crate::state::CalculatorEngine;
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyEventKind},
    queue,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{self, Write};
use tracing::{debug, info};

/// Restores cooked mode when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Run the calculator on the current terminal until a quit key.
///
/// Redraws a single status line after every key press. The line is left on
/// screen when the session ends.
///
/// # Errors
///
/// Returns terminal I/O errors.
pub fn run(engine: &mut CalculatorEngine, bindings: &KeyBindings) -> io::Result<()> {
    let mut stdout = io::stdout();
    let guard = RawModeGuard::enable()?;
    info!("Interactive session started");

    redraw(&mut stdout, engine)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match integration::handle_key(engine, bindings, key) {
            KeyOutcome::Quit => break,
            KeyOutcome::Unbound => debug!(?key, "Ignoring unbound key"),
            KeyOutcome::Handled => redraw(&mut stdout, engine)?,
        }
    }

    drop(guard);
    writeln!(stdout)?;
    info!("Interactive session ended");
    Ok(())
}

fn redraw(out: &mut impl Write, engine: &CalculatorEngine) -> io::Result<()> {
    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    write!(out, "{}", integration::render_line(&engine.snapshot()))?;
    out.flush()
}
