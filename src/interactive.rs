//! Arrow-key selection on a raw-mode terminal.
//!
//! Keys are decoded from raw bytes: `ESC [ A` is up, `ESC [ B` is down, CR
//! or LF commits, anything else is ignored. After an escape byte exactly two
//! more bytes are read, which assumes the terminal sends the whole sequence
//! at once.

use crate::render;
use crate::selector::{SelectError, Selector};
use crate::window::DisplayModel;
use crossterm::{cursor, queue, terminal};
use std::io::{self, IsTerminal, Read, Write};
use tracing::debug;

const ESC: u8 = 0x1b;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Other,
}

/// Read one key event. `Ok(None)` means the stream ended.
pub fn read_key<R: Read>(input: &mut R) -> io::Result<Option<Key>> {
    let Some(byte) = read_byte(input)? else {
        return Ok(None);
    };
    let key = match byte {
        b'\r' | b'\n' => Key::Enter,
        ESC => {
            let mut seq = [0u8; 2];
            match input.read_exact(&mut seq) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e),
            }
            match &seq {
                b"[A" => Key::Up,
                b"[B" => Key::Down,
                _ => Key::Other,
            }
        }
        _ => Key::Other,
    };
    Ok(Some(key))
}

fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Cursor over the rows of a model, clamped to `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    cursor: usize,
    len: usize,
}

impl SelectionState {
    /// Starts on the sentinel row.
    pub fn new(model: &DisplayModel) -> Self {
        Self {
            cursor: model.none_index(),
            len: model.len(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply a key. Returns the committed index on Enter.
    pub fn apply(&mut self, key: Key) -> Option<usize> {
        match key {
            Key::Up => self.cursor = self.cursor.saturating_sub(1),
            Key::Down => {
                if self.cursor + 1 < self.len {
                    self.cursor += 1;
                }
            }
            Key::Enter => return Some(self.cursor),
            Key::Other => {}
        }
        None
    }
}

/// Run the key loop over arbitrary streams; the terminal must already be in
/// raw mode when `input` is a tty. End of input commits the sentinel.
pub fn run<R: Read, W: Write>(
    header: &str,
    model: &DisplayModel,
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    let mut state = SelectionState::new(model);
    let mut drawn: u16 = 0;

    loop {
        let frame = render::render(header, model, state.cursor());
        if drawn > 0 {
            queue!(
                output,
                cursor::MoveUp(drawn),
                terminal::Clear(terminal::ClearType::FromCursorDown)
            )?;
        }
        // Output post-processing is off in raw mode, so return the carriage explicitly.
        for line in frame.lines() {
            write!(output, "{}\r\n", line)?;
        }
        output.flush()?;
        drawn = u16::try_from(frame.lines().count()).unwrap_or(u16::MAX);

        match read_key(input)? {
            Some(key) => {
                if let Some(index) = state.apply(key) {
                    return Ok(index);
                }
            }
            None => {
                debug!("Key input closed, committing the sentinel");
                return Ok(model.none_index());
            }
        }
    }
}

/// Raw byte decoding needs a unix terminal on stdin, and the UI is drawn on
/// stderr so stdout stays free for the caller's result.
fn check_available(unix: bool, stdin_tty: bool, stderr_tty: bool) -> Result<(), SelectError> {
    if !unix {
        return Err(SelectError::Unavailable(
            "arrow keys are not delivered as escape sequences on this platform".to_string(),
        ));
    }
    if !stdin_tty {
        return Err(SelectError::Unavailable("stdin is not a terminal".to_string()));
    }
    if !stderr_tty {
        return Err(SelectError::Unavailable("stderr is not a terminal".to_string()));
    }
    Ok(())
}

/// Holds the terminal in raw mode with a hidden cursor; restores both on drop.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self, SelectError> {
        check_available(cfg!(unix), io::stdin().is_terminal(), io::stderr().is_terminal())?;
        terminal::enable_raw_mode().map_err(|e| SelectError::Unavailable(e.to_string()))?;
        let guard = RawModeGuard;
        let mut out = io::stderr();
        queue!(out, cursor::Hide)?;
        out.flush()?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut out = io::stderr();
        let _ = queue!(out, cursor::Show);
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// Arrow-key selector reading stdin and drawing on stderr.
#[derive(Debug, Default)]
pub struct KeySelector;

impl Selector for KeySelector {
    fn select(&mut self, header: &str, model: &DisplayModel) -> Result<usize, SelectError> {
        let _guard = RawModeGuard::acquire()?;
        let mut input = io::stdin().lock();
        let mut output = io::stderr().lock();
        Ok(run(header, model, &mut input, &mut output)?)
    }
}
