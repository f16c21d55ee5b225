//! # Line Readers
//!
//! The loop reads exactly one line per attempt through a [`LineReader`].
//!
//! - [`StdinReader`] reads from the process console. With [`Echo::Hidden`] or
//!   [`Echo::Masked`] it switches the terminal to raw mode and echoes nothing
//!   or a mask character per typed key.
//! - [`ScriptedReader`] replays prepared lines, optionally after a delay, so
//!   prompts can be driven from tests or demos.
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use std::{
    collections::VecDeque,
    io::{self, BufRead, IsTerminal, Write},
    thread,
    time::Duration,
};

/// How typed characters are shown while reading a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Echo {
    /// Characters are echoed as typed.
    #[default]
    Visible,
    /// Nothing is echoed.
    Hidden,
    /// Each typed character is echoed as the given character.
    Masked(char),
}

/// Source of user input lines.
///
/// `Ok(None)` means the input stream is closed. The returned line never
/// contains the trailing line terminator.
pub trait LineReader {
    fn read_line(&mut self, out: &mut dyn Write, echo: Echo) -> io::Result<Option<String>>;
}

/// Reads lines from the process standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self, out: &mut dyn Write, echo: Echo) -> io::Result<Option<String>> {
        match echo {
            Echo::Visible => read_plain(io::stdin().lock()),
            // Piped input has no echo to suppress.
            _ if !io::stdin().is_terminal() => read_plain(io::stdin().lock()),
            Echo::Hidden => read_masked(out, None),
            Echo::Masked(mask) => read_masked(out, Some(mask)),
        }
    }
}

fn read_plain(mut input: impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(strip_line_ending(line)))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Leaves raw mode when dropped, including on early returns and errors.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
    }
}

fn read_masked(out: &mut dyn Write, mask: Option<char>) -> io::Result<Option<String>> {
    let _raw = RawModeGuard::enable()?;
    let mut line = String::new();

    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            continue;
        };
        if kind == KeyEventKind::Release {
            continue;
        }

        match code {
            KeyCode::Enter => {
                write!(out, "\r\n")?;
                out.flush()?;
                return Ok(Some(line));
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                write!(out, "\r\n")?;
                out.flush()?;
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "input interrupted",
                ));
            }
            KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
                if line.is_empty() {
                    return Ok(None);
                }
            }
            KeyCode::Backspace => {
                if line.pop().is_some() && mask.is_some() {
                    write!(out, "\x08 \x08")?;
                    out.flush()?;
                }
            }
            KeyCode::Char(c) => {
                line.push(c);
                if let Some(mask) = mask {
                    write!(out, "{mask}")?;
                    out.flush()?;
                }
            }
            _ => {}
        }
    }
}

/// Replays a fixed list of lines as if a user typed them.
///
/// Each line can be delayed, which simulates a user who takes time to answer.
/// Once every line is consumed the reader reports end of input.
///
/// # Example
/// ```rust
/// use askloop::utils::{Ask, ScriptedReader};
/// use std::time::Duration;
///
/// let mut reader = ScriptedReader::new(["", "hello"])
///     .then_after(Duration::from_millis(5), "late");
/// let mut out = Vec::new();
///
/// let answer = Ask::text("Enter>").run_with(&mut reader, &mut out).unwrap();
/// assert_eq!(answer, "hello");
/// assert_eq!(reader.reads(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedReader {
    lines: VecDeque<(Duration, String)>,
    reads: usize,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|line| (Duration::ZERO, line.into()))
                .collect(),
            reads: 0,
        }
    }

    /// Appends a line that is only delivered after `delay`.
    pub fn then_after(mut self, delay: Duration, line: impl Into<String>) -> Self {
        self.lines.push_back((delay, line.into()));
        self
    }

    /// Number of lines delivered so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Number of lines not yet delivered.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, _out: &mut dyn Write, _echo: Echo) -> io::Result<Option<String>> {
        let Some((delay, line)) = self.lines.pop_front() else {
            return Ok(None);
        };
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        self.reads += 1;
        Ok(Some(line))
    }
}
