//! # Terminal Input Helper
//!
//! The simplest way to ask a question: print it on its own line and keep
//! asking until the answer passes every [`Sanitize`] filter. There is no
//! retry limit, timeout or default; use [`crate::utils::Ask`] for those.
//!
//! ## Example
//! ```rust,no_run
//! use askloop::utils::{DesiredType, Sanitize, Terminal};
//!
//! let input = Terminal::ask(
//!     "Do you like Rust? Y/N",
//!     &[
//!         Sanitize::NotBlank,
//!         Sanitize::MatchStrings(vec![
//!             String::from("Y"),
//!             String::from("N"),
//!             String::from("y"),
//!             String::from("n"),
//!         ]),
//!     ],
//! )
//! .unwrap();
//!
//! println!("The input: {}", input.answer);
//! ```
use crate::error::Result;
use crate::utils::ask::Ask;
use crate::utils::reader::{LineReader, StdinReader};
use crate::utils::sanitize::Sanitize;
use std::io::{self, Write};

/// The accepted answer of a [`Terminal::ask`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    pub answer: String,
}

impl Terminal {
    /// Prints a question to the terminal and loops until a valid answer is received.
    /// Returns a [`Terminal`] struct containing the accepted (trimmed) answer.
    pub fn ask(question: &str, filters: &[Sanitize]) -> Result<Terminal> {
        let mut stdout = io::stdout();
        Self::ask_with(question, filters, &mut StdinReader, &mut stdout)
    }

    pub fn ask_with<R, W>(
        question: &str,
        filters: &[Sanitize],
        reader: &mut R,
        out: &mut W,
    ) -> Result<Terminal>
    where
        R: LineReader + ?Sized,
        W: Write,
    {
        let filters = filters.to_vec();
        let answer = Ask::new(format!("{question}\n"), move |value: String| {
            Sanitize::execute(&value, &filters)
        })
        .run_with(reader, out)?;

        Ok(Terminal { answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AskError;
    use crate::utils::reader::ScriptedReader;
    use crate::utils::sanitize::DesiredType;

    #[test]
    fn test_terminal_asks_until_valid() {
        let mut reader = ScriptedReader::new(["maybe", " true "]);
        let mut out = Vec::new();
        let input = Terminal::ask_with(
            "You like Rust? (true/false)",
            &[Sanitize::IsType(DesiredType::Bool)],
            &mut reader,
            &mut out,
        )
        .unwrap();

        assert_eq!(input.answer, "true");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "You like Rust? (true/false)\n\
             The value is not a bool, try again!\n\
             You like Rust? (true/false)\n"
        );
    }

    #[test]
    fn test_terminal_reports_closed_input() {
        let mut reader = ScriptedReader::new(["nope"]);
        let res = Terminal::ask_with(
            "Type yes to continue:",
            &[Sanitize::MatchString("yes".to_string())],
            &mut reader,
            &mut io::sink(),
        );
        assert!(matches!(res, Err(AskError::Eof)));
    }
}
