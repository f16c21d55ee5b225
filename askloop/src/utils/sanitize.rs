//! # Input Sanitization & Validation
//!
//! Composable validation filters (`Sanitize`) for the strings a user types at
//! a prompt. Filters run in order on the trimmed input and short-circuit on
//! the first failure, producing a [`ValidationFailure`] whose message is shown
//! to the user before the prompt is repeated.
//!
//! ## Features
//! - Blank rejection with [`Sanitize::NotBlank`]
//! - Type validation for common Rust primitives via [`DesiredType`]
//! - Exact string matching with [`Sanitize::MatchString`]
//! - Multiple-option matching with [`Sanitize::MatchStrings`]
//! - Inclusive range validation with [`Sanitize::IsBetween`]
//!
//! ## Examples
//!
//! ### Validate a number range
//! ```rust,no_run
//! use askloop::utils::{Sanitize, Terminal};
//!
//! let number = Terminal::ask(
//!     "Enter a number between 1 and 10:",
//!     &[Sanitize::NotBlank, Sanitize::IsBetween(1, 10)],
//! )
//! .unwrap();
//! println!("In range: {}", number.answer);
//! ```
//!
//! ### Use filters as the validator of a budgeted prompt
//! ```rust,no_run
//! use askloop::utils::{Ask, DesiredType, Sanitize};
//!
//! let filters = vec![Sanitize::NotBlank, Sanitize::IsType(DesiredType::Bool)];
//! let answer = Ask::new("Enable cache? (true/false) ", move |value: String| {
//!     Sanitize::execute(&value, &filters)
//! })
//! .limit(3)
//! .run();
//! ```
use std::{error::Error, fmt::Display};

/// The reason a validator rejected a value.
///
/// Its `Display` output is exactly the message written to the console before
/// the user is prompted again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    message: String,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ValidationFailure {}

impl From<FilterErrorNot> for ValidationFailure {
    fn from(err: FilterErrorNot) -> Self {
        ValidationFailure::new(err.to_string())
    }
}

/// Represents a validation filter that can be applied to user input.
///
/// - `NotBlank`: rejects empty (or whitespace-only) input.
/// - `MatchString`: ensures that the input matches a specific string.
/// - `MatchStrings`: ensures that the input matches one of the given options.
/// - `IsType`: ensures that the input can be parsed into a certain [`DesiredType`].
/// - `IsBetween`: ensures that a numeric input is within an inclusive range `[min, max]`.
#[derive(Debug, Clone)]
pub enum Sanitize {
    NotBlank,
    MatchString(String),
    MatchStrings(Vec<String>),
    IsType(DesiredType),
    IsBetween(i64, i64),
}

/// Trait for input validation.
/// Any type that implements this can validate a string input and return
/// either `Ok(())` if the input is valid or a [`FilterErrorNot`] on failure.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot>;
}

/// Represents an error that occurs when input validation fails.
#[derive(Debug)]
pub(crate) enum FilterErrorNot {
    Blank,
    Number(DesiredType),
    Bool(DesiredType),
    MatchString(String),
    MatchStrings(Vec<String>),
    Between(i64, i64),
}

impl Display for FilterErrorNot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "Blank values are not allowed."),
            Self::Number(t) => write!(f, "The value is not a {}, try again!", t),
            Self::Bool(t) => write!(f, "The value is not a {}, try again!", t),
            Self::MatchString(s) => write!(f, "The value doesn't match with {}, try again!", s),
            Self::MatchStrings(v) => write!(
                f,
                "The value doesn't match with the options: {}, try again!",
                v.join(", ")
            ),
            Self::Between(n1, n2) => {
                write!(f, "The value is not between {} and {}, try again!", n1, n2)
            }
        }
    }
}

impl Error for FilterErrorNot {}

/// Expands into a `Result<(), _>` that is `Ok` when `$input` parses as `$t`.
macro_rules! check_type {
    ($input:expr, $t:ty, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(_) => Ok(()),
            Err(_) => $err,
        }
    };
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Trims whitespace before validation.
    /// - Stops and returns the first error encountered.
    /// - Returns the cleaned string if all filters pass.
    pub fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, ValidationFailure> {
        let clean_answer = answer.trim();

        for filter in filters {
            filter.validate(clean_answer)?;
        }
        Ok(clean_answer.to_string())
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            Sanitize::NotBlank => {
                if input.is_empty() {
                    Err(FilterErrorNot::Blank)
                } else {
                    Ok(())
                }
            }
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::MatchString(s) => {
                if input == s {
                    Ok(())
                } else {
                    Err(FilterErrorNot::MatchString(s.to_string()))
                }
            }
            Sanitize::MatchStrings(options) => {
                if options.iter().any(|option| option == input) {
                    Ok(())
                } else {
                    Err(FilterErrorNot::MatchStrings(options.clone()))
                }
            }
            Sanitize::IsBetween(n1, n2) => match input.parse::<i64>() {
                Ok(n) if n >= *n1 && n <= *n2 => Ok(()),
                Ok(_) => Err(FilterErrorNot::Between(*n1, *n2)),
                Err(_) => Err(FilterErrorNot::Number(DesiredType::I64)),
            },
        }
    }
}

/// Represents the desired type to which the input should be parsed.
///
/// Used together with [`Sanitize::IsType`] to validate primitive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F64,
}

impl DesiredType {
    fn parse(&self, input: &str) -> Result<(), FilterErrorNot> {
        let number = Err(FilterErrorNot::Number(*self));
        match self {
            DesiredType::Bool => {
                check_type!(input, bool, Err(FilterErrorNot::Bool(DesiredType::Bool)))
            }
            DesiredType::U8 => check_type!(input, u8, number),
            DesiredType::U16 => check_type!(input, u16, number),
            DesiredType::U32 => check_type!(input, u32, number),
            DesiredType::U64 => check_type!(input, u64, number),
            DesiredType::I8 => check_type!(input, i8, number),
            DesiredType::I16 => check_type!(input, i16, number),
            DesiredType::I32 => check_type!(input, i32, number),
            DesiredType::I64 => check_type!(input, i64, number),
            DesiredType::F64 => check_type!(input, f64, number),
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::F64 => write!(f, "f64"),
        }
    }
}
