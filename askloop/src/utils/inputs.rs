//! # Ready-made Inputs
//!
//! Constructors for the common kinds of prompts. Each one only builds a
//! validator (and sometimes an echo mode) for [`Ask`]; budget, default and
//! transforms are still set with the usual builder methods.
//!
//! ```rust,no_run
//! use askloop::utils::{Ask, MenuStyle};
//!
//! let size = Ask::menu(None, ["small", "medium", "large"], MenuStyle::Numbered)
//!     .default_value("medium".to_string())
//!     .limit(3)
//!     .run()
//!     .unwrap();
//! let confirm = Ask::yes_no("Order a large? ").run().unwrap();
//! ```
use crate::utils::ask::Ask;
use crate::utils::reader::Echo;
use crate::utils::sanitize::{DesiredType, FilterErrorNot, Sanitize, ValidationFailure};

/// How [`Ask::menu`] lists and accepts its choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuStyle {
    /// `1. choice`, accepts the number or the text.
    Numbered,
    /// `A. choice`, accepts the letter (any case) or the text. At most 26 choices.
    Lettered,
    /// `* choice`, accepts the text only.
    #[default]
    Bulleted,
}

impl MenuStyle {
    fn label(&self, index: usize) -> String {
        match self {
            Self::Numbered => format!("{}.", index + 1),
            Self::Lettered => format!("{}.", letter(index)),
            Self::Bulleted => "*".to_string(),
        }
    }

    fn lookup<'a>(&self, input: &str, choices: &'a [String]) -> Option<&'a String> {
        match self {
            Self::Numbered => input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i)),
            Self::Lettered => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => (0..choices.len())
                        .find(|&i| letter(i).eq_ignore_ascii_case(&c))
                        .and_then(|i| choices.get(i)),
                    _ => None,
                }
            }
            Self::Bulleted => None,
        }
    }
}

/// Number of choices a lettered menu can label.
const MAX_LETTERED: usize = 26;

/// `A`, `B`, ... for the first 26 entries; later entries have no letter.
fn letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| usize::from(*i) < MAX_LETTERED)
        .map_or(' ', |i| char::from(b'A' + i))
}

fn find_choice<'a>(input: &str, choices: &'a [String]) -> Option<&'a String> {
    let wanted = input.to_lowercase();
    choices.iter().find(|choice| choice.to_lowercase() == wanted)
}

fn owned(choices: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    choices.into_iter().map(Into::into).collect()
}

impl Ask<String> {
    /// Any non-blank text, trimmed.
    pub fn text(prompt: impl Into<String>) -> Self {
        Ask::new(prompt, |value: String| {
            Sanitize::execute(&value, &[Sanitize::NotBlank])
        })
    }

    /// One of `choices`, matched without regard to case. Returns the choice
    /// as written in `choices`.
    ///
    /// With `prompt` set to `None` the prompt lists the choices.
    pub fn choice(
        prompt: Option<&str>,
        choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let choices = owned(choices);
        let prompt = match prompt {
            Some(prompt) => prompt.to_string(),
            None => format!("Please select one of: {}\n", choices.join(", ")),
        };

        Ask::new(prompt, move |value: String| {
            let clean = Sanitize::execute(&value, &[Sanitize::NotBlank])?;
            find_choice(&clean, &choices)
                .cloned()
                .ok_or_else(|| FilterErrorNot::MatchStrings(choices.clone()).into())
        })
    }

    /// A choice picked from a listed menu. Returns the choice as written in
    /// `choices`, whether the user typed its label or its text.
    ///
    /// A [`MenuStyle::Lettered`] menu with more than 26 choices fails with
    /// [`crate::AskError::Configuration`] when run.
    pub fn menu(
        prompt: Option<&str>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        style: MenuStyle,
    ) -> Self {
        let choices = owned(choices);
        let mut text = prompt
            .unwrap_or("Please select one of the following:\n")
            .to_string();
        if prompt.is_none() {
            for (i, choice) in choices.iter().enumerate() {
                text.push_str(&format!("{} {}\n", style.label(i), choice));
            }
        }

        let too_many = style == MenuStyle::Lettered && choices.len() > MAX_LETTERED;
        let count = choices.len();

        let ask = Ask::new(text, move |value: String| {
            let clean = Sanitize::execute(&value, &[Sanitize::NotBlank])?;
            style
                .lookup(&clean, &choices)
                .or_else(|| find_choice(&clean, &choices))
                .cloned()
                .ok_or_else(|| ValidationFailure::new(format!("'{clean}' is not a valid choice.")))
        });

        if too_many {
            ask.misconfigured(format!(
                "a lettered menu can list at most {MAX_LETTERED} choices, got {count}"
            ))
        } else {
            ask
        }
    }

    /// Secret text, echoed as `*`. Not trimmed; blank is rejected.
    pub fn password(prompt: impl Into<String>) -> Self {
        Ask::new(prompt, |value: String| {
            if value.is_empty() {
                Err(FilterErrorNot::Blank.into())
            } else {
                Ok(value)
            }
        })
        .echo(Echo::Masked('*'))
    }
}

impl Ask<i64> {
    /// A whole number.
    pub fn integer(prompt: impl Into<String>) -> Self {
        Self::parsed(
            prompt,
            vec![Sanitize::NotBlank, Sanitize::IsType(DesiredType::I64)],
        )
    }

    /// A whole number in the inclusive range `[min, max]`.
    pub fn integer_between(prompt: impl Into<String>, min: i64, max: i64) -> Self {
        Self::parsed(prompt, vec![Sanitize::NotBlank, Sanitize::IsBetween(min, max)])
    }

    fn parsed(prompt: impl Into<String>, filters: Vec<Sanitize>) -> Self {
        Ask::new(prompt, move |value: String| {
            Sanitize::execute(&value, &filters)?
                .parse::<i64>()
                .map_err(|_| FilterErrorNot::Number(DesiredType::I64).into())
        })
    }
}

impl Ask<bool> {
    /// `y`, `yes`, `n` or `no`, in any case.
    pub fn yes_no(prompt: impl Into<String>) -> Self {
        Ask::new(prompt, |value: String| {
            let clean = Sanitize::execute(&value, &[Sanitize::NotBlank])?;
            match clean.to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err(ValidationFailure::new(format!(
                    "'{clean}' is not a valid yes/no response."
                ))),
            }
        })
    }
}

impl<T> Ask<T> {
    /// Non-blank trimmed text checked by `check`, which returns the final
    /// value or the reason the text is invalid.
    pub fn custom<F>(prompt: impl Into<String>, check: F) -> Self
    where
        F: Fn(String) -> Result<T, ValidationFailure> + Send + 'static,
    {
        Ask::new(prompt, move |value: String| {
            check(Sanitize::execute(&value, &[Sanitize::NotBlank])?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AskError;
    use crate::utils::reader::ScriptedReader;
    use std::io;

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_trims_and_rejects_blank() {
        let mut reader = ScriptedReader::new(["   ", " hello "]);
        let mut out = Vec::new();
        let answer = Ask::text("Enter>").run_with(&mut reader, &mut out).unwrap();
        assert_eq!(answer, "hello");
        assert_eq!(output(out), "Enter>Blank values are not allowed.\nEnter>");
    }

    #[test]
    fn test_choice_with_post_transform() {
        let mut reader = ScriptedReader::new(["cat"]);
        let answer = Ask::choice(Some("Pet? "), ["cat", "dog"])
            .post_transform(|value: String| value.to_uppercase())
            .run_with(&mut reader, &mut io::sink())
            .unwrap();
        assert_eq!(answer, "CAT");
    }

    #[test]
    fn test_choice_is_case_insensitive_and_canonical() {
        let mut reader = ScriptedReader::new(["mouse", "DOG"]);
        let mut out = Vec::new();
        let answer = Ask::choice(None, ["cat", "Dog"])
            .run_with(&mut reader, &mut out)
            .unwrap();
        assert_eq!(answer, "Dog");
        assert_eq!(
            output(out),
            "Please select one of: cat, Dog\n\
             The value doesn't match with the options: cat, Dog, try again!\n\
             Please select one of: cat, Dog\n"
        );
    }

    #[test]
    fn test_menu_numbered() {
        let mut reader = ScriptedReader::new(["3", "2"]);
        let mut out = Vec::new();
        let answer = Ask::menu(None, ["cat", "dog"], MenuStyle::Numbered)
            .run_with(&mut reader, &mut out)
            .unwrap();
        assert_eq!(answer, "dog");
        let out = output(out);
        assert!(out.starts_with("Please select one of the following:\n1. cat\n2. dog\n"));
        assert!(out.contains("'3' is not a valid choice.\n"));
    }

    #[test]
    fn test_menu_lettered_accepts_letter_or_text() {
        let mut reader = ScriptedReader::new(["b"]);
        let answer = Ask::menu(None, ["cat", "dog"], MenuStyle::Lettered)
            .run_with(&mut reader, &mut io::sink())
            .unwrap();
        assert_eq!(answer, "dog");

        let mut reader = ScriptedReader::new(["CAT"]);
        let answer = Ask::menu(Some("Pick: "), ["cat", "dog"], MenuStyle::Lettered)
            .run_with(&mut reader, &mut io::sink())
            .unwrap();
        assert_eq!(answer, "cat");
    }

    #[test]
    fn test_menu_lettered_rejects_more_than_26_choices() {
        let choices: Vec<String> = (0..27).map(|i| format!("choice {i}")).collect();
        let mut reader = ScriptedReader::new(["choice 26"]);
        let mut out = Vec::new();
        let res = Ask::menu(None, choices.clone(), MenuStyle::Lettered)
            .run_with(&mut reader, &mut out);
        assert!(matches!(res, Err(AskError::Configuration(_))));
        assert!(out.is_empty());
        assert_eq!(reader.reads(), 0);

        let mut reader = ScriptedReader::new(["z"]);
        let answer = Ask::menu(None, choices[..26].to_vec(), MenuStyle::Lettered)
            .run_with(&mut reader, &mut io::sink())
            .unwrap();
        assert_eq!(answer, "choice 25");

        let mut reader = ScriptedReader::new(["27"]);
        let answer = Ask::menu(None, choices, MenuStyle::Numbered)
            .run_with(&mut reader, &mut io::sink())
            .unwrap();
        assert_eq!(answer, "choice 26");
    }

    #[test]
    fn test_menu_bulleted_prompt() {
        let mut reader = ScriptedReader::new(["1", "cat"]);
        let mut out = Vec::new();
        let answer = Ask::menu(None, ["cat", "dog"], MenuStyle::Bulleted)
            .run_with(&mut reader, &mut out)
            .unwrap();
        assert_eq!(answer, "cat");
        assert!(output(out).starts_with("Please select one of the following:\n* cat\n* dog\n"));
    }

    #[test]
    fn test_integer_between() {
        let mut reader = ScriptedReader::new(["ten", "11", "7"]);
        let mut out = Vec::new();
        let answer = Ask::integer_between("n: ", 1, 10)
            .run_with(&mut reader, &mut out)
            .unwrap();
        assert_eq!(answer, 7);
        assert_eq!(
            output(out),
            "n: The value is not a i64, try again!\n\
             n: The value is not between 1 and 10, try again!\n\
             n: "
        );
    }

    #[test]
    fn test_integer_default_skips_post_transform() {
        let mut reader = ScriptedReader::new(["x"]);
        let answer = Ask::integer("n: ")
            .default_value(-1)
            .limit(1)
            .post_transform(|n| n * 100)
            .run_with(&mut reader, &mut io::sink())
            .unwrap();
        assert_eq!(answer, -1);
    }

    #[test]
    fn test_yes_no() {
        let mut reader = ScriptedReader::new(["oui", "Y"]);
        let mut out = Vec::new();
        let answer = Ask::yes_no("Continue? ").run_with(&mut reader, &mut out).unwrap();
        assert!(answer);
        assert!(output(out).contains("'oui' is not a valid yes/no response.\n"));

        let mut reader = ScriptedReader::new(["NO"]);
        let answer = Ask::yes_no("Continue? ")
            .run_with(&mut reader, &mut io::sink())
            .unwrap();
        assert!(!answer);
    }

    #[test]
    fn test_password_keeps_whitespace() {
        let mut reader = ScriptedReader::new(["", " s3cret "]);
        let ask = Ask::password("Password: ");
        assert!(format!("{ask:?}").contains("Masked('*')"));
        let answer = ask.run_with(&mut reader, &mut io::sink()).unwrap();
        assert_eq!(answer, " s3cret ");
    }

    #[test]
    fn test_password_single_attempt() {
        let mut reader = ScriptedReader::new([""]);
        let res = Ask::password("Password: ")
            .limit(1)
            .run_with(&mut reader, &mut io::sink());
        assert!(matches!(res, Err(AskError::RetryLimit)));
    }

    #[test]
    fn test_custom_validator_gets_trimmed_text() {
        let mut reader = ScriptedReader::new(["HELLO", " Hello "]);
        let mut out = Vec::new();
        let answer = Ask::custom("> ", |value: String| {
            if value.chars().all(|c| !c.is_lowercase()) {
                Err(ValidationFailure::new("Input cannot be uppercase."))
            } else {
                Ok(value.len())
            }
        })
        .run_with(&mut reader, &mut out)
        .unwrap();
        assert_eq!(answer, 5);
        assert_eq!(output(out), "> Input cannot be uppercase.\n> ");
    }

    #[test]
    fn test_letter_labels() {
        assert_eq!(letter(0), 'A');
        assert_eq!(letter(25), 'Z');
        assert_eq!(letter(26), ' ');
    }
}
