//! # Prompt Loop
//!
//! [`Ask`] prompts, reads one line, validates it and either returns a value or
//! prompts again, within an optional [`Budget`].
//!
//! Per attempt:
//! 1. The prompt is written (no newline is added).
//! 2. One line is read and counted as an attempt.
//! 3. The pre-transform, if any, is applied to the raw line.
//! 4. The validator runs. On failure its message is written, then the budget
//!    is checked: if exhausted the call ends with the default (or a
//!    [`AskError::Timeout`] / [`AskError::RetryLimit`]), otherwise the user is
//!    prompted again.
//! 5. On success the timeout is checked once more: a valid answer that arrives
//!    too late still gives up.
//! 6. The post-transform, if any, is applied and the value returned.
//!
//! A default is returned as is, the post-transform never sees it.
//!
//! ## Example
//! ```rust,no_run
//! use askloop::utils::{Ask, ValidationFailure};
//!
//! let port: u16 = Ask::new("Port: ", |value: String| {
//!     value
//!         .trim()
//!         .parse::<u16>()
//!         .map_err(|_| ValidationFailure::new(format!("'{}' is not a port number.", value.trim())))
//! })
//! .default_value(8080)
//! .limit(3)
//! .timeout_secs(30.0)
//! .run()
//! .unwrap();
//! ```
use crate::error::{AskError, Result};
use crate::utils::budget::{Budget, GiveUp, Session};
use crate::utils::reader::{Echo, LineReader, StdinReader};
use crate::utils::sanitize::ValidationFailure;
use std::{
    io::{self, Write},
    time::Duration,
};
use tracing::{debug, info, trace};

/// Turns a (possibly pre-transformed) line into a value, or explains why it is invalid.
pub type Validator<T> = Box<dyn Fn(String) -> std::result::Result<T, ValidationFailure> + Send>;

/// A value-to-value hook run before or after validation.
pub type Transform<T> = Box<dyn Fn(T) -> T + Send>;

/// A prompt call under construction. Consumed by [`Ask::run`].
pub struct Ask<T> {
    prompt: String,
    default: Option<T>,
    budget: Budget,
    echo: Echo,
    pre_transform: Option<Transform<String>>,
    validator: Validator<T>,
    post_transform: Option<Transform<T>>,
    misconfigured: Option<String>,
}

impl<T> std::fmt::Debug for Ask<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ask")
            .field("prompt", &self.prompt)
            .field("has_default", &self.default.is_some())
            .field("budget", &self.budget)
            .field("echo", &self.echo)
            .field("pre_transform", &self.pre_transform.is_some())
            .field("post_transform", &self.post_transform.is_some())
            .field("misconfigured", &self.misconfigured)
            .finish()
    }
}

impl<T> Ask<T> {
    pub fn new<F>(prompt: impl Into<String>, validator: F) -> Self
    where
        F: Fn(String) -> std::result::Result<T, ValidationFailure> + Send + 'static,
    {
        Self {
            prompt: prompt.into(),
            default: None,
            budget: Budget::unbounded(),
            echo: Echo::Visible,
            pre_transform: None,
            validator: Box::new(validator),
            post_transform: None,
            misconfigured: None,
        }
    }

    /// Marks the call as unusable; [`Ask::run_with`] reports `reason` as a
    /// configuration error before prompting.
    pub(crate) fn misconfigured(mut self, reason: impl Into<String>) -> Self {
        self.misconfigured = Some(reason.into());
        self
    }

    /// Value returned instead of an error when the budget runs out.
    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    pub fn timeout_secs(mut self, secs: f64) -> Self {
        self.budget = self.budget.with_timeout_secs(secs);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.budget = self.budget.with_timeout(timeout);
        self
    }

    /// Maximum number of read attempts.
    pub fn limit(mut self, limit: u32) -> Self {
        self.budget = self.budget.with_limit(limit);
        self
    }

    /// Replaces both the timeout and the limit.
    pub fn budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    pub fn echo(mut self, echo: Echo) -> Self {
        self.echo = echo;
        self
    }

    pub fn pre_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> String + Send + 'static,
    {
        self.pre_transform = Some(Box::new(f));
        self
    }

    pub fn post_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + 'static,
    {
        self.post_transform = Some(Box::new(f));
        self
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt
    }

    /// Runs the loop on the process console (stdin/stdout).
    pub fn run(self) -> Result<T> {
        let mut stdout = io::stdout();
        self.run_with(&mut StdinReader, &mut stdout)
    }

    /// Runs the loop against the given reader and writer.
    ///
    /// # Errors
    /// - [`AskError::Configuration`] if the budget or the input kind is invalid, before anything is written.
    /// - [`AskError::Timeout`] / [`AskError::RetryLimit`] when the budget runs out and no default is set.
    /// - [`AskError::Eof`] if the reader runs out of lines.
    /// - [`AskError::Io`] if reading or writing fails.
    pub fn run_with<R, W>(self, reader: &mut R, out: &mut W) -> Result<T>
    where
        R: LineReader + ?Sized,
        W: Write,
    {
        if let Some(reason) = &self.misconfigured {
            return Err(AskError::Configuration(reason.clone()));
        }
        self.budget.check()?;

        let Ask {
            prompt,
            default,
            budget,
            echo,
            pre_transform,
            validator,
            post_transform,
            ..
        } = self;

        let mut session = Session::start();
        trace!(?budget, ?echo, has_default = default.is_some(), "prompt started");

        loop {
            write!(out, "{prompt}")?;
            out.flush()?;

            let Some(mut user_input) = reader.read_line(out, echo)? else {
                debug!(tries = session.tries(), "input closed");
                return Err(AskError::Eof);
            };
            session.record_attempt();
            debug!(tries = session.tries(), "read attempt");

            if let Some(pre) = &pre_transform {
                user_input = pre(user_input);
            }

            let value = match validator(user_input) {
                Ok(value) => value,
                Err(failure) => {
                    writeln!(out, "{failure}")?;
                    out.flush()?;
                    debug!(tries = session.tries(), reason = %failure, "input rejected");

                    match session.give_up(&budget) {
                        Some(reason) => return give_up(reason, default, &session),
                        None => continue,
                    }
                }
            };

            if session.timed_out(&budget) {
                return give_up(GiveUp::Timeout, default, &session);
            }

            debug!(tries = session.tries(), "input accepted");
            return Ok(match &post_transform {
                Some(post) => post(value),
                None => value,
            });
        }
    }
}

fn give_up<T>(reason: GiveUp, default: Option<T>, session: &Session) -> Result<T> {
    info!(
        %reason,
        tries = session.tries(),
        elapsed_ms = session.elapsed().as_millis() as u64,
        defaulted = default.is_some(),
        "giving up on prompt"
    );
    default.ok_or_else(|| reason.into())
}
