//! # Retry & Timeout Budget
//!
//! A [`Budget`] bounds one prompt call by wall-clock time since the first
//! prompt, by the number of read attempts, or both. A [`Session`] tracks the
//! running call and decides when to give up.
//!
//! The timeout is cooperative: it is only checked after each validation, so a
//! user who never presses Enter can keep a call blocked past its timeout.
//!
//! ## Example
//! ```rust
//! use askloop::utils::{Budget, GiveUp, Session};
//!
//! let budget = Budget::unbounded().with_limit(1);
//! let mut session = Session::start();
//! assert_eq!(session.give_up(&budget), None);
//!
//! session.record_attempt();
//! assert_eq!(session.give_up(&budget), Some(GiveUp::RetryLimit));
//! ```
use crate::error::{AskError, Result};
use std::{
    fmt::Display,
    time::{Duration, Instant},
};

/// Limits for a single prompt call.
///
/// - `timeout_secs`: seconds since the first prompt after which no more retries are accepted.
/// - `limit`: maximum number of read attempts, valid or not.
///
/// `None` means "no bound" for either field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Budget {
    pub timeout_secs: Option<f64>,
    pub limit: Option<u32>,
}

impl Budget {
    /// A budget that never gives up.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_timeout_secs(timeout.as_secs_f64())
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rejects budgets that cannot be honored: a timeout that is not a finite
    /// positive number of seconds, or a limit of zero attempts.
    ///
    /// A zero limit or a non-positive timeout is an error here rather than a
    /// budget that gives up after the first failed attempt; use `with_limit(1)`
    /// for a single try.
    pub fn check(&self) -> Result<()> {
        if let Some(secs) = self.timeout_secs {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(AskError::Configuration(format!(
                    "timeout must be a positive number of seconds, got {secs}"
                )));
            }
        }
        if self.limit == Some(0) {
            return Err(AskError::Configuration(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Which give-up condition ended a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveUp {
    Timeout,
    RetryLimit,
}

impl Display for GiveUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::RetryLimit => write!(f, "retry limit"),
        }
    }
}

impl From<GiveUp> for AskError {
    fn from(reason: GiveUp) -> Self {
        match reason {
            GiveUp::Timeout => AskError::Timeout,
            GiveUp::RetryLimit => AskError::RetryLimit,
        }
    }
}

/// State of one running prompt call.
#[derive(Debug, Clone)]
pub struct Session {
    started: Instant,
    tries: u32,
}

impl Session {
    /// Starts the clock. Call once, before the first prompt.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            tries: 0,
        }
    }

    /// Counts one read from the console.
    pub fn record_attempt(&mut self) {
        self.tries = self.tries.saturating_add(1);
    }

    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// `true` once the elapsed time is strictly greater than the timeout.
    pub fn timed_out(&self, budget: &Budget) -> bool {
        budget
            .timeout_secs
            .is_some_and(|secs| self.elapsed().as_secs_f64() > secs)
    }

    /// Returns the give-up condition that currently holds, if any.
    ///
    /// The timeout takes precedence over the retry limit when both hold.
    pub fn give_up(&self, budget: &Budget) -> Option<GiveUp> {
        if self.timed_out(budget) {
            return Some(GiveUp::Timeout);
        }
        match budget.limit {
            Some(limit) if self.tries >= limit => Some(GiveUp::RetryLimit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_budget_check_rejects_bad_values() {
        for secs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let budget = Budget::unbounded().with_timeout_secs(secs);
            assert!(matches!(budget.check(), Err(AskError::Configuration(_))));
        }
        let budget = Budget::unbounded().with_limit(0);
        assert!(matches!(budget.check(), Err(AskError::Configuration(_))));
    }

    #[test]
    fn test_budget_check_accepts_valid_values() {
        assert!(Budget::unbounded().check().is_ok());
        let budget = Budget::unbounded()
            .with_timeout(Duration::from_millis(250))
            .with_limit(3);
        assert!(budget.check().is_ok());
        assert_eq!(budget.timeout_secs, Some(0.25));
    }

    #[test]
    fn test_session_limit_counts_attempts() {
        let budget = Budget::unbounded().with_limit(2);
        let mut session = Session::start();
        session.record_attempt();
        assert_eq!(session.give_up(&budget), None);
        session.record_attempt();
        assert_eq!(session.tries(), 2);
        assert_eq!(session.give_up(&budget), Some(GiveUp::RetryLimit));
    }

    #[test]
    fn test_session_timeout_wins_over_limit() {
        let budget = Budget::unbounded().with_timeout_secs(0.001).with_limit(1);
        let mut session = Session::start();
        session.record_attempt();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(session.give_up(&budget), Some(GiveUp::Timeout));
    }

    #[test]
    fn test_session_unbounded_never_gives_up() {
        let budget = Budget::unbounded();
        let mut session = Session::start();
        for _ in 0..1000 {
            session.record_attempt();
        }
        assert_eq!(session.give_up(&budget), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_budget_from_json() {
        let budget: Budget = serde_json::from_str(r#"{"limit": 3}"#).unwrap();
        assert_eq!(budget, Budget::unbounded().with_limit(3));

        let budget: Budget = serde_json::from_str(r#"{"timeout_secs": 1.5}"#).unwrap();
        assert_eq!(budget.timeout_secs, Some(1.5));
        assert_eq!(budget.limit, None);
    }

    #[test]
    fn test_give_up_converts_to_error() {
        assert!(matches!(AskError::from(GiveUp::Timeout), AskError::Timeout));
        assert!(matches!(AskError::from(GiveUp::RetryLimit), AskError::RetryLimit));
    }
}
