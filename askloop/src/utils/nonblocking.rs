//! Async entry point for the prompt loop (`tokio-dep` feature).
//!
//! The loop itself stays blocking; it is moved to tokio's blocking thread
//! pool so an async caller does not stall its runtime while the user types.
use crate::error::{AskError, Result};
use crate::utils::ask::Ask;
use std::io;

impl<T: Send + 'static> Ask<T> {
    /// Same as [`Ask::run`], awaited from an async context.
    ///
    /// # Example
    /// ```rust,no_run
    /// use askloop::utils::Ask;
    ///
    /// # async fn demo() -> askloop::Result<()> {
    /// let name = Ask::text("Name: ").limit(3).run_async().await?;
    /// println!("Hello {name}");
    /// # Ok(())
    /// # }
    /// ```
    #[cfg_attr(docsrs, doc(cfg(feature = "tokio-dep")))]
    pub async fn run_async(self) -> Result<T> {
        tokio::task::spawn_blocking(move || self.run())
            .await
            .map_err(|e| AskError::Io(io::Error::other(e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::budget::Budget;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_run_async_rejects_bad_budget() {
        let res = Ask::text("Name: ")
            .budget(Budget::unbounded().with_limit(0))
            .run_async()
            .await;
        assert!(matches!(res, Err(AskError::Configuration(_))));
    }
}
