//! # askloop
//!
//! A Rust library for asking a user for input on the console until the input
//! is valid, with retry limits, timeouts and default values.
//!
//! ## Features
//!
//! (All feature versions)
//! - **Prompt Loop** - Prompt, read, validate, re-prompt with the reason on failure
//! - **Retry & Timeout Budget** - Give up after N attempts or T seconds, with an optional default
//! - **Input Sanitization & Validation** - Composable filters for the common cases
//! - **Ready-made Inputs** - Text, integers, choices, menus, yes/no and masked passwords
//!
//! ("serde" feature)
//! - **Budget configuration** - `Budget` can be loaded from any serde format
//!
//! ("tokio-dep" feature)
//! - **Async prompts** - `Ask::run_async` runs the blocking loop off the async runtime
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! askloop = "0.1"
//! askloop = { version = "0.1", features = ["tokio-dep"]}
//! ```
//!
//! ## Usage Examples
//!
//! ### Budgeted prompt with a default
//!
//! ```rust,no_run
//! use askloop::utils::Ask;
//!
//! // Three attempts, thirty seconds, "guest" if the user never gets it right
//! let name = Ask::text("Name: ")
//!     .limit(3)
//!     .timeout_secs(30.0)
//!     .default_value("guest".to_string())
//!     .run()
//!     .unwrap();
//! ```
//!
//! ### Custom validator
//!
//! ```rust,no_run
//! use askloop::utils::{Ask, ValidationFailure};
//!
//! let even = Ask::new("Even number: ", |value: String| match value.trim().parse::<u32>() {
//!     Ok(n) if n % 2 == 0 => Ok(n),
//!     _ => Err(ValidationFailure::new("Please enter an even number.")),
//! })
//! .run();
//! ```
//!
//! ### Give-up handling
//!
//! ```rust,no_run
//! use askloop::{AskError, utils::Ask};
//!
//! match Ask::yes_no("Deploy now? ").limit(2).run() {
//!     Ok(true) => println!("Deploying"),
//!     Ok(false) => println!("Skipped"),
//!     Err(AskError::RetryLimit) => eprintln!("No clear answer, aborting"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! ## Behavior Notes
//!
//! - Every read counts as an attempt, valid or not.
//! - The timeout is measured from the first prompt and is only checked after
//!   each answer; a blocked read is never interrupted.
//! - A valid answer that arrives after the timeout is discarded.
//! - The validator's message is always shown, even on the attempt that gives up.
//! - Defaults are returned untouched by the post-transform.
//!
//! ## Architecture
//!
//! - **`utils`** - The prompt loop, its budget, line readers and validation filters
//! - **`error`** - The [`AskError`] type returned by every prompt call
//!
//! ## License
//!
//! This project is licensed under the MIT License.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub use error::{AskError, Result};

pub mod utils;
