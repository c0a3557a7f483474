//! Anonymizes email addresses in mail server log lines.
//!
//! Lines come in on stdin; for each one a JSON record goes out on stdout:
//! `{}` when nothing was rewritten, `{"msg":"<rewritten line>"}` otherwise.
//! Detection is deliberately over-broad (anything shaped like
//! `local@domain`), with one exception: Postfix message identifiers are
//! passed through untouched. How a detected address is rewritten is chosen
//! by a masking strategy configured once at startup.

pub mod config;
pub mod error;
pub mod matcher;
pub mod processor;
pub mod strategy;

pub use error::{AnonymizerError, Result};
