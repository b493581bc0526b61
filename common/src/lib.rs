//! # Roster Common
//!
//! Shared building blocks for the `roster` workspace.
//!
//! * **[`record`]**: The [`Record`](record::Record) entity, its age-update outcome and
//!   the notices its mutators produce.
//! * **[`output`]**: The [`TextSink`](output::TextSink) contract every line of output goes through.
//! * **[`error`]**: Errors shared by the sessions and the CLI.
//! * **[`config`]**: Runtime switches collected from the command line.
//!
//! The crate also exports thin logging macros ([`info!`], [`success!`], [`warn!`],
//! [`error!`]) so every crate logs with the same targets.

pub mod config;
pub mod error;
pub mod output;
pub mod record;

#[doc(hidden)]
pub use tracing as __tracing;

/// Target used for raw terminal output. Events on this target are printed without a prefix.
pub const PRINT_TARGET: &str = "roster::print";

/// Target used by [`success!`].
pub const SUCCESS_TARGET: &str = "roster::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

/// Logs an info event that the terminal renders as a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
