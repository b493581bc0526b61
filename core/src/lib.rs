//! # Roster Core
//!
//! Interactive sessions built on top of [`roster_common::record`].
//!
//! Sessions never touch the terminal directly. They read through a
//! [`LineSource`](input::LineSource) and write through a
//! [`TextSink`](roster_common::output::TextSink), so the CLI can plug in stdin and
//! a coloured terminal while tests plug in byte slices and vectors.

pub mod input;
pub mod session;
