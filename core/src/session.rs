//! Sessions are short scripted conversations with the user.
//!
//! * [`greeting`] asks for a name and an age and answers with a few computed lines.
//! * [`walkthrough`] exercises every [`Record`](roster_common::record::Record) operation
//!   on two sample records.
//! * [`profile`] builds a single record from a [`ProfileRequest`](profile::ProfileRequest).

pub mod greeting;
pub mod profile;
pub mod walkthrough;
