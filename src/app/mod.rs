//! Application orchestration layer.
//!
//! Holds the interactive editing session that sits between user input and
//! the layout model.

pub mod session;

pub use session::{Command, Notice, NoticeLevel, Session};
