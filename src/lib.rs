//! Room Planner Library
//!
//! This library provides the layout model for a simple room designer: room
//! dimensions, six wall colors, furniture placement and selection, and the
//! JSON save format, plus the command line front end built on it.

// Module declarations
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
