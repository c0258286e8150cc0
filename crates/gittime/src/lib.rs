//! gittime library
//!
//! This module exports the CLI building blocks of gittime for use in
//! integration tests and as a library.

pub mod app;
pub mod config;
pub mod render;
pub mod workdir;
