//! GifSearch — keyword GIF search with paginated results and query history.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod managers;
pub mod services;
pub mod types;
