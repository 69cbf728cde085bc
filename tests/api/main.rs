//! tests/api/main.rs
mod handlers;
mod helpers;
