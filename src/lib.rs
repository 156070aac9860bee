//! Chawen library exports for testing

pub mod core;
pub mod qa;
pub mod tui;

#[cfg(test)]
pub mod test_support;
