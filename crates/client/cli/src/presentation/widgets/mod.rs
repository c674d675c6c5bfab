//! Widget modules for the board UI.
pub mod board;
pub mod footer;
pub mod messages;
