//! RSS 2.0 output.

pub mod constants;
pub mod date;
pub mod formatter;
pub mod writer;
