#![warn(
    clippy::perf,
    clippy::semicolon_if_nothing_returned,
    clippy::missing_const_for_fn,
    clippy::use_self
)]

pub mod command;
pub mod config;
pub mod graphemes;
pub mod program;
pub mod script;
pub mod shapes;

// re-export ropey
pub use ropey;

pub type SmartString = smartstring::SmartString<smartstring::LazyCompact>;
