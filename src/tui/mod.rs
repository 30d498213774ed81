//! Terminal front end (crossterm).

mod input;
mod inspector;

pub use inspector::run;
