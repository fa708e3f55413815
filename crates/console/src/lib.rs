//! Interactive line-oriented front end for the product catalog.

pub mod console;
pub mod input;

pub use console::Console;
