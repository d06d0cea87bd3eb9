#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod regexp;

pub mod error;
pub mod parser;

pub use automata;
pub use error::{ErrorKind, ParseResult, Position, SyntaxError};
pub use regexp::*;
