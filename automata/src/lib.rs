#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

pub mod convert;
pub mod dfa;
pub mod graph;
pub mod nfa;
pub mod state;

pub use dfa::Dfa;
pub use graph::{DiGraph, Edge};
pub use nfa::{Nfa, Transition};
pub use state::{StateArena, StateId};
