//! dfa-core - deterministic finite automaton engine
//!
//! Build an [`Automaton`] from the five-tuple `(states, alphabet, transition,
//! start, accepting)`, then ask whether inputs belong to its language.
//!
//! ```
//! use dfa_core::{samples, Location};
//!
//! let dfa = samples::a_before_b().unwrap();
//! assert!(dfa.run("aabbb".chars()).unwrap());
//! assert!(!dfa.run("aba".chars()).unwrap());
//! assert_eq!(dfa.final_location("ba".chars()).unwrap(), Location::State(&2));
//! ```
//!
//! States and symbols are any `Clone + Eq + Hash` tokens. Undefined
//! transitions are resolved by the automaton's [`Completion`] policy.

pub mod automaton;
pub mod builder;
pub mod error;
pub mod run;
pub mod samples;

mod table;

pub use automaton::Automaton;
pub use builder::AutomatonBuilder;
pub use dfa_config::Completion;
pub use error::{InvalidAutomaton, RunError};
pub use run::{Location, Walker};
